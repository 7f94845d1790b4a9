//! Board store - the last saved shapes of every board, keyed by board id.
//!
//! Boards are independent: nothing is shared between entries. The store is
//! owned by the host application and handed to a [`crate::Whiteboard`] when
//! it opens or saves.

use crate::shape::ShapeCollection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Identifier of one whiteboard.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// In-memory map of board id to last saved shapes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardStore {
    boards: HashMap<BoardId, ShapeCollection>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&self, id: &BoardId) -> Option<&ShapeCollection> {
        self.boards.get(id)
    }

    /// Replace the saved shapes for `id`.
    pub fn save(&mut self, id: BoardId, shapes: ShapeCollection) {
        debug!(board = %id, shapes = shapes.len(), "board saved");
        self.boards.insert(id, shapes);
    }

    pub fn remove(&mut self, id: &BoardId) -> Option<ShapeCollection> {
        self.boards.remove(id)
    }

    pub fn contains(&self, id: &BoardId) -> bool {
        self.boards.contains_key(id)
    }

    /// Saved board ids, sorted.
    pub fn ids(&self) -> Vec<&BoardId> {
        let mut ids: Vec<&BoardId> = self.boards.keys().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
