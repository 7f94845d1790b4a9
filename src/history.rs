//! Linear undo/redo history over whole-state snapshots.
//!
//! ```text
//! snapshots: [s0, s1, s2, s3]
//!                      ^ cursor = 2   (s3 is redoable)
//!
//! commit(x)             -> [s0, s1, s2, x], cursor 3   (s3 discarded)
//! commit(x, overwrite)  -> [s0, s1, x, s3], cursor 2
//! ```
//!
//! Undo and redo only move the cursor. History is unbounded.

use tracing::trace;

/// Snapshot log with a cursor. Never empty; the cursor is always valid.
#[derive(Clone, Debug)]
pub struct History<T> {
    snapshots: Vec<T>,
    cursor: usize,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &T {
        // cursor < snapshots.len() holds for every constructor and mutation
        &self.snapshots[self.cursor]
    }

    /// Record `state`.
    ///
    /// With `overwrite`, the current snapshot is replaced in place (used for
    /// every pointer move of a gesture). Otherwise redoable snapshots are
    /// dropped, `state` is appended, and the cursor advances.
    pub fn commit(&mut self, state: T, overwrite: bool) {
        if overwrite {
            self.snapshots[self.cursor] = state;
            trace!(cursor = self.cursor, "history overwrite");
        } else {
            self.snapshots.truncate(self.cursor + 1);
            self.snapshots.push(state);
            self.cursor += 1;
            trace!(cursor = self.cursor, len = self.snapshots.len(), "history commit");
        }
    }

    /// Record a state derived from the current one.
    pub fn commit_with(&mut self, update: impl FnOnce(&T) -> T, overwrite: bool) {
        let next = update(self.current());
        self.commit(next, overwrite);
    }

    /// Step back. Returns false at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots(&self) -> &[T] {
        &self.snapshots
    }
}

impl<T: Clone + Default> Default for History<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
