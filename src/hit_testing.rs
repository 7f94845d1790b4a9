//! Hit testing - which shape, and which part of it, is under a point.
//!
//! Shapes are scanned in insertion order and the first match wins, even
//! when a later shape is drawn on top of it. [`HitTester`] narrows the scan
//! with an R-tree but resolves candidates in the same order, so both paths
//! always agree.

use crate::geometry::HitTolerance;
use crate::profile_scope;
use crate::shape::{Shape, ShapeCollection, ShapeId};
use crate::spatial_index::SpatialIndex;
use crate::types::HitPosition;
use std::collections::HashSet;

/// A shape under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Hit {
    pub id: ShapeId,
    pub position: HitPosition,
    /// The shape as it was when hit
    pub shape: Shape,
}

/// First shape in `shapes` that contains `(x, y)`, by plain ordered scan.
pub fn element_at_position(x: f64, y: f64, shapes: &ShapeCollection, tolerance: &HitTolerance) -> Option<Hit> {
    shapes.iter().enumerate().find_map(|(id, shape)| {
        tolerance.position_within(x, y, shape).map(|position| Hit {
            id,
            position,
            shape: shape.clone(),
        })
    })
}

/// Cached R-tree hit tester for one board.
///
/// Call [`HitTester::invalidate`] whenever the displayed snapshot changes
/// wholesale (undo, redo, appends); the index is rebuilt on the next query.
/// A single shape edited in place is re-indexed with
/// [`HitTester::refresh_shape`] instead.
pub struct HitTester {
    index: SpatialIndex,
    tolerance: HitTolerance,
    stale: bool,
    rebuilds: usize,
}

impl HitTester {
    pub fn new(tolerance: HitTolerance) -> Self {
        Self {
            index: SpatialIndex::new(),
            tolerance,
            stale: true,
            rebuilds: 0,
        }
    }

    pub fn tolerance(&self) -> &HitTolerance {
        &self.tolerance
    }

    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Number of full index rebuilds so far.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    /// Re-index one shape whose geometry changed in place. A stale index is
    /// left for the next query to rebuild.
    pub fn refresh_shape(&mut self, id: ShapeId, shape: &Shape) {
        if !self.stale {
            self.index.update(id, shape, &self.tolerance);
        }
    }

    /// First shape in insertion order that contains `(x, y)`.
    pub fn element_at(&mut self, x: f64, y: f64, shapes: &ShapeCollection) -> Option<Hit> {
        profile_scope!("hit_test_shapes");

        if self.stale || self.index.len() != shapes.len() {
            self.index.rebuild(shapes, &self.tolerance);
            self.stale = false;
            self.rebuilds += 1;
        }

        let candidates: HashSet<ShapeId> = self.index.query_point(x, y).into_iter().collect();
        if candidates.is_empty() {
            return None;
        }

        shapes
            .iter()
            .enumerate()
            .filter(|(id, _)| candidates.contains(id))
            .find_map(|(id, shape)| {
                self.tolerance.position_within(x, y, shape).map(|position| Hit {
                    id,
                    position,
                    shape: shape.clone(),
                })
            })
    }
}

impl Default for HitTester {
    fn default() -> Self {
        Self::new(HitTolerance::default())
    }
}
