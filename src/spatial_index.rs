//! Spatial Index Module
//!
//! R-tree over padded shape bounding boxes. It answers "which shapes could
//! the pointer be touching" so the precise geometry only runs on a few
//! candidates. Ordering of the final answer is left to `hit_testing`.

use crate::geometry::HitTolerance;
use crate::shape::{Shape, ShapeCollection, ShapeId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A shape's bounding box, padded by its hit reach.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub shape_id: ShapeId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(shape_id: ShapeId, bounds: (f64, f64, f64, f64), padding: f64) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds;
        Self {
            shape_id,
            min_x: min_x - padding,
            min_y: min_y - padding,
            max_x: max_x + padding,
            max_y: max_y + padding,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape_id == other.shape_id
    }
}

/// Spatial index for the shapes of one snapshot.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ShapeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index over every shape in `shapes`.
    pub fn from_shapes(shapes: &ShapeCollection, tolerance: &HitTolerance) -> Self {
        let mut index = Self::new();
        index.rebuild(shapes, tolerance);
        index
    }

    pub fn insert(&mut self, entry: SpatialEntry) {
        if let Some(old_entry) = self.entries.remove(&entry.shape_id) {
            self.tree.remove(&old_entry);
        }
        self.tree.insert(entry);
        self.entries.insert(entry.shape_id, entry);
    }

    /// Re-index one shape after its geometry changed.
    pub fn update(&mut self, shape_id: ShapeId, shape: &Shape, tolerance: &HitTolerance) {
        self.insert(SpatialEntry::new(shape_id, shape.bounds(), tolerance.reach(shape)));
    }

    /// Ids of all shapes whose padded box contains the point. Unordered.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<ShapeId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.shape_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild(&mut self, shapes: &ShapeCollection, tolerance: &HitTolerance) {
        let entries: Vec<SpatialEntry> = shapes
            .iter()
            .enumerate()
            .map(|(id, shape)| SpatialEntry::new(id, shape.bounds(), tolerance.reach(shape)))
            .collect();

        self.entries = entries.iter().map(|e| (e.shape_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
