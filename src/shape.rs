//! Shape model - the drawable elements on a whiteboard and the ordered
//! collection that holds them.

use crate::error::{WhiteboardError, WhiteboardResult};
use crate::types::{Coords, Point, ToolType};
use serde::{Deserialize, Serialize};

/// Handle of a shape: its index in the owning collection at creation time.
///
/// Handles are only meaningful within one snapshot lineage; they are not
/// unique across history.
pub type ShapeId = usize;

/// One drawable element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "lowercase")]
pub enum Shape {
    Line { id: ShapeId, coords: Coords },
    Rectangle { id: ShapeId, coords: Coords },
    #[serde(rename = "pencil")]
    Freehand { id: ShapeId, points: Vec<Point> },
}

impl Shape {
    /// Create a shape for a drawing tool.
    ///
    /// Freehand strokes start as a single point at `(x1, y1)`; the second
    /// point is ignored for them. The selection tool cannot create shapes.
    pub fn create(id: ShapeId, x1: f64, y1: f64, x2: f64, y2: f64, tool: ToolType) -> WhiteboardResult<Self> {
        let coords = Coords::new(x1, y1, x2, y2);
        match tool {
            ToolType::Line => Ok(Shape::Line { id, coords }),
            ToolType::Rectangle => Ok(Shape::Rectangle { id, coords }),
            ToolType::Pencil => Ok(Shape::Freehand {
                id,
                points: vec![Point::new(x1, y1)],
            }),
            ToolType::Selection => Err(WhiteboardError::unsupported(tool, "create")),
        }
    }

    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line { id, .. } | Shape::Rectangle { id, .. } | Shape::Freehand { id, .. } => *id,
        }
    }

    /// Tool that produced this shape.
    pub fn tool(&self) -> ToolType {
        match self {
            Shape::Line { .. } => ToolType::Line,
            Shape::Rectangle { .. } => ToolType::Rectangle,
            Shape::Freehand { .. } => ToolType::Pencil,
        }
    }

    /// Endpoint coordinates for lines and rectangles.
    pub fn coords(&self) -> Option<Coords> {
        match self {
            Shape::Line { coords, .. } | Shape::Rectangle { coords, .. } => Some(*coords),
            Shape::Freehand { .. } => None,
        }
    }

    /// Path points for freehand strokes.
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Shape::Freehand { points, .. } => Some(points),
            _ => None,
        }
    }

    /// Apply an in-progress gesture update.
    ///
    /// Lines and rectangles take the new coordinates; freehand strokes grow by
    /// the point `(x2, y2)`.
    pub fn update(&mut self, new_coords: Coords) {
        match self {
            Shape::Line { coords, .. } | Shape::Rectangle { coords, .. } => *coords = new_coords,
            Shape::Freehand { points, .. } => points.push(new_coords.end()),
        }
    }

    /// Replace a freehand stroke's path. No effect on other shapes.
    pub fn set_points(&mut self, new_points: Vec<Point>) {
        if let Shape::Freehand { points, .. } = self {
            *points = new_points;
        }
    }

    /// Endpoints reordered into canonical orientation.
    ///
    /// Rectangles become top-left to bottom-right. Lines start at the point
    /// with the smaller x, or the smaller y on an x tie. Freehand strokes are
    /// returned unchanged.
    pub fn canonicalize(&self) -> Shape {
        match self {
            Shape::Rectangle { id, coords } => {
                let Coords { x1, y1, x2, y2 } = *coords;
                Shape::Rectangle {
                    id: *id,
                    coords: Coords::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
                }
            }
            Shape::Line { id, coords } => {
                let Coords { x1, y1, x2, y2 } = *coords;
                let coords = if x1 < x2 || (x1 == x2 && y1 < y2) {
                    *coords
                } else {
                    Coords::new(x2, y2, x1, y1)
                };
                Shape::Line { id: *id, coords }
            }
            Shape::Freehand { .. } => self.clone(),
        }
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Line { coords, .. } | Shape::Rectangle { coords, .. } => (
                coords.x1.min(coords.x2),
                coords.y1.min(coords.y2),
                coords.x1.max(coords.x2),
                coords.y1.max(coords.y2),
            ),
            Shape::Freehand { points, .. } => points.iter().fold(
                (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
                |(min_x, min_y, max_x, max_y), p| {
                    (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
                },
            ),
        }
    }
}

/// Whether a draw or resize gesture with `tool` ends with a canonicalizing
/// finalize step.
pub fn requires_canonicalization(tool: ToolType) -> bool {
    tool.requires_canonicalization()
}

/// Ordered shapes on one board. Insertion order is drawing order.
///
/// Shapes are addressed by [`ShapeId`], which equals their index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the next created shape will get.
    pub fn next_id(&self) -> ShapeId {
        self.shapes.len()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }

    /// Copy of this collection with `shape` appended.
    pub fn with_shape(&self, shape: Shape) -> Self {
        let mut next = self.clone();
        next.shapes.push(shape);
        next
    }

    /// Copy of this collection with the shape at `id` replaced.
    pub fn with_replaced(&self, id: ShapeId, shape: Shape) -> WhiteboardResult<Self> {
        let mut next = self.clone();
        let slot = next
            .shapes
            .get_mut(id)
            .ok_or(WhiteboardError::UnknownShape(id))?;
        *slot = shape;
        Ok(next)
    }
}

impl From<Vec<Shape>> for ShapeCollection {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
