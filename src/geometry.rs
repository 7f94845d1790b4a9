//! Geometry and hit-testing math.
//!
//! Pure functions over points and shapes: distances, handle proximity,
//! segment membership, which part of a shape a point is on, and how a
//! drag on a handle reshapes a line or rectangle. Nothing here clamps to the
//! canvas; bounds are the renderer's business.

use crate::constants::{FREEHAND_SEGMENT_TOLERANCE, NEAR_POINT_EPSILON, SEGMENT_TOLERANCE};
use crate::shape::Shape;
use crate::types::{Coords, CursorStyle, HitPosition, Point};
use serde::{Deserialize, Serialize};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Returns `tag` if `(x, y)` is strictly within [`NEAR_POINT_EPSILON`] of the
/// target on both axes.
pub fn near_point(x: f64, y: f64, target_x: f64, target_y: f64, tag: HitPosition) -> Option<HitPosition> {
    near_point_within(x, y, target_x, target_y, tag, NEAR_POINT_EPSILON)
}

fn near_point_within(
    x: f64,
    y: f64,
    target_x: f64,
    target_y: f64,
    tag: HitPosition,
    epsilon: f64,
) -> Option<HitPosition> {
    ((x - target_x).abs() < epsilon && (y - target_y).abs() < epsilon).then_some(tag)
}

/// Degenerate-triangle test: `(x, y)` is on the segment when the detour
/// through it is less than `tolerance` longer than the segment itself.
pub fn on_segment(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64, tolerance: f64) -> Option<HitPosition> {
    let a = Point::new(x1, y1);
    let b = Point::new(x2, y2);
    let c = Point::new(x, y);
    let offset = distance(a, b) - (distance(a, c) + distance(b, c));
    (offset.abs() < tolerance).then_some(HitPosition::Inside)
}

/// Which part of `shape` the point `(x, y)` is on, using default tolerances.
pub fn position_within(x: f64, y: f64, shape: &Shape) -> Option<HitPosition> {
    HitTolerance::default().position_within(x, y, shape)
}

/// New coordinates after dragging the handle at `position` to `(x, y)`.
///
/// Only the endpoint(s) named by the handle move. `Inside` leaves the
/// coordinates unchanged.
pub fn resized_coordinates(x: f64, y: f64, position: HitPosition, coords: Coords) -> Coords {
    let Coords { x1, y1, x2, y2 } = coords;
    match position {
        HitPosition::TopLeft | HitPosition::Start => Coords::new(x, y, x2, y2),
        HitPosition::TopRight => Coords::new(x1, y, x, y2),
        HitPosition::BottomLeft => Coords::new(x, y1, x2, y),
        HitPosition::BottomRight | HitPosition::End => Coords::new(x1, y1, x, y),
        HitPosition::Inside => coords,
    }
}

/// Cursor hint for a hover position.
pub fn cursor_for_position(position: Option<HitPosition>) -> CursorStyle {
    match position {
        Some(HitPosition::TopLeft | HitPosition::BottomRight) => CursorStyle::NwseResize,
        Some(HitPosition::TopRight | HitPosition::BottomLeft) => CursorStyle::NeswResize,
        Some(HitPosition::Start | HitPosition::End) => CursorStyle::EwResize,
        Some(HitPosition::Inside) => CursorStyle::Move,
        None => CursorStyle::Default,
    }
}

/// Tolerances used when deciding whether a point touches a shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTolerance {
    /// Handle half-width for endpoints and corners
    pub near_point: f64,
    /// Segment slack for lines
    pub segment: f64,
    /// Segment slack for freehand strokes
    pub freehand_segment: f64,
}

impl Default for HitTolerance {
    fn default() -> Self {
        Self {
            near_point: NEAR_POINT_EPSILON,
            segment: SEGMENT_TOLERANCE,
            freehand_segment: FREEHAND_SEGMENT_TOLERANCE,
        }
    }
}

impl HitTolerance {
    /// Most specific position of `(x, y)` on `shape`.
    ///
    /// Handles win over the body: line endpoints before the segment,
    /// rectangle corners (tl, tr, bl, br) before the filled box.
    pub fn position_within(&self, x: f64, y: f64, shape: &Shape) -> Option<HitPosition> {
        let near = |tx, ty, tag| near_point_within(x, y, tx, ty, tag, self.near_point);
        match shape {
            Shape::Line { coords, .. } => {
                let Coords { x1, y1, x2, y2 } = *coords;
                near(x1, y1, HitPosition::Start)
                    .or_else(|| near(x2, y2, HitPosition::End))
                    .or_else(|| on_segment(x1, y1, x2, y2, x, y, self.segment))
            }
            Shape::Rectangle { coords, .. } => {
                let Coords { x1, y1, x2, y2 } = *coords;
                near(x1, y1, HitPosition::TopLeft)
                    .or_else(|| near(x2, y1, HitPosition::TopRight))
                    .or_else(|| near(x1, y2, HitPosition::BottomLeft))
                    .or_else(|| near(x2, y2, HitPosition::BottomRight))
                    .or_else(|| {
                        (x >= x1 && x <= x2 && y >= y1 && y <= y2).then_some(HitPosition::Inside)
                    })
            }
            Shape::Freehand { points, .. } => points
                .windows(2)
                .any(|pair| {
                    on_segment(pair[0].x, pair[0].y, pair[1].x, pair[1].y, x, y, self.freehand_segment)
                        .is_some()
                })
                .then_some(HitPosition::Inside),
        }
    }

    /// How far outside a shape's bounding box a hit can still land.
    ///
    /// Segment membership accepts an ellipse around each segment whose
    /// semi-minor axis grows with the segment length, so the margin depends
    /// on the longest segment.
    pub fn reach(&self, shape: &Shape) -> f64 {
        let ellipse = |length: f64, slack: f64| slack + (length * slack).sqrt();
        match shape {
            Shape::Line { coords, .. } => {
                let length = distance(coords.start(), coords.end());
                self.near_point.max(ellipse(length, self.segment))
            }
            Shape::Rectangle { .. } => self.near_point,
            Shape::Freehand { points, .. } => {
                let longest = points
                    .windows(2)
                    .map(|pair| distance(pair[0], pair[1]))
                    .fold(0.0, f64::max);
                ellipse(longest, self.freehand_segment)
            }
        }
    }
}
