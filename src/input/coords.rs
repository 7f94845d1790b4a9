//! Pointer coordinate extraction.
//!
//! Mouse and touch events are reduced to a single canvas position here so the
//! gesture handlers never care which device produced them.

use crate::types::Point;

/// A pointer or touch event, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Mouse { x: f64, y: f64 },
    /// Active touch points; the first one drives the gesture
    Touch { touches: Vec<Point> },
}

impl PointerInput {
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerInput::Mouse { x, y }
    }

    /// Single-finger touch.
    pub fn touch(x: f64, y: f64) -> Self {
        PointerInput::Touch {
            touches: vec![Point::new(x, y)],
        }
    }

    /// Position that drives the gesture, or `None` for a touch event that
    /// carries no touches (a touch end).
    #[inline]
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse { x, y } => Some(Point::new(*x, *y)),
            PointerInput::Touch { touches } => touches.first().copied(),
        }
    }
}

impl From<Point> for PointerInput {
    fn from(p: Point) -> Self {
        PointerInput::mouse(p.x, p.y)
    }
}
