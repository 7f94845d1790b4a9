//! Interaction state machine for pointer gestures.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Drawing     (pointer down with line/rectangle/pencil)
//! Idle -> Moving      (pointer down with selection, on a shape body)
//! Idle -> Resizing    (pointer down with selection, on a handle)
//! Idle -> Idle        (pointer down with selection, nothing hit)
//!
//! Any -> Idle         (pointer up - finalizes the gesture)
//! ```

use crate::shape::ShapeId;
use crate::types::{Coords, HitPosition, Point};

/// What the current gesture is doing, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Idle,
    Drawing,
    Moving,
    Resizing,
}

/// How a grabbed shape follows the pointer while moving.
#[derive(Clone, Debug, PartialEq)]
pub enum GrabOffset {
    /// Line or rectangle: pointer offset from `(x1, y1)`, plus the
    /// coordinates at grab time so the extent is preserved.
    Anchor { offset: Point, origin: Coords },
    /// Freehand: pointer offset from every path point.
    Points(Vec<Point>),
}

impl GrabOffset {
    /// Offsets for a line or rectangle grabbed at `pointer`.
    pub fn anchor(pointer: Point, origin: Coords) -> Self {
        GrabOffset::Anchor {
            offset: pointer.offset_from(origin.start()),
            origin,
        }
    }

    /// Offsets for a freehand path grabbed at `pointer`.
    pub fn points(pointer: Point, points: &[Point]) -> Self {
        GrabOffset::Points(points.iter().map(|p| pointer.offset_from(*p)).collect())
    }
}

/// Transient gesture state for one whiteboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Extending a freshly created shape
    Drawing { shape_id: ShapeId },

    /// Translating an existing shape
    Moving { shape_id: ShapeId, grab: GrabOffset },

    /// Dragging one handle of a line or rectangle
    Resizing {
        shape_id: ShapeId,
        /// Handle being dragged
        position: HitPosition,
        /// Coordinates when the handle was grabbed
        origin: Coords,
    },
}

impl InteractionState {
    pub fn action(&self) -> Action {
        match self {
            Self::Idle => Action::Idle,
            Self::Drawing { .. } => Action::Drawing,
            Self::Moving { .. } => Action::Moving,
            Self::Resizing { .. } => Action::Resizing,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Moving { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    /// The shape the current gesture acts on, if any
    pub fn selected_shape(&self) -> Option<ShapeId> {
        match self {
            Self::Idle => None,
            Self::Drawing { shape_id }
            | Self::Moving { shape_id, .. }
            | Self::Resizing { shape_id, .. } => Some(*shape_id),
        }
    }

    pub fn start_drawing(&mut self, shape_id: ShapeId) {
        *self = Self::Drawing { shape_id };
    }

    pub fn start_moving(&mut self, shape_id: ShapeId, grab: GrabOffset) {
        *self = Self::Moving { shape_id, grab };
    }

    pub fn start_resizing(&mut self, shape_id: ShapeId, position: HitPosition, origin: Coords) {
        *self = Self::Resizing {
            shape_id,
            position,
            origin,
        };
    }

    /// Reset to Idle, returning the state that was active.
    pub fn reset(&mut self) -> InteractionState {
        std::mem::take(self)
    }
}
