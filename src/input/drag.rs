//! Pointer move - extend, translate or reshape the active shape.
//!
//! Mouse move fires many times per second during a gesture. Every update is
//! an overwrite commit, so history does not grow while dragging.

use crate::error::{WhiteboardError, WhiteboardResult};
use crate::geometry::{cursor_for_position, resized_coordinates};
use crate::input::PointerInput;
use crate::input::state::{GrabOffset, InteractionState};
use crate::profile_scope;
use crate::shape::ShapeId;
use crate::types::{Coords, CursorStyle, Point, ToolType};
use crate::whiteboard::Whiteboard;
use tracing::warn;

impl Whiteboard {
    pub fn handle_pointer_move(&mut self, input: &PointerInput) -> WhiteboardResult<()> {
        profile_scope!("handle_pointer_move");

        let Some(pos) = input.position() else {
            return Ok(());
        };

        if self.tool() == ToolType::Selection {
            let position = self.element_at(pos.x, pos.y).map(|hit| hit.position);
            self.cursor = cursor_for_position(position);
        } else {
            self.cursor = CursorStyle::Default;
        }

        let result = match self.input_state.clone() {
            InteractionState::Idle => Ok(()),
            InteractionState::Drawing { shape_id } => self.extend_drawing(shape_id, pos),
            InteractionState::Moving { shape_id, grab } => self.move_shape(shape_id, &grab, pos),
            InteractionState::Resizing {
                shape_id,
                position,
                origin,
            } => self.update_element(shape_id, resized_coordinates(pos.x, pos.y, position, origin)),
        };

        if let Err(ref e) = result {
            // The gesture's shape is gone (undone mid-drag); drop the gesture
            warn!("abandoning gesture: {}", e);
            self.input_state.reset();
        }
        result
    }

    fn extend_drawing(&mut self, id: ShapeId, pos: Point) -> WhiteboardResult<()> {
        let start = self
            .elements()
            .get(id)
            .ok_or(WhiteboardError::UnknownShape(id))?
            .coords()
            .map_or(pos, |c| c.start());
        self.update_element(id, Coords::new(start.x, start.y, pos.x, pos.y))
    }

    fn move_shape(&mut self, id: ShapeId, grab: &GrabOffset, pos: Point) -> WhiteboardResult<()> {
        match grab {
            GrabOffset::Anchor { offset, origin } => {
                let coords = origin.moved_to(pos.offset_from(*offset));
                self.update_element(id, coords)
            }
            GrabOffset::Points(offsets) => {
                let mut shape = self
                    .elements()
                    .get(id)
                    .cloned()
                    .ok_or(WhiteboardError::UnknownShape(id))?;
                shape.set_points(offsets.iter().map(|o| pos.offset_from(*o)).collect());
                self.replace_in_place(id, shape)
            }
        }
    }
}
