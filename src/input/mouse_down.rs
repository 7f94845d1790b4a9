//! Pointer down - start drawing, or pick up a shape to move or resize.

use crate::error::WhiteboardResult;
use crate::input::PointerInput;
use crate::input::state::GrabOffset;
use crate::profile_scope;
use crate::shape::Shape;
use crate::types::{Point, ToolType};
use crate::whiteboard::Whiteboard;
use tracing::debug;

impl Whiteboard {
    pub fn handle_pointer_down(&mut self, input: &PointerInput) -> WhiteboardResult<()> {
        profile_scope!("handle_pointer_down");

        let Some(pos) = input.position() else {
            return Ok(());
        };

        match self.tool() {
            ToolType::Selection => {
                self.pick_up(pos);
                Ok(())
            }
            tool => self.start_drawing(pos, tool),
        }
    }

    fn pick_up(&mut self, pos: Point) {
        let Some(hit) = self.element_at(pos.x, pos.y) else {
            return;
        };

        self.checkpoint();

        if hit.position.is_inside() {
            let grab = match &hit.shape {
                Shape::Freehand { points, .. } => GrabOffset::points(pos, points),
                Shape::Line { coords, .. } | Shape::Rectangle { coords, .. } => {
                    GrabOffset::anchor(pos, *coords)
                }
            };
            self.input_state.start_moving(hit.id, grab);
            debug!(shape = hit.id, "moving");
        } else if let Some(origin) = hit.shape.coords() {
            self.input_state.start_resizing(hit.id, hit.position, origin);
            debug!(shape = hit.id, handle = %hit.position, "resizing");
        }
    }

    fn start_drawing(&mut self, pos: Point, tool: ToolType) -> WhiteboardResult<()> {
        let id = self.elements().next_id();
        let shape = Shape::create(id, pos.x, pos.y, pos.x, pos.y, tool)?;
        let next = self.elements().with_shape(shape);
        self.commit(next, false);
        self.input_state.start_drawing(id);
        debug!(shape = id, %tool, x = pos.x, y = pos.y, "drawing");
        Ok(())
    }
}
