//! Pointer up - finalize the gesture and return to idle.

use crate::error::{WhiteboardError, WhiteboardResult};
use crate::input::state::InteractionState;
use crate::profile_scope;
use crate::whiteboard::Whiteboard;
use tracing::debug;

impl Whiteboard {
    /// End the current gesture.
    ///
    /// Lines and rectangles that were drawn or resized get their endpoints
    /// canonicalized in place. Moves need no finalize step.
    pub fn handle_pointer_up(&mut self) -> WhiteboardResult<()> {
        profile_scope!("handle_pointer_up");

        let finished = self.input_state.reset();
        let shape_id = match finished {
            InteractionState::Drawing { shape_id } | InteractionState::Resizing { shape_id, .. } => shape_id,
            InteractionState::Moving { shape_id, .. } => {
                debug!(shape = shape_id, "move finished");
                return Ok(());
            }
            InteractionState::Idle => return Ok(()),
        };

        let shape = self
            .elements()
            .get(shape_id)
            .ok_or(WhiteboardError::UnknownShape(shape_id))?;
        if !shape.tool().requires_canonicalization() {
            return Ok(());
        }

        let canonical = shape.canonicalize();
        self.replace_in_place(shape_id, canonical)?;
        debug!(shape = shape_id, snapshots = self.history().len(), "gesture finalized");
        Ok(())
    }
}
