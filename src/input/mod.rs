//! Pointer, touch and keyboard input for the whiteboard.
//!
//! ## Architecture
//!
//! Every gesture runs through one explicit state machine
//! ([`InteractionState`]). Mouse and touch events are reduced to a single
//! position by [`PointerInput`] before they reach the handlers, so both
//! drive identical transitions.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine and grab offsets
//! - `coords` - Pointer/touch position extraction
//! - `shortcuts` - Undo/redo key bindings
//! - `mouse_down` - Pointer down (start drawing, pick up a shape)
//! - `drag` - Pointer move (extend, move, resize)
//! - `mouse_up` - Pointer up (canonicalize, back to idle)

pub mod coords;
mod drag;
mod mouse_down;
mod mouse_up;
mod shortcuts;
mod state;

pub use coords::PointerInput;
pub use shortcuts::{KeyInput, ShortcutAction, shortcut_for};
pub use state::{Action, GrabOffset, InteractionState};
