//! Sketchboard - the interaction core of a sketch-to-comic whiteboard.
//!
//! Users draw lines, rectangles and freehand strokes, pick them up to move or
//! resize them, and step through a linear undo/redo history. The finished
//! sketch is exported and restyled by a remote generator into comic panels.
//!
//! Rendering, rasterizing and the remote generator are host collaborators,
//! reached through the [`render::Renderer`], [`export::Exporter`] and
//! [`comic::ImageGenerator`] traits.
//!
//! ## Data flow
//!
//! ```text
//! PointerInput -> Whiteboard (InteractionState)
//!              -> hit_testing / geometry
//!              -> Shape / ShapeCollection update
//!              -> History (commit or overwrite)
//!              -> render::draw_elements (host)
//! ```

pub mod comic;
pub mod constants;
pub mod error;
pub mod export;
pub mod geometry;
pub mod hit_testing;
pub mod history;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod perf;
pub mod render;
pub mod settings;
pub mod shape;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod whiteboard;

pub use error::{WhiteboardError, WhiteboardResult};
pub use history::History;
pub use shape::{Shape, ShapeCollection, ShapeId};
pub use types::{Coords, CursorStyle, HitPosition, Point, ToolType};
pub use whiteboard::Whiteboard;
