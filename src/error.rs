//! Error types for whiteboard operations.

use crate::shape::ShapeId;
use thiserror::Error;

/// Errors that reject a single whiteboard operation.
///
/// None of these leave history in a partially updated state: the operation
/// that fails is the only thing that does not happen.
#[derive(Error, Debug)]
pub enum WhiteboardError {
    /// A tool identifier reached an operation that cannot handle it.
    /// This is a tool-registration bug, not a user error.
    #[error("Tool type {tool} not supported for {operation}")]
    UnsupportedTool {
        tool: String,
        operation: &'static str,
    },

    /// A shape handle that does not exist in the current snapshot
    #[error("No shape with id {0} in the current snapshot")]
    UnknownShape(ShapeId),

    /// The export collaborator could not produce an image
    #[error("Export failed: {0}")]
    Export(String),
}

/// Result type alias for whiteboard operations
pub type WhiteboardResult<T> = Result<T, WhiteboardError>;

impl WhiteboardError {
    pub(crate) fn unsupported(tool: impl ToString, operation: &'static str) -> Self {
        WhiteboardError::UnsupportedTool {
            tool: tool.to_string(),
            operation,
        }
    }
}
