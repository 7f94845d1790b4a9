//! Whiteboard-wide constants.
//!
//! Centralizes the hit-testing tolerances and drawing defaults so the
//! geometry, settings and controller code agree on the same numbers.

// ============================================================================
// Hit Testing
// ============================================================================

/// Half-width of the square around an endpoint or corner that counts as a
/// grab handle, in device pixels. The comparison is strict.
pub const NEAR_POINT_EPSILON: f64 = 5.0;

/// Allowed slack between `|a-p| + |p-b|` and `|a-b|` for a point to lie on a
/// line segment.
pub const SEGMENT_TOLERANCE: f64 = 1.0;

/// Segment slack used for freehand strokes, which are thin and hard to hit.
pub const FREEHAND_SEGMENT_TOLERANCE: f64 = 5.0;

// ============================================================================
// Drawing Defaults
// ============================================================================

/// Stroke diameter handed to the renderer when outlining freehand paths
pub const DEFAULT_STROKE_SIZE: f64 = 3.0;

/// Decimal places used when formatting SVG path coordinates
pub const SVG_PATH_PRECISION: usize = 2;

/// Minimum number of outline points needed to build a closed stroke path
pub const MIN_STROKE_OUTLINE_POINTS: usize = 4;

// ============================================================================
// Comic Generation
// ============================================================================

/// Theme selected when a generation session opens
pub const DEFAULT_THEME: &str = "sketch";

/// Notice shown when the remote generator fails
pub const GENERATION_FAILED_MESSAGE: &str = "Unable to generate image.";

/// MIME prefix of exported canvas images
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
