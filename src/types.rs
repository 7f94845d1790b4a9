//! Core value types for the whiteboard.
//!
//! Points and coordinate boxes, the closed set of tools, the hit positions
//! returned by hit testing, and the cursor hints derived from them.

use crate::error::WhiteboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Geometry Values
// ============================================================================

/// A position on the canvas, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    pub fn offset_from(&self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The two defining points of a line or rectangle.
///
/// `(x1, y1)` is where the gesture started and `(x2, y2)` where it ended,
/// until the shape is canonicalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Coords {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Zero-extent coordinates at a single point.
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Signed extent `(x2 - x1, y2 - y1)`.
    pub fn extent(&self) -> (f64, f64) {
        (self.x2 - self.x1, self.y2 - self.y1)
    }

    /// Same extent, with the start moved to `origin`.
    pub fn moved_to(&self, origin: Point) -> Self {
        let (width, height) = self.extent();
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }
}

// ============================================================================
// Tools
// ============================================================================

/// The tools a user can pick.
///
/// Only `Line`, `Rectangle` and `Pencil` produce shapes; `Selection` picks up
/// existing ones.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    Selection,
    Line,
    Rectangle,
    #[default]
    Pencil,
}

impl ToolType {
    /// All tools, in toolbar order.
    pub const ALL: [ToolType; 4] = [
        ToolType::Selection,
        ToolType::Line,
        ToolType::Rectangle,
        ToolType::Pencil,
    ];

    /// Stable identifier, as used in serialized shapes.
    pub fn id(&self) -> &'static str {
        match self {
            ToolType::Selection => "selection",
            ToolType::Line => "line",
            ToolType::Rectangle => "rectangle",
            ToolType::Pencil => "pencil",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolType::Selection => "Selection",
            ToolType::Line => "Line",
            ToolType::Rectangle => "Rectangle",
            ToolType::Pencil => "Pencil",
        }
    }

    /// Returns true if pressing on the canvas with this tool creates a shape.
    pub fn is_drawing_tool(&self) -> bool {
        !matches!(self, ToolType::Selection)
    }

    /// Returns true if shapes made with this tool get their endpoints
    /// reordered once a draw or resize gesture ends.
    pub fn requires_canonicalization(&self) -> bool {
        matches!(self, ToolType::Line | ToolType::Rectangle)
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolType {
    type Err = WhiteboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolType::ALL
            .into_iter()
            .find(|tool| tool.id() == s)
            .ok_or_else(|| WhiteboardError::UnsupportedTool {
                tool: s.to_string(),
                operation: "select",
            })
    }
}

// ============================================================================
// Hit Positions
// ============================================================================

/// Which part of a shape a point landed on.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitPosition {
    /// Line start point
    #[serde(rename = "start")]
    Start,
    /// Line end point
    #[serde(rename = "end")]
    End,
    #[serde(rename = "tl")]
    TopLeft,
    #[serde(rename = "tr")]
    TopRight,
    #[serde(rename = "bl")]
    BottomLeft,
    #[serde(rename = "br")]
    BottomRight,
    /// On the body of the shape, away from any handle
    #[serde(rename = "inside")]
    Inside,
}

impl HitPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HitPosition::Start => "start",
            HitPosition::End => "end",
            HitPosition::TopLeft => "tl",
            HitPosition::TopRight => "tr",
            HitPosition::BottomLeft => "bl",
            HitPosition::BottomRight => "br",
            HitPosition::Inside => "inside",
        }
    }

    pub fn is_inside(&self) -> bool {
        matches!(self, HitPosition::Inside)
    }
}

impl fmt::Display for HitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pointer cursor to show for a hover position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    /// Diagonal resize, top-left to bottom-right
    NwseResize,
    /// Diagonal resize, top-right to bottom-left
    NeswResize,
    /// Horizontal resize, used for line endpoints
    EwResize,
}

impl CursorStyle {
    /// CSS cursor keyword.
    pub fn css_name(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Move => "move",
            CursorStyle::NwseResize => "nwse-resize",
            CursorStyle::NeswResize => "nesw-resize",
            CursorStyle::EwResize => "ew-resize",
        }
    }
}
