//! Rendering hand-off.
//!
//! The core never touches pixels. Each shape is turned into a
//! [`RenderPrimitive`] and passed to a host-provided [`Renderer`]; freehand
//! strokes arrive as raw points plus a stroke size, and the host outlines
//! them (for example with a pressure-stroke algorithm) before filling.
//! [`svg_path_from_stroke`] turns such an outline into a smooth SVG path.

use crate::constants::{MIN_STROKE_OUTLINE_POINTS, SVG_PATH_PRECISION};
use crate::shape::{Shape, ShapeCollection};
use crate::types::Point;

/// Drawing commands for one shape.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderPrimitive {
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Width and height may be negative before the shape is canonicalized
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Stroke { points: Vec<Point>, size: f64 },
}

impl RenderPrimitive {
    pub fn for_shape(shape: &Shape, stroke_size: f64) -> Self {
        match shape {
            Shape::Line { coords, .. } => RenderPrimitive::Line {
                x1: coords.x1,
                y1: coords.y1,
                x2: coords.x2,
                y2: coords.y2,
            },
            Shape::Rectangle { coords, .. } => {
                let (width, height) = coords.extent();
                RenderPrimitive::Rectangle {
                    x: coords.x1,
                    y: coords.y1,
                    width,
                    height,
                }
            }
            Shape::Freehand { points, .. } => RenderPrimitive::Stroke {
                points: points.clone(),
                size: stroke_size,
            },
        }
    }
}

/// Host drawing surface.
pub trait Renderer {
    /// Wipe the surface before a redraw.
    fn clear(&mut self);
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);
    fn draw_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Outline and fill a freehand path.
    fn fill_stroke(&mut self, points: &[Point], size: f64);
}

/// Redraw `shapes` from scratch, in insertion order.
pub fn draw_elements<R: Renderer + ?Sized>(renderer: &mut R, shapes: &ShapeCollection, stroke_size: f64) {
    renderer.clear();
    for shape in shapes {
        match RenderPrimitive::for_shape(shape, stroke_size) {
            RenderPrimitive::Line { x1, y1, x2, y2 } => renderer.draw_line(x1, y1, x2, y2),
            RenderPrimitive::Rectangle { x, y, width, height } => {
                renderer.draw_rectangle(x, y, width, height)
            }
            RenderPrimitive::Stroke { points, size } => renderer.fill_stroke(&points, size),
        }
    }
}

/// SVG path data for a stroke outline, smoothed with quadratic curves
/// through the midpoints of consecutive outline points.
///
/// Outlines with fewer than four points produce an empty path.
pub fn svg_path_from_stroke(outline: &[[f64; 2]], closed: bool) -> String {
    if outline.len() < MIN_STROKE_OUTLINE_POINTS {
        return String::new();
    }

    let p = SVG_PATH_PRECISION;
    let mid = |a: f64, b: f64| (a + b) / 2.0;
    let (a, b, c) = (outline[0], outline[1], outline[2]);

    let mut path = format!(
        "M{:.p$},{:.p$} Q{:.p$},{:.p$} {:.p$},{:.p$} ",
        a[0],
        a[1],
        b[0],
        b[1],
        mid(b[0], c[0]),
        mid(b[1], c[1]),
    );

    for pair in outline[2..].windows(2) {
        let (a, b) = (pair[0], pair[1]);
        path.push_str(&format!("T{:.p$},{:.p$} ", mid(a[0], b[0]), mid(a[1], b[1])));
    }

    if closed {
        path.push('Z');
    }
    path
}
