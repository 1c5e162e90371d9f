mod builder;
mod parse;

use crate::math::Point;

pub use builder::PathBuilder;
pub use parse::parse_path_data;

/// A single pen command in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lifts the pen and starts a new ring at the point.
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bezier through two control points to the end point.
    CubicTo(Point, Point, Point),
    /// Draws back to the most recent move-to.
    ClosePath,
}
