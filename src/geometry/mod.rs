mod circle;
mod line;
mod line_set;
mod polygon;
mod rect;

pub use circle::Circle;
pub use line::Line;
pub use line_set::LineSet;
pub use polygon::{Polygon, BEZIER_SEGMENTS};
pub use rect::{Bbox, Rect};
