pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod path;
pub mod triangulation;

pub use error::{PlotgeoError, Result};
pub use geometry::{Bbox, Circle, Line, LineSet, Polygon, Rect};
pub use math::{Point, Tolerances, Vec2Ext, Vector};
