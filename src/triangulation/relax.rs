use tracing::debug;

use crate::error::Result;
use crate::geometry::{Polygon, Rect};
use crate::math::Point;

use super::voronoi_cells;

/// Which point of a Voronoi cell a relaxed point moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellCenter {
    /// Center of mass (Lloyd's algorithm).
    #[default]
    Centroid,
    /// Center of the cell's largest inscribed circle.
    InscribedCircle,
}

impl CellCenter {
    fn of(self, cell: &Polygon) -> Option<Point> {
        match self {
            Self::Centroid => cell.centroid(),
            Self::InscribedCircle => cell.largest_inscribed_circle().map(|c| c.center),
        }
    }
}

/// Spreads points apart by repeatedly moving each one to the center of its
/// Voronoi cell within `bounds`.
#[derive(Debug, Clone, Copy)]
pub struct RelaxPoints {
    bounds: Rect,
    iterations: usize,
    center: CellCenter,
}

impl RelaxPoints {
    /// Three centroid iterations.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            iterations: 3,
            center: CellCenter::default(),
        }
    }

    /// Sets the number of relaxation rounds.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets which cell center points move to.
    #[must_use]
    pub fn with_center(mut self, center: CellCenter) -> Self {
        self.center = center;
        self
    }

    /// Returns the relaxed points, in input order.
    ///
    /// A point whose cell is empty or has no center stays where it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the points cannot be triangulated.
    pub fn execute(&self, points: &[Point]) -> Result<Vec<Point>> {
        let mut points = points.to_vec();

        for iteration in 0..self.iterations {
            let cells = voronoi_cells(&points, &self.bounds)?;
            let mut max_shift = 0.0_f64;
            for (p, cell) in points.iter_mut().zip(&cells) {
                if let Some(c) = self.center.of(cell) {
                    max_shift = max_shift.max((c - *p).norm());
                    *p = c;
                }
            }
            debug!(iteration, points = points.len(), max_shift, "relaxed points");
        }

        Ok(points)
    }
}
