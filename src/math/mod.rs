/// 2D vector type. Doubles as a point on the page.
pub type Vector = nalgebra::Vector2<f64>;

/// 2D point type, an alias used where a position is meant.
pub type Point = Vector;

/// Global tolerance for near-zero checks (areas, lengths).
pub const TOLERANCE: f64 = 1e-10;

/// Determinant magnitude below which two line directions count as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-3;

/// Slack allowed when checking that an inscribed circle stays inside every edge.
pub const INSCRIBED_TOLERANCE: f64 = 1e-3;

/// Tolerances for the tangent-circle solvers.
///
/// Both values are absolute and were tuned for coordinates in points
/// (1/72 inch) on a letter-size page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// Lines whose direction determinant is below this are parallel.
    pub parallel: f64,
    /// A circle may overlap an edge line by at most this much.
    pub inscribed: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            parallel: PARALLEL_TOLERANCE,
            inscribed: INSCRIBED_TOLERANCE,
        }
    }
}

/// Planar operations that nalgebra does not provide for [`Vector`].
pub trait Vec2Ext {
    /// Determinant of the 2×2 matrix with `self` on top and `other` below.
    ///
    /// Positive when `other` lies counter-clockwise of `self` (y-up).
    fn det(&self, other: &Self) -> f64;

    /// This vector rotated 90°: `(y, -x)`.
    ///
    /// That is a counter-clockwise turn in page coordinates, where y grows downward.
    fn perpendicular(&self) -> Self;

    /// Unit vector in the same direction, or the zero vector if this has no length.
    fn normalized_or_zero(&self) -> Self;

    /// This vector with x and y exchanged.
    fn swapped(&self) -> Self;
}

impl Vec2Ext for Vector {
    #[inline]
    fn det(&self, other: &Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    fn perpendicular(&self) -> Self {
        Vector::new(self.y, -self.x)
    }

    #[inline]
    fn normalized_or_zero(&self) -> Self {
        self.try_normalize(0.0).unwrap_or_else(Vector::zeros)
    }

    #[inline]
    fn swapped(&self) -> Self {
        Vector::new(self.y, self.x)
    }
}
