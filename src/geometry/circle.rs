use crate::math::{Point, Tolerances};

use super::Line;

/// A circle given by its center and radius.
///
/// The radius is never clamped; callers keep it non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The circle tangent to three infinite lines.
    ///
    /// The lines must be ordered the way a polygon walks them; their individual
    /// directions follow that walk. Returns `None` if either pair of consecutive
    /// lines is parallel, or if the two corner bisectors are.
    #[must_use]
    pub fn tangent_to(l1: &Line, l2: &Line, l3: &Line) -> Option<Circle> {
        Self::tangent_to_with(l1, l2, l3, &Tolerances::default())
    }

    /// Like [`tangent_to`](Self::tangent_to), with explicit tolerances.
    #[must_use]
    pub fn tangent_to_with(l1: &Line, l2: &Line, l3: &Line, tol: &Tolerances) -> Option<Circle> {
        let l12 = l1.bisect_with_tolerance(&l2.reversed(), tol.parallel)?;
        let l23 = l2.bisect_with_tolerance(&l3.reversed(), tol.parallel)?;
        let center = l12.intersect_with_tolerance(&l23, tol.parallel)?;
        Some(Circle::new(center, l1.distance_to_infinite_line(center)))
    }

    /// Whether `p` lies inside or on the circle.
    #[must_use]
    pub fn contains_point(&self, p: Point) -> bool {
        (p - self.center).norm_squared() <= self.radius * self.radius
    }

    /// Distance from `p` to the circle's boundary; negative inside.
    #[must_use]
    pub fn gap_to(&self, p: Point) -> f64 {
        (p - self.center).norm() - self.radius
    }
}
