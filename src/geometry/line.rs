use crate::math::{Point, Vec2Ext, Vector, PARALLEL_TOLERANCE};

/// A directed line through two points.
///
/// The same value serves as an infinite line (intersection, bisection,
/// [`distance_to_infinite_line`](Self::distance_to_infinite_line)) and as the
/// finite segment `p1 → p2` ([`lerp`](Self::lerp),
/// [`distance_to_segment`](Self::distance_to_segment)). Each method states which
/// reading it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    /// Creates a line from its two endpoints.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// The vector from `p1` to `p2`.
    #[must_use]
    pub fn as_vector(&self) -> Vector {
        self.p2 - self.p1
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.as_vector().norm()
    }

    /// Returns the point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        (self.p1 + self.p2) * 0.5
    }

    /// The point `t` of the way from `p1` (`t = 0`) to `p2` (`t = 1`). Not clamped.
    ///
    /// Both endpoints are reproduced exactly at `t = 0` and `t = 1`.
    #[must_use]
    pub fn lerp(&self, t: f64) -> Point {
        self.p1 * (1.0 - t) + self.p2 * t
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translate_by(&self, offset: Vector) -> Self {
        Self::new(self.p1 + offset, self.p2 + offset)
    }

    /// Scales both endpoints about the origin.
    #[must_use]
    pub fn scale_by(&self, factor: f64) -> Self {
        Self::new(self.p1 * factor, self.p2 * factor)
    }

    /// Scales both endpoints about the origin, per axis.
    #[must_use]
    pub fn scale_by_components(&self, factors: Vector) -> Self {
        Self::new(
            self.p1.component_mul(&factors),
            self.p2.component_mul(&factors),
        )
    }

    /// Keeps `p1` and multiplies the `p1 → p2` vector by `factor`.
    #[must_use]
    pub fn multiply_length_by(&self, factor: f64) -> Self {
        Self::new(self.p1, self.p1 + self.as_vector() * factor)
    }

    /// The same line with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    /// Intersection of the two infinite lines, or `None` if they are parallel.
    #[must_use]
    pub fn intersect_with(&self, other: &Line) -> Option<Point> {
        self.intersect_with_tolerance(other, PARALLEL_TOLERANCE)
    }

    /// Like [`intersect_with`](Self::intersect_with), with an explicit threshold on
    /// the direction determinant.
    #[must_use]
    pub fn intersect_with_tolerance(&self, other: &Line, parallel: f64) -> Option<Point> {
        let d = self.p1 - other.p1;
        let tv = self.as_vector();
        let ov = other.as_vector();

        let denom = tv.det(&ov);
        if denom.abs() < parallel {
            return None;
        }
        // How far along our own direction the other line is crossed.
        let t = ov.det(&d) / denom;
        Some(self.p1 + tv * t)
    }

    /// Angle bisector of the two infinite lines.
    ///
    /// The result starts at their intersection and points along the sum of both
    /// unit directions; its length is unspecified. To bisect the interior of a
    /// polygon corner, pass the second edge [`reversed`](Self::reversed).
    /// Returns `None` if the lines are parallel.
    #[must_use]
    pub fn bisect_with(&self, other: &Line) -> Option<Line> {
        self.bisect_with_tolerance(other, PARALLEL_TOLERANCE)
    }

    /// Like [`bisect_with`](Self::bisect_with), with an explicit parallel threshold.
    #[must_use]
    pub fn bisect_with_tolerance(&self, other: &Line, parallel: f64) -> Option<Line> {
        let p = self.intersect_with_tolerance(other, parallel)?;
        let v1 = self.as_vector().normalized_or_zero();
        let v2 = other.as_vector().normalized_or_zero();
        Some(Line::new(p, p + v1 + v2))
    }

    /// Perpendicular distance from `p` to the infinite line.
    ///
    /// A zero-length line has no normal and reports distance 0.
    #[must_use]
    pub fn distance_to_infinite_line(&self, p: Point) -> f64 {
        let n = self.as_vector().perpendicular().normalized_or_zero();
        (p - self.p1).dot(&n).abs()
    }

    /// Distance from `p` to the closest point of the segment `p1 → p2`.
    ///
    /// The foot of the perpendicular is located along whichever axis the segment
    /// spans more of, then clamped to the segment. A zero-length segment
    /// measures the distance to `p1`.
    #[must_use]
    pub fn distance_to_segment(&self, p: Point) -> f64 {
        let dl = self.as_vector();
        let n = dl.perpendicular().normalized_or_zero();
        if n.norm_squared() == 0.0 {
            return (p - self.p1).norm();
        }

        let foot = p - n * n.dot(&(p - self.p1));
        let t = if dl.x.abs() > dl.y.abs() {
            (foot.x - self.p1.x) / dl.x
        } else {
            (foot.y - self.p1.y) / dl.y
        };
        let closest = self.lerp(t.clamp(0.0, 1.0));
        (p - closest).norm()
    }
}
