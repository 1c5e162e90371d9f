use rand::Rng;

use crate::math::{Point, Vector};

use super::{Line, Polygon};

/// An axis-aligned rectangle stored as its top-left corner and its size.
///
/// Rectangles produced by this crate have a non-negative size; direct
/// construction does not check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner (smallest x and y).
    pub origin: Point,
    pub size: Vector,
}

impl Rect {
    /// Creates a new rectangle from its origin corner and size.
    #[must_use]
    pub fn new(origin: Point, size: Vector) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from its top-left and bottom-right corners.
    #[must_use]
    pub fn from_ends(p1: Point, p2: Point) -> Self {
        Self::new(p1, p2 - p1)
    }

    /// The bottom-right corner.
    #[must_use]
    pub fn max_corner(&self) -> Point {
        self.origin + self.size
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.origin + self.size * 0.5
    }

    /// Shrinks the rectangle by `d` on all four sides.
    #[must_use]
    pub fn inset_by(&self, d: f64) -> Self {
        Self::new(
            self.origin + Vector::new(d, d),
            self.size - Vector::new(2.0 * d, 2.0 * d),
        )
    }

    /// A uniformly distributed point, inclusive of the left and top sides and
    /// exclusive of the right and bottom sides.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let unit = Vector::new(rng.gen::<f64>(), rng.gen::<f64>());
        unit.component_mul(&self.size) + self.origin
    }

    /// Whether `p` lies inside or on the border.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let max = self.max_corner();
        p.x >= self.origin.x && p.x <= max.x && p.y >= self.origin.y && p.y <= max.y
    }

    /// The rectangle as a four-edge polygon, counter-clockwise in y-up axes.
    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        let max = self.max_corner();
        Polygon::from_points(&[
            self.origin,
            Vector::new(max.x, self.origin.y),
            max,
            Vector::new(self.origin.x, max.y),
        ])
    }
}

/// A two-dimensional bounding box. Never empty: it starts from one point and
/// only grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bbox {
    pub min: Point,
    pub max: Point,
}

impl Bbox {
    /// A zero-size box around `p`.
    #[must_use]
    pub fn new(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// The tight box around `points`, or `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let mut bbox = Self::new(iter.next()?);
        for p in iter {
            bbox.add_point(p);
        }
        Some(bbox)
    }

    /// The tight box around every endpoint of `lines`, or `None` if there are none.
    pub fn from_lines<'a, I: IntoIterator<Item = &'a Line>>(lines: I) -> Option<Self> {
        Self::from_points(lines.into_iter().flat_map(|l| [l.p1, l.p2]))
    }

    /// Grows the box to include `p`.
    pub fn add_point(&mut self, p: Point) {
        self.min = self.min.inf(&p);
        self.max = self.max.sup(&p);
    }

    /// Grows the box to include both endpoints of `line`.
    pub fn add_line(&mut self, line: &Line) {
        self.add_point(line.p1);
        self.add_point(line.p2);
    }

    /// Returns the extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Returns the extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the extent as a vector.
    #[must_use]
    pub fn size(&self) -> Vector {
        self.max - self.min
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }

    /// Returns the box as a rectangle.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::from_ends(self.min, self.max)
    }
}
