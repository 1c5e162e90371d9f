use crate::error::{GeometryError, Result};
use crate::math::{Point, Vec2Ext, Vector, TOLERANCE};
use crate::operations::LargestInscribedCircle;

use super::{Bbox, Circle, Line, Rect};

/// Number of straight segments a cubic Bezier is flattened into by default.
pub const BEZIER_SEGMENTS: usize = 10;

/// An arbitrary closed polygon stored as its ordered edges.
///
/// By convention `lines[i].p2 == lines[i + 1].p1` and the last edge returns to
/// the first point. Counter-clockwise rings (y-up) enclose positive area.
/// Several rings may share one polygon, and rings may cross each other:
/// containment follows the odd/even crossing rule, so an inner ring becomes a
/// hole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub lines: Vec<Line>,
}

impl Polygon {
    /// Creates a new polygon from its edges.
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Creates a polygon through `points`, closing the ring back to the first point.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let lines = (0..n)
            .map(|i| Line::new(points[i], points[(i + 1) % n]))
            .collect();
        Self { lines }
    }

    /// Creates a polygon from a ring whose last point repeats the first.
    ///
    /// No closing edge is added.
    #[must_use]
    pub fn from_closed_points(points: &[Point]) -> Self {
        let lines = points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        Self { lines }
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the polygon has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the edges in order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Appends an edge.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Appends the cubic Bezier `p1 p2 p3 p4` as [`BEZIER_SEGMENTS`] straight edges.
    pub fn add_bezier(&mut self, p1: Point, p2: Point, p3: Point, p4: Point) {
        self.add_bezier_with_segments(p1, p2, p3, p4, BEZIER_SEGMENTS);
    }

    /// Appends the cubic Bezier `p1 p2 p3 p4` as `segments` straight edges,
    /// sampled at evenly spaced parameters with de Casteljau's construction.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_bezier_with_segments(
        &mut self,
        p1: Point,
        p2: Point,
        p3: Point,
        p4: Point,
        segments: usize,
    ) {
        let segments = segments.max(1);
        let points: Vec<Point> = (0..=segments)
            .map(|i| {
                let t = i as f64 / segments as f64;

                let p12 = p1.lerp(&p2, t);
                let p23 = p2.lerp(&p3, t);
                let p34 = p3.lerp(&p4, t);

                let p123 = p12.lerp(&p23, t);
                let p234 = p23.lerp(&p34, t);

                p123.lerp(&p234, t)
            })
            .collect();

        self.lines
            .extend(points.windows(2).map(|w| Line::new(w[0], w[1])));
    }

    /// The bounding box over every edge endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPolygon`] if the polygon has no lines.
    pub fn bbox(&self) -> Result<Bbox> {
        Bbox::from_lines(&self.lines).ok_or_else(|| GeometryError::EmptyPolygon.into())
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translate_by(&self, offset: Vector) -> Self {
        Self::new(self.lines.iter().map(|l| l.translate_by(offset)).collect())
    }

    /// Scales about the origin.
    #[must_use]
    pub fn scale_by(&self, factor: f64) -> Self {
        Self::new(self.lines.iter().map(|l| l.scale_by(factor)).collect())
    }

    /// Scales about the origin, per axis.
    #[must_use]
    pub fn scale_by_components(&self, factors: Vector) -> Self {
        Self::new(
            self.lines
                .iter()
                .map(|l| l.scale_by_components(factors))
                .collect(),
        )
    }

    /// This polygon scaled uniformly to the largest size that fits `rect`,
    /// centered in it.
    ///
    /// # Errors
    ///
    /// Returns an error if the polygon has no lines, or if its bounding box has
    /// zero width and zero height.
    pub fn center_in(&self, rect: &Rect) -> Result<Self> {
        let bbox = self.bbox()?;
        let size = bbox.size();
        if size.x <= 0.0 && size.y <= 0.0 {
            return Err(
                GeometryError::Degenerate("polygon bounding box has no extent".into()).into(),
            );
        }
        let ratios = rect.size.component_div(&size);
        let scale = ratios.x.min(ratios.y);

        Ok(self
            .translate_by(-bbox.center())
            .scale_by(scale)
            .translate_by(rect.center()))
    }

    /// Whether `p` is inside, by counting edge crossings of a ray shot toward +x.
    ///
    /// Each edge covers the half-open y-range that excludes its lower endpoint,
    /// so a ray through a shared vertex is counted once and horizontal edges
    /// never count. An odd number of crossings strictly right of `p` means inside.
    #[must_use]
    pub fn is_inside(&self, p: Point) -> bool {
        let mut inside = false;

        for line in &self.lines {
            let spans = (line.p1.y < p.y && p.y <= line.p2.y)
                || (line.p2.y < p.y && p.y <= line.p1.y);
            if !spans {
                continue;
            }
            let p12 = line.p2 - line.p1;
            let p1r = p - line.p1;
            // Signed x-offset from p to the crossing.
            let t = p12.x * p1r.y / p12.y - p1r.x;
            if t > 0.0 {
                inside = !inside;
            }
        }

        inside
    }

    /// The distance from `p` to the nearest edge segment.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPolygon`] if the polygon has no lines.
    pub fn distance_to_point(&self, p: Point) -> Result<f64> {
        self.lines
            .iter()
            .map(|l| l.distance_to_segment(p))
            .min_by(f64::total_cmp)
            .ok_or_else(|| GeometryError::EmptyPolygon.into())
    }

    /// The largest circle tangent to three edges that crosses no edge line.
    ///
    /// Exhaustive over all edge triples with default tolerances; see
    /// [`LargestInscribedCircle`] for the tunable version.
    #[must_use]
    pub fn largest_inscribed_circle(&self) -> Option<Circle> {
        LargestInscribedCircle::new(self).search()
    }

    /// Signed area by the shoelace formula; positive for counter-clockwise rings.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        self.lines.iter().map(|l| l.p1.det(&l.p2)).sum::<f64>() * 0.5
    }

    /// Center of mass of the enclosed area.
    ///
    /// Concave rings are fine. Self-intersecting rings give a meaningless point.
    /// Returns `None` when the enclosed area is zero.
    #[must_use]
    pub fn centroid(&self) -> Option<Point> {
        let mut twice_area = 0.0;
        let mut c = Vector::zeros();

        for line in &self.lines {
            let cross = line.p1.det(&line.p2);
            twice_area += cross;
            c += (line.p1 + line.p2) * cross;
        }

        if twice_area.abs() < TOLERANCE {
            return None;
        }
        Some(c / (twice_area * 3.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(x: f64, y: f64) -> Point {
        Vector::new(x, y)
    }

    fn unit_square() -> Polygon {
        Polygon::from_points(&[v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 1.0)])
    }

    fn regular(n: usize, radius: f64, center: Point) -> Polygon {
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<Point> = (0..n)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / n as f64;
                center + v(a.cos(), a.sin()) * radius
            })
            .collect();
        Polygon::from_points(&points)
    }

    #[test]
    fn from_points_closes_ring() {
        let sq = unit_square();
        assert_eq!(sq.len(), 4);
        assert_eq!(sq.lines[3], Line::new(v(0.0, 1.0), v(0.0, 0.0)));
        for i in 0..4 {
            assert_eq!(sq.lines[i].p2, sq.lines[(i + 1) % 4].p1);
        }
    }

    #[test]
    fn from_closed_points_does_not_wrap() {
        let p = Polygon::from_closed_points(&[v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0), v(0.0, 0.0)]);
        assert_eq!(p.len(), 3);
        assert!(Polygon::from_closed_points(&[v(1.0, 1.0)]).is_empty());
    }

    #[test]
    fn bezier_flattens_into_ten_segments() {
        let mut p = Polygon::default();
        p.add_bezier(v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0));
        assert_eq!(p.len(), BEZIER_SEGMENTS);
        assert_eq!(p.lines[0].p1, v(0.0, 0.0));
        assert_eq!(p.lines[9].p2, v(1.0, 0.0));
        // Symmetric curve peaks at t = 0.5 with height 3/4.
        assert_abs_diff_eq!(p.lines[4].p2.y, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(p.lines[4].p2.x, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn unit_square_scenario() {
        let sq = unit_square();
        let c = sq.centroid().unwrap();
        assert_abs_diff_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 0.5, epsilon = 1e-12);

        let b = sq.bbox().unwrap();
        assert_eq!(b.min, v(0.0, 0.0));
        assert_eq!(b.max, v(1.0, 1.0));

        let circle = sq.largest_inscribed_circle().unwrap();
        assert_abs_diff_eq!(circle.center.x, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.center.y, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(circle.radius, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn empty_polygon_preconditions() {
        let empty = Polygon::default();
        assert!(empty.bbox().is_err());
        assert!(empty.distance_to_point(v(0.0, 0.0)).is_err());
        assert!(empty.center_in(&Rect::new(v(0.0, 0.0), v(1.0, 1.0))).is_err());
        assert!(empty.largest_inscribed_circle().is_none());
        assert!(empty.centroid().is_none());
    }

    #[test]
    fn center_in_keeps_aspect() {
        // 2×1 rectangle into a 10×10 box: scale 5, result spans 10×5.
        let r = Polygon::from_points(&[v(0.0, 0.0), v(2.0, 0.0), v(2.0, 1.0), v(0.0, 1.0)]);
        let target = Rect::new(v(100.0, 100.0), v(10.0, 10.0));
        let placed = r.center_in(&target).unwrap();
        let b = placed.bbox().unwrap();
        assert_abs_diff_eq!(b.min.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.x, 110.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y, 102.5, epsilon = 1e-9);
        assert_abs_diff_eq!(b.max.y, 107.5, epsilon = 1e-9);
    }

    #[test]
    fn center_in_rejects_single_point() {
        let dot = Polygon::from_points(&[v(3.0, 3.0), v(3.0, 3.0)]);
        assert!(dot.center_in(&Rect::new(v(0.0, 0.0), v(1.0, 1.0))).is_err());
    }

    #[test]
    fn transforms_return_new_polygons() {
        let sq = unit_square();
        let moved = sq.translate_by(v(2.0, 3.0));
        assert_eq!(moved.lines[0].p1, v(2.0, 3.0));
        assert_eq!(sq.lines[0].p1, v(0.0, 0.0));
        assert_eq!(sq.scale_by(2.0).lines[1].p2, v(2.0, 2.0));
        assert_eq!(sq.scale_by_components(v(3.0, 1.0)).lines[1].p2, v(3.0, 1.0));
    }

    #[test]
    fn inside_square() {
        let sq = unit_square();
        assert!(sq.is_inside(v(0.5, 0.5)));
        assert!(sq.is_inside(v(0.01, 0.99)));
        assert!(!sq.is_inside(v(1.5, 0.5)));
        assert!(!sq.is_inside(v(-0.5, 0.5)));
        assert!(!sq.is_inside(v(0.5, 2.0)));
    }

    #[test]
    fn inside_ignores_winding() {
        let sq = unit_square();
        let mut rev: Vec<Line> = sq.lines.iter().rev().map(Line::reversed).collect();
        rev.rotate_left(1);
        let cw = Polygon::new(rev);
        assert!(cw.is_inside(v(0.25, 0.75)));
        assert!(!cw.is_inside(v(1.25, 0.75)));
        assert!(cw.signed_area() < 0.0);
    }

    #[test]
    fn inside_ray_through_vertex() {
        // Diamond: the ray from the center passes exactly through the right vertex.
        let diamond = Polygon::from_points(&[v(0.0, -1.0), v(1.0, 0.0), v(0.0, 1.0), v(-1.0, 0.0)]);
        assert!(diamond.is_inside(v(0.0, 0.0)));
        assert!(!diamond.is_inside(v(-2.0, 0.0)));
    }

    #[test]
    fn inner_ring_is_a_hole() {
        let mut frame = Polygon::from_points(&[v(0.0, 0.0), v(4.0, 0.0), v(4.0, 4.0), v(0.0, 4.0)]);
        let hole = Polygon::from_points(&[v(1.0, 1.0), v(1.0, 3.0), v(3.0, 3.0), v(3.0, 1.0)]);
        frame.lines.extend(hole.lines);
        assert!(frame.is_inside(v(0.5, 2.0)));
        assert!(!frame.is_inside(v(2.0, 2.0)));
    }

    #[test]
    fn distance_to_boundary() {
        let sq = unit_square();
        assert!(sq.distance_to_point(v(0.5, 0.0)).unwrap() < 1e-12);
        assert!(sq.distance_to_point(v(1.0, 1.0)).unwrap() < 1e-12);
        assert_abs_diff_eq!(sq.distance_to_point(v(0.5, 0.2)).unwrap(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(sq.distance_to_point(v(2.0, 0.5)).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            sq.distance_to_point(v(4.0, 5.0)).unwrap(),
            5.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn regular_polygons_inscribe_apothem() {
        for n in [3, 5, 6, 8, 12] {
            let radius = 10.0;
            let center = v(3.0, -2.0);
            let poly = regular(n, radius, center);
            #[allow(clippy::cast_precision_loss)]
            let apothem = radius * (std::f64::consts::PI / n as f64).cos();

            let circle = poly.largest_inscribed_circle().unwrap();
            assert_abs_diff_eq!(circle.radius, apothem, epsilon = 1e-6);
            let centroid = poly.centroid().unwrap();
            assert!((circle.center - centroid).norm() < 1e-6, "n={n}");
            assert!((centroid - center).norm() < 1e-9, "n={n}");
        }
    }

    #[test]
    fn centroid_of_concave_l_shape() {
        // Two unit squares side by side plus one on top of the left: centroid (5/6, 5/6).
        let l = Polygon::from_points(&[
            v(0.0, 0.0),
            v(2.0, 0.0),
            v(2.0, 1.0),
            v(1.0, 1.0),
            v(1.0, 2.0),
            v(0.0, 2.0),
        ]);
        let c = l.centroid().unwrap();
        assert_abs_diff_eq!(c.x, 5.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.y, 5.0 / 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.signed_area(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_polygon_has_no_inscribed_circle() {
        let two = Polygon::from_points(&[v(0.0, 0.0), v(1.0, 0.0)]);
        assert!(two.largest_inscribed_circle().is_none());
        assert!(two.centroid().is_none());
    }
}
