#![allow(clippy::unwrap_used)]

use std::f64::consts::{PI, TAU};

use plotgeo::operations::CirclePacker;
use plotgeo::{Line, LineSet, Point, Polygon, Rect, Vector};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    center + Vector::new(angle.cos(), angle.sin()) * radius
}

/// A simple polygon that is star-shaped around the origin.
#[allow(clippy::cast_precision_loss)]
fn star(radii: &[f64]) -> Polygon {
    let n = radii.len() as f64;
    let points: Vec<Point> = radii
        .iter()
        .enumerate()
        .map(|(i, &r)| polar(Vector::zeros(), r, TAU * i as f64 / n))
        .collect();
    Polygon::from_points(&points)
}

fn reversed(poly: &Polygon) -> Polygon {
    Polygon::new(poly.lines().iter().rev().map(Line::reversed).collect())
}

fn rotated(poly: &Polygon, by: usize) -> Polygon {
    let mut lines = poly.lines().to_vec();
    let by = by % lines.len();
    lines.rotate_left(by);
    Polygon::new(lines)
}

fn coord() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Vector::new(x, y))
}

proptest! {
    #[test]
    fn intersection_lies_on_both_lines(
        p in point(),
        q in point(),
        angle in 0.0..TAU,
        turn in 0.3..(PI - 0.3),
        len1 in 1.0..50.0f64,
        len2 in 1.0..50.0f64,
    ) {
        let a = Line::new(p, polar(p, len1, angle));
        let b = Line::new(q, polar(q, len2, angle + turn));
        let x = a.intersect_with(&b).unwrap();
        let scale = 1.0 + x.norm();
        prop_assert!(a.distance_to_infinite_line(x) < 1e-9 * scale);
        prop_assert!(b.distance_to_infinite_line(x) < 1e-9 * scale);
    }

    #[test]
    fn parallel_lines_have_no_intersection(
        p in point(),
        offset in point(),
        angle in 0.0..TAU,
        len in 1.0..50.0f64,
        stretch in 0.1..3.0f64,
    ) {
        let a = Line::new(p, polar(p, len, angle));
        let b = Line::new(p + offset, polar(p + offset, len * stretch, angle));
        prop_assert!(a.intersect_with(&b).is_none());
    }

    #[test]
    fn lerp_hits_endpoints_exactly(p1 in point(), p2 in point()) {
        let line = Line::new(p1, p2);
        prop_assert_eq!(line.lerp(0.0), p1);
        prop_assert_eq!(line.lerp(1.0), p2);
    }

    #[test]
    fn containment_ignores_start_edge_and_winding(
        radii in prop::collection::vec(5.0..10.0f64, 3..16),
        by in 0usize..16,
        qx in -12.0..12.0f64,
        qy in -12.0..12.0f64,
    ) {
        let poly = star(&radii);
        let q = Vector::new(qx, qy);
        prop_assume!(poly.distance_to_point(q).unwrap() > 1e-6);

        let expected = poly.is_inside(q);
        prop_assert_eq!(rotated(&poly, by).is_inside(q), expected);
        prop_assert_eq!(reversed(&poly).is_inside(q), expected);

        prop_assert!(poly.is_inside(Vector::zeros()));
        prop_assert!(!poly.is_inside(Vector::new(20.0, qy)));
        // No edge of the star comes closer to the origin than 5 cos(60°).
        if q.norm() < 2.4 {
            prop_assert!(expected);
        }
        if q.norm() > 10.0 {
            prop_assert!(!expected);
        }
    }

    #[test]
    fn boundary_points_are_at_distance_zero(
        radii in prop::collection::vec(5.0..10.0f64, 3..16),
        edge in 0usize..16,
        t in 0.0..=1.0f64,
    ) {
        let poly = star(&radii);
        let line = poly.lines()[edge % poly.len()];
        let d = poly.distance_to_point(line.lerp(t)).unwrap();
        prop_assert!(d < 1e-9, "d = {}", d);
    }

    #[test]
    fn regular_polygon_inscribes_its_apothem(
        n in 3usize..=12,
        radius in 1.0..100.0f64,
        center in point(),
        phase in 0.0..TAU,
    ) {
        #[allow(clippy::cast_precision_loss)]
        let points: Vec<Point> = (0..n)
            .map(|i| polar(center, radius, phase + TAU * i as f64 / n as f64))
            .collect();
        let poly = Polygon::from_points(&points);
        #[allow(clippy::cast_precision_loss)]
        let apothem = radius * (PI / n as f64).cos();

        let circle = poly.largest_inscribed_circle().unwrap();
        let centroid = poly.centroid().unwrap();
        let tol = 1e-6 * radius;
        prop_assert!((circle.radius - apothem).abs() < tol);
        prop_assert!((circle.center - centroid).norm() < tol + 1e-9 * center.norm());
        prop_assert!((centroid - center).norm() < tol + 1e-9 * center.norm());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn packed_circles_never_overlap(
        seed in any::<u64>(),
        size in 50.0..200.0f64,
        max_radius in 1.0..20.0f64,
    ) {
        let area = Rect::new(Vector::zeros(), Vector::new(size, size));
        let boundary = star(&[0.45 * size; 7]).translate_by(area.center());
        let mut packer = CirclePacker::new(area, boundary.clone(), max_radius).unwrap();
        packer.pack(60, &mut StdRng::seed_from_u64(seed));

        let circles = packer.circles();
        for (i, a) in circles.iter().enumerate() {
            prop_assert!(area.contains(a.center));
            prop_assert!(boundary.is_inside(a.center));
            prop_assert!(a.radius > 0.0 && a.radius <= max_radius);
            for b in &circles[i + 1..] {
                prop_assert!((a.center - b.center).norm() >= a.radius + b.radius - 1e-9);
            }
        }
    }

    #[test]
    fn colorize_partitions_every_segment(
        seed in any::<u64>(),
        passes in 1usize..8,
        xs in prop::collection::vec(coord(), 1..60),
    ) {
        let set: LineSet = xs
            .iter()
            .map(|&x| Line::new(Vector::new(x, 0.0), Vector::new(x + 1.0, 1.0)))
            .collect();
        let out = set.colorize(passes, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(out.len(), passes);
        prop_assert_eq!(out.iter().map(LineSet::len).sum::<usize>(), set.len());
    }
}
