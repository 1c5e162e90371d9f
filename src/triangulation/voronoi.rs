use spade::Triangulation;

use crate::error::Result;
use crate::geometry::{Polygon, Rect};
use crate::math::{Point, Vector, TOLERANCE};

use super::delaunay::{from_spade, IndexedTriangulation};

/// The Voronoi cell of every input point, clipped to `bounds`.
///
/// Cells come out in input order, counter-clockwise in y-up axes. A cell is
/// the bounds rectangle cut by the perpendicular bisector towards each
/// Delaunay neighbour. Repeated points get identical cells; a point whose
/// cell misses the bounds entirely gets an empty polygon.
///
/// # Errors
///
/// Returns an error if the points cannot be triangulated.
pub fn voronoi_cells(points: &[Point], bounds: &Rect) -> Result<Vec<Polygon>> {
    let tri = IndexedTriangulation::build(points)?;
    let max = bounds.max_corner();
    let corners = [
        bounds.origin,
        Vector::new(max.x, bounds.origin.y),
        max,
        Vector::new(bounds.origin.x, max.y),
    ];

    let cells = points
        .iter()
        .zip(&tri.vertex_of)
        .map(|(&site, &handle)| {
            let mut ring = corners.to_vec();
            for edge in tri.dt.vertex(handle).out_edges() {
                let neighbour = from_spade(edge.to().position());
                ring = clip_toward(&ring, site, neighbour);
                if ring.len() < 3 {
                    return Polygon::default();
                }
            }
            Polygon::from_points(&ring)
        })
        .collect();

    Ok(cells)
}

/// Keeps the part of the convex `ring` on `site`'s side of the bisector
/// between `site` and `neighbour` (Sutherland-Hodgman against one plane).
fn clip_toward(ring: &[Point], site: Point, neighbour: Point) -> Vec<Point> {
    let normal = neighbour - site;
    let mid = (site + neighbour) * 0.5;
    let side = |p: &Point| (p - mid).dot(&normal);

    let mut out = Vec::with_capacity(ring.len() + 1);
    for (i, a) in ring.iter().enumerate() {
        let b = &ring[(i + 1) % ring.len()];
        let (da, db) = (side(a), side(b));
        if da <= 0.0 {
            out.push(*a);
        }
        if (da < 0.0 && db > 0.0) || (da > 0.0 && db < 0.0) {
            out.push(a + (b - a) * (da / (da - db)));
        }
    }

    out.dedup_by(|a, b| (*a - *b).norm() < TOLERANCE);
    let wraps = out.len() > 1
        && out
            .first()
            .zip(out.last())
            .is_some_and(|(f, l)| (f - l).norm() < TOLERANCE);
    if wraps {
        out.pop();
    }
    out
}
