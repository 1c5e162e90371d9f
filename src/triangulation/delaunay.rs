use std::collections::HashSet;

use spade::handles::FixedVertexHandle;
use spade::{DelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation};
use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Line, LineSet};
use crate::math::{Point, Vector};

/// A Delaunay triangulation that remembers which input point each vertex
/// came from.
pub(super) struct IndexedTriangulation {
    pub(super) dt: DelaunayTriangulation<SpadePoint2<f64>>,
    /// Spade vertex for each input point. Duplicates share a vertex.
    pub(super) vertex_of: Vec<FixedVertexHandle>,
    /// First input index inserted at each spade vertex, by vertex index.
    first_input: Vec<usize>,
}

impl IndexedTriangulation {
    pub(super) fn build(points: &[Point]) -> Result<Self> {
        let mut dt = DelaunayTriangulation::<SpadePoint2<f64>>::new();
        let mut vertex_of = Vec::with_capacity(points.len());
        let mut first_input = Vec::with_capacity(points.len());

        for (i, p) in points.iter().enumerate() {
            let h = dt.insert(to_spade(*p)).map_err(|e: InsertionError| {
                OperationError::Failed(format!("delaunay insert of point {i}: {e}"))
            })?;
            // Spade numbers new vertices densely; a repeated position reuses one.
            if h.index() == first_input.len() {
                first_input.push(i);
            }
            vertex_of.push(h);
        }

        Ok(Self {
            dt,
            vertex_of,
            first_input,
        })
    }

    pub(super) fn input_index(&self, vertex: FixedVertexHandle) -> usize {
        self.first_input[vertex.index()]
    }
}

pub(super) fn to_spade(p: Point) -> SpadePoint2<f64> {
    SpadePoint2::new(p.x, p.y)
}

pub(super) fn from_spade(p: SpadePoint2<f64>) -> Point {
    Vector::new(p.x, p.y)
}

/// Delaunay triangles of `points` as index triples into the slice.
///
/// Repeated points collapse onto the index of their first occurrence. Fewer
/// than three distinct points, or all points on one line, give no triangles.
///
/// # Errors
///
/// Returns [`OperationError::Failed`] if a coordinate is NaN or too large to
/// triangulate.
pub fn delaunay_triangles(points: &[Point]) -> Result<Vec<[usize; 3]>> {
    let tri = IndexedTriangulation::build(points)?;
    let triangles: Vec<[usize; 3]> = tri
        .dt
        .inner_faces()
        .map(|face| face.vertices().map(|v| tri.input_index(v.fix())))
        .collect();

    debug!(
        points = points.len(),
        vertices = tri.dt.num_vertices(),
        triangles = triangles.len(),
        "delaunay triangulation"
    );
    Ok(triangles)
}

/// The unique edges of `triangles`, in order of first appearance.
///
/// An edge shared by two triangles is emitted once, from its lower index to
/// its higher one.
///
/// # Errors
///
/// Returns [`OperationError::InvalidInput`] if a triangle refers past the end
/// of `points`.
pub fn edges_from_triangles(points: &[Point], triangles: &[[usize; 3]]) -> Result<LineSet> {
    let mut seen = HashSet::new();
    let mut edges = LineSet::new();

    for &[a, b, c] in triangles {
        for (i, j) in [(a, b), (b, c), (c, a)] {
            let key = (i.min(j), i.max(j));
            if !seen.insert(key) {
                continue;
            }
            let (Some(&p1), Some(&p2)) = (points.get(key.0), points.get(key.1)) else {
                return Err(OperationError::InvalidInput(format!(
                    "triangle index {} out of range for {} points",
                    key.1,
                    points.len()
                ))
                .into());
            };
            edges.add(Line::new(p1, p2));
        }
    }

    Ok(edges)
}
