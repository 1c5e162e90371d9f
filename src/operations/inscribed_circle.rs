use tracing::trace;

use crate::error::{OperationError, Result};
use crate::geometry::{Circle, Polygon};
use crate::math::Tolerances;

/// Parameters for the inscribed-circle search.
#[derive(Debug, Clone, Copy, Default)]
pub struct InscribedParams {
    pub tolerances: Tolerances,
    /// Refuse polygons with more edges than this. The search is cubic in the
    /// edge count, so a few hundred edges is already slow.
    pub max_edges: Option<usize>,
}

/// Finds the largest circle that is tangent to three edge lines of a polygon
/// and crosses none of them.
///
/// Every unordered triple of edges is tried. A candidate is kept when it beats
/// the best radius so far and its center is at least `radius - inscribed` away
/// from every edge line.
pub struct LargestInscribedCircle<'a> {
    polygon: &'a Polygon,
    params: InscribedParams,
}

impl<'a> LargestInscribedCircle<'a> {
    /// Creates a new search with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            params: InscribedParams::default(),
        }
    }

    /// Replaces all parameters.
    #[must_use]
    pub fn with_params(mut self, params: InscribedParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the parallel and feasibility tolerances.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.params.tolerances = tolerances;
        self
    }

    /// Rejects polygons with more than `max_edges` edges.
    #[must_use]
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.params.max_edges = Some(max_edges);
        self
    }

    /// Runs the search after checking the edge limit.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::TooManyEdges`] if the polygon exceeds `max_edges`.
    pub fn execute(&self) -> Result<Option<Circle>> {
        if let Some(limit) = self.params.max_edges {
            let edges = self.polygon.len();
            if edges > limit {
                return Err(OperationError::TooManyEdges { edges, limit }.into());
            }
        }
        Ok(self.search())
    }

    /// Runs the search without the edge limit.
    ///
    /// Returns `None` for fewer than three edges, or when every triple is
    /// parallel or protrudes past some edge.
    #[must_use]
    pub fn search(&self) -> Option<Circle> {
        let lines = self.polygon.lines();
        let tol = &self.params.tolerances;
        let n = lines.len();
        let mut best: Option<Circle> = None;
        let mut candidates = 0usize;

        for i in 0..n {
            for j in i + 1..n {
                for k in j + 1..n {
                    let tangent = Circle::tangent_to_with(&lines[i], &lines[j], &lines[k], tol);
                    let Some(circle) = tangent else {
                        continue;
                    };
                    candidates += 1;
                    if best.is_some_and(|b| circle.radius <= b.radius) {
                        continue;
                    }
                    let min_clearance = circle.radius - tol.inscribed;
                    let protrudes = lines
                        .iter()
                        .any(|line| line.distance_to_infinite_line(circle.center) < min_clearance);
                    if !protrudes {
                        best = Some(circle);
                    }
                }
            }
        }

        trace!(edges = n, candidates, radius = ?best.map(|c| c.radius), "inscribed circle search");
        best
    }
}
