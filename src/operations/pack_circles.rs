use rand::Rng;
use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Circle, Polygon, Rect};

/// Parameters for [`CirclePacker`].
#[derive(Debug, Clone, Copy)]
pub struct PackParams {
    /// Upper bound on any placed radius.
    pub max_radius: f64,
    /// Samples drawn per [`CirclePacker::add_circle`] call before giving up.
    pub max_attempts: usize,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            // Half an inch at 72 points per inch.
            max_radius: 36.0,
            max_attempts: 5000,
        }
    }
}

/// Greedy random circle packing inside a boundary polygon.
///
/// Each placement samples the draw area, keeps the first point that lies inside
/// the boundary and outside every committed circle, and gives it the largest
/// radius that touches its nearest constraint: the boundary, the radius cap,
/// or a committed circle. Early circles therefore tend to be the largest.
#[derive(Debug, Clone)]
pub struct CirclePacker {
    draw_area: Rect,
    boundary: Polygon,
    params: PackParams,
    circles: Vec<Circle>,
}

impl CirclePacker {
    /// Creates a packer with default attempts and the given radius cap.
    ///
    /// # Errors
    ///
    /// Returns an error if `boundary` has no lines or `max_radius` is not positive.
    pub fn new(draw_area: Rect, boundary: Polygon, max_radius: f64) -> Result<Self> {
        Self::with_params(
            draw_area,
            boundary,
            PackParams {
                max_radius,
                ..PackParams::default()
            },
        )
    }

    /// Creates a packer with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `boundary` has no lines, `max_radius` is not positive,
    /// or `max_attempts` is zero.
    pub fn with_params(draw_area: Rect, boundary: Polygon, params: PackParams) -> Result<Self> {
        if boundary.is_empty() {
            return Err(GeometryError::EmptyPolygon.into());
        }
        if params.max_radius.is_nan() || params.max_radius <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "max radius must be positive, got {}",
                params.max_radius
            ))
            .into());
        }
        if params.max_attempts == 0 {
            return Err(OperationError::InvalidInput("max attempts must be positive".into()).into());
        }
        Ok(Self {
            draw_area,
            boundary,
            params,
            circles: Vec::new(),
        })
    }

    /// Seeds the packing with circles that are already placed.
    #[must_use]
    pub fn with_circles(mut self, circles: Vec<Circle>) -> Self {
        self.circles = circles;
        self
    }

    /// Returns the circles placed so far.
    #[must_use]
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Consumes the packer and returns its circles.
    #[must_use]
    pub fn into_circles(self) -> Vec<Circle> {
        self.circles
    }

    /// Returns the packing parameters.
    #[must_use]
    pub fn params(&self) -> &PackParams {
        &self.params
    }

    /// Tries to commit one more circle.
    ///
    /// Returns `false` once `max_attempts` samples in a row found no room; the
    /// packing is then saturated and the caller should stop.
    pub fn add_circle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        'attempt: for _ in 0..self.params.max_attempts {
            let p = self.draw_area.random_point(rng);
            if !self.boundary.is_inside(p) {
                continue;
            }

            // Never fails: the boundary was checked non-empty on construction.
            let d = self.boundary.distance_to_point(p).unwrap_or(0.0);
            if d <= 0.0 {
                continue;
            }

            let mut radius = self.params.max_radius.min(d);
            for c in &self.circles {
                if c.contains_point(p) {
                    continue 'attempt;
                }
                radius = radius.min(c.gap_to(p));
            }

            self.circles.push(Circle::new(p, radius));
            return true;
        }

        debug!(
            circles = self.circles.len(),
            attempts = self.params.max_attempts,
            "circle packing saturated"
        );
        false
    }

    /// Adds circles until `target` are committed in total or no room is left.
    ///
    /// Returns how many circles this call added.
    pub fn pack<R: Rng + ?Sized>(&mut self, target: usize, rng: &mut R) -> usize {
        let start = self.circles.len();
        while self.circles.len() < target {
            if !self.add_circle(rng) {
                break;
            }
        }
        let added = self.circles.len() - start;
        debug!(added, total = self.circles.len(), target, "packed circles");
        added
    }
}
