use rand::Rng;
use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::LineSet;

/// Parameters for [`Colorize`].
#[derive(Debug, Clone, Copy)]
pub struct ColorizeParams {
    /// Number of output sets.
    pub passes: usize,
    /// Width of the uniform offset added before rounding, in bins.
    /// `1.0` shifts each segment by up to half a bin either way.
    pub jitter: f64,
}

impl Default for ColorizeParams {
    fn default() -> Self {
        Self {
            passes: 1,
            jitter: 1.0,
        }
    }
}

/// Splits a line set into passes, left to right.
///
/// Each segment goes to the bin of its midpoint's x position within the set's
/// bounding box. The jitter keeps the seams between neighbouring passes from
/// being straight vertical lines.
pub struct Colorize {
    params: ColorizeParams,
}

impl Colorize {
    /// Creates a new operation with `passes` bins and the default jitter.
    #[must_use]
    pub fn new(passes: usize) -> Self {
        Self {
            params: ColorizeParams {
                passes,
                ..ColorizeParams::default()
            },
        }
    }

    /// Creates a new operation with explicit parameters.
    #[must_use]
    pub fn with_params(params: ColorizeParams) -> Self {
        Self { params }
    }

    /// Sets the jitter, in bins.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.params.jitter = jitter;
        self
    }

    /// Partitions `lines` into `passes` sets. Every segment lands in exactly
    /// one set and keeps its relative order.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if `passes` is zero or the
    /// jitter is negative or not finite.
    pub fn execute<R: Rng + ?Sized>(&self, lines: &LineSet, rng: &mut R) -> Result<Vec<LineSet>> {
        let ColorizeParams { passes, jitter } = self.params;
        if passes == 0 {
            return Err(OperationError::InvalidInput("pass count must be positive".into()).into());
        }
        if !jitter.is_finite() || jitter < 0.0 {
            return Err(OperationError::InvalidInput(format!("invalid jitter {jitter}")).into());
        }

        let mut out = vec![LineSet::new(); passes];
        let Some(bbox) = lines.bbox() else {
            return Ok(out);
        };
        let width = bbox.width();

        #[allow(clippy::cast_precision_loss)]
        let bins = passes as f64;
        for line in lines {
            let t = if width > 0.0 {
                (line.midpoint().x - bbox.min.x) / width
            } else {
                0.0
            };
            let offset = (rng.gen::<f64>() - 0.5) * jitter;
            let bin = (t * bins + offset).round().clamp(0.0, bins - 1.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            out[bin as usize].add(*line);
        }

        debug!(segments = lines.len(), passes, "colorized line set");
        Ok(out)
    }
}
