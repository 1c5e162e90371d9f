use crate::error::{PathError, Result};
use crate::geometry::{Line, Polygon, BEZIER_SEGMENTS};
use crate::math::Point;

use super::PathCommand;

/// Assembles path commands into one [`Polygon`].
///
/// Every move-to starts a new ring. Rings are always closed: a ring left open
/// gets its closing edge when the next move-to arrives or when the polygon is
/// built. Inner rings act as holes under the polygon's odd/even rule.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    polygon: Polygon,
    start: Option<Point>,
    current: Option<Point>,
    bezier_segments: usize,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    /// Creates a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            polygon: Polygon::default(),
            start: None,
            current: None,
            bezier_segments: BEZIER_SEGMENTS,
        }
    }

    /// Sets how many straight edges each cubic is flattened into.
    #[must_use]
    pub fn with_bezier_segments(mut self, segments: usize) -> Self {
        self.bezier_segments = segments.max(1);
        self
    }

    /// Builds a polygon from a whole command sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if anything is drawn before the
    /// first move-to.
    pub fn from_commands<'a, I>(commands: I) -> Result<Polygon>
    where
        I: IntoIterator<Item = &'a PathCommand>,
    {
        let mut builder = Self::new();
        for command in commands {
            builder.apply(command)?;
        }
        Ok(builder.build())
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] for a drawing command before the
    /// first move-to.
    pub fn apply(&mut self, command: &PathCommand) -> Result<()> {
        match *command {
            PathCommand::MoveTo(p) => {
                self.move_to(p);
                Ok(())
            }
            PathCommand::LineTo(p) => self.line_to(p),
            PathCommand::CubicTo(c1, c2, p) => self.cubic_to(c1, c2, p),
            PathCommand::ClosePath => self.close_path(),
        }
    }

    /// Closes any open ring and starts a new one at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.close_ring();
        self.start = Some(p);
        self.current = Some(p);
    }

    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] before the first move-to.
    pub fn line_to(&mut self, p: Point) -> Result<()> {
        let from = self.current.ok_or(PathError::MissingMoveTo)?;
        self.polygon.add_line(Line::new(from, p));
        self.current = Some(p);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] before the first move-to.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> Result<()> {
        let from = self.current.ok_or(PathError::MissingMoveTo)?;
        self.polygon
            .add_bezier_with_segments(from, c1, c2, p, self.bezier_segments);
        self.current = Some(p);
        Ok(())
    }

    /// Draws back to the start of the current ring.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] before the first move-to.
    pub fn close_path(&mut self) -> Result<()> {
        if self.start.is_none() {
            return Err(PathError::MissingMoveTo.into());
        }
        self.close_ring();
        Ok(())
    }

    /// The current pen position, if a move-to has been seen.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Closes any open ring and returns the polygon.
    #[must_use]
    pub fn build(mut self) -> Polygon {
        self.close_ring();
        self.polygon
    }

    fn close_ring(&mut self) {
        if let (Some(from), Some(to)) = (self.current, self.start) {
            if from != to {
                self.polygon.add_line(Line::new(from, to));
            }
            self.current = Some(to);
        }
    }
}
