use rand::Rng;

use crate::error::{PathError, Result};
use crate::math::{Point, Vector};
use crate::operations::Colorize;
use crate::path::PathCommand;

use super::{Bbox, Line, Polygon};

/// An ordered, append-only collection of line segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    /// Creates a new empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Returns the segments in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the set has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns an iterator over the segments.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Bounding box of every segment, or `None` if the set is empty.
    #[must_use]
    pub fn bbox(&self) -> Option<Bbox> {
        Bbox::from_lines(&self.lines)
    }

    /// Appends the segments drawn by `commands`, pen-plotter style.
    ///
    /// A move-to lifts the pen, a line-to draws from the current point, and a
    /// close-path draws back to the last move-to. Curves are flattened the way
    /// [`Polygon::add_bezier`] does it.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MissingMoveTo`] if something is drawn before the
    /// first move-to. The set is left unchanged on error.
    pub fn trace<'a, I>(&mut self, commands: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PathCommand>,
    {
        let mut drawn = Vec::new();
        let mut last: Option<Point> = None;
        let mut start: Option<Point> = None;

        for command in commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    last = Some(p);
                    start = Some(p);
                }
                PathCommand::LineTo(p) => {
                    let from = last.ok_or(PathError::MissingMoveTo)?;
                    drawn.push(Line::new(from, p));
                    last = Some(p);
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    let from = last.ok_or(PathError::MissingMoveTo)?;
                    let mut curve = Polygon::default();
                    curve.add_bezier(from, c1, c2, p);
                    drawn.extend(curve.lines);
                    last = Some(p);
                }
                PathCommand::ClosePath => {
                    let (from, to) = last.zip(start).ok_or(PathError::MissingMoveTo)?;
                    drawn.push(Line::new(from, to));
                    last = Some(to);
                }
            }
        }
        self.lines.extend(drawn);
        Ok(())
    }

    /// Returns a copy moved by `offset`.
    #[must_use]
    pub fn translate_by(&self, offset: Vector) -> Self {
        self.lines.iter().map(|l| l.translate_by(offset)).collect()
    }

    /// Splits the set into `passes` sets by horizontal position, with jitter
    /// so the seams between passes are not straight lines.
    ///
    /// # Errors
    ///
    /// Returns an error if `passes` is zero.
    pub fn colorize<R: Rng + ?Sized>(&self, passes: usize, rng: &mut R) -> Result<Vec<LineSet>> {
        Colorize::new(passes).execute(self, rng)
    }
}

impl From<Polygon> for LineSet {
    fn from(polygon: Polygon) -> Self {
        Self {
            lines: polygon.lines,
        }
    }
}

impl FromIterator<Line> for LineSet {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl Extend<Line> for LineSet {
    fn extend<I: IntoIterator<Item = Line>>(&mut self, iter: I) {
        self.lines.extend(iter);
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
