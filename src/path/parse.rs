use crate::error::{PathError, Result};
use crate::math::{Point, Vector};

use super::PathCommand;

/// Reads SVG path data (the `d` attribute) into absolute commands.
///
/// Supports `M L H V C S Z` in both cases, implicit repetition of the previous
/// command (extra pairs after a move-to are line-tos), comma or whitespace
/// separators, and numbers with signs, fractions, and exponents. Horizontal
/// and vertical lines come out as [`PathCommand::LineTo`]; smooth cubics come
/// out as [`PathCommand::CubicTo`] with the reflected first handle.
///
/// # Errors
///
/// Returns [`PathError::UnknownCommand`] for an unsupported letter or for
/// numbers with no command in effect, [`PathError::InvalidNumber`] for a
/// malformed number, and [`PathError::MissingArguments`] when a command runs
/// out of numbers.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    let mut parser = Parser::new(data);
    parser.run()?;
    Ok(parser.commands)
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
    commands: Vec<PathCommand>,
    current: Point,
    start: Point,
    /// Second handle of the previous cubic, for `S`.
    last_handle: Option<Point>,
}

impl<'a> Parser<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            src: data.as_bytes(),
            pos: 0,
            commands: Vec::new(),
            current: Vector::zeros(),
            start: Vector::zeros(),
            last_handle: None,
        }
    }

    fn run(&mut self) -> Result<()> {
        let mut active: Option<u8> = None;

        loop {
            self.skip_separators();
            let Some(&c) = self.src.get(self.pos) else {
                return Ok(());
            };

            let command = if c.is_ascii_alphabetic() {
                self.pos += 1;
                c
            } else {
                match active {
                    Some(cmd) if starts_number(c) => cmd,
                    _ => return Err(PathError::UnknownCommand(char::from(c)).into()),
                }
            };

            self.command(command)?;

            active = match command {
                b'M' => Some(b'L'),
                b'm' => Some(b'l'),
                b'Z' | b'z' => None,
                other => Some(other),
            };
        }
    }

    fn command(&mut self, command: u8) -> Result<()> {
        let relative = command.is_ascii_lowercase();
        let origin = if relative {
            self.current
        } else {
            Vector::zeros()
        };
        let name = char::from(command);

        let mut handle = None;
        match command.to_ascii_uppercase() {
            b'M' => {
                let p = origin + self.pair(name)?;
                self.start = p;
                self.current = p;
                self.commands.push(PathCommand::MoveTo(p));
            }
            b'L' => {
                let p = origin + self.pair(name)?;
                self.line_to(p);
            }
            b'H' => {
                let x = self.number(name)?;
                let x = if relative { self.current.x + x } else { x };
                self.line_to(Vector::new(x, self.current.y));
            }
            b'V' => {
                let y = self.number(name)?;
                let y = if relative { self.current.y + y } else { y };
                self.line_to(Vector::new(self.current.x, y));
            }
            b'C' => {
                let c1 = origin + self.pair(name)?;
                let c2 = origin + self.pair(name)?;
                let p = origin + self.pair(name)?;
                self.cubic_to(c1, c2, p);
                handle = Some(c2);
            }
            b'S' => {
                let c1 = match self.last_handle {
                    Some(h) => self.current * 2.0 - h,
                    None => self.current,
                };
                let c2 = origin + self.pair(name)?;
                let p = origin + self.pair(name)?;
                self.cubic_to(c1, c2, p);
                handle = Some(c2);
            }
            b'Z' => {
                self.commands.push(PathCommand::ClosePath);
                self.current = self.start;
            }
            _ => return Err(PathError::UnknownCommand(name).into()),
        }
        self.last_handle = handle;
        Ok(())
    }

    fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
        self.current = p;
    }

    fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) {
        self.commands.push(PathCommand::CubicTo(c1, c2, p));
        self.current = p;
    }

    fn pair(&mut self, command: char) -> Result<Vector> {
        let x = self.number(command)?;
        let y = self.number(command)?;
        Ok(Vector::new(x, y))
    }

    fn number(&mut self, command: char) -> Result<f64> {
        self.skip_separators();
        match self.src.get(self.pos) {
            Some(&c) if starts_number(c) => {}
            _ => return Err(PathError::MissingArguments { command }.into()),
        }

        let begin = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            frac_digits = self.digits();
        }
        if int_digits + frac_digits == 0 {
            return Err(PathError::InvalidNumber { offset: begin }.into());
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mark = self.pos;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.digits() == 0 {
                return Err(PathError::InvalidNumber { offset: mark }.into());
            }
        }

        std::str::from_utf8(&self.src[begin..self.pos])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| PathError::InvalidNumber { offset: begin }.into())
    }

    fn digits(&mut self) -> usize {
        let begin = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - begin
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_whitespace() || c == b',')
        {
            self.pos += 1;
        }
    }
}

fn starts_number(c: u8) -> bool {
    c.is_ascii_digit() || matches!(c, b'+' | b'-' | b'.')
}
