//! Scanner for the `M`/`L`/`A` subset of SVG path data
//!
//! Each command letter must be followed by exactly the parameters it takes:
//! two for `M` and `L`, seven for `A`. Numbers are separated by whitespace or
//! commas, or by a sign or second decimal point (`1-2`, `1.5.5`).

use crate::error::{Error, Result};
use crate::model::Point;

/// A single decoded path command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move the current point without drawing
    MoveTo(Point),
    /// Draw a straight segment from the current point
    LineTo(Point),
    /// Draw an elliptical arc from the current point
    ArcTo {
        /// X radius
        rx: f64,
        /// Y radius
        ry: f64,
        /// Rotation of the ellipse's x axis, in degrees
        x_axis_rotation_deg: f64,
        /// Large-arc flag
        large_arc: bool,
        /// Sweep flag
        sweep: bool,
        /// End point
        end: Point,
    },
}

impl PathCommand {
    /// The command letter as written in path data
    pub fn letter(&self) -> char {
        match self {
            PathCommand::MoveTo(_) => 'M',
            PathCommand::LineTo(_) => 'L',
            PathCommand::ArcTo { .. } => 'A',
        }
    }

    /// The point this command leaves the cursor at
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::ArcTo { end, .. } => end,
        }
    }
}

/// Number of parameters taken by each command letter
fn parameter_count(command: u8) -> usize {
    match command {
        b'A' => 7,
        _ => 2,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(u8),
    Number(f64),
}

struct PathScanner<'a> {
    data: &'a str,
    bytes: &'a [u8],
    i: usize,
}

impl<'a> PathScanner<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            data,
            bytes: data.as_bytes(),
            i: 0,
        }
    }

    fn skip_separators(&mut self) {
        while self.i < self.bytes.len()
            && matches!(self.bytes[self.i], b' ' | b'\t' | b'\n' | b'\r' | b'\x0C' | b',')
        {
            self.i += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.i;
        while self.i < self.bytes.len() && self.bytes[self.i].is_ascii_digit() {
            self.i += 1;
        }
        self.i - start
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        self.skip_separators();
        let Some(&b) = self.bytes.get(self.i) else {
            return Ok(None);
        };

        match b {
            b'M' | b'L' | b'A' => {
                self.i += 1;
                Ok(Some(Token::Command(b)))
            }
            b'+' | b'-' | b'.' | b'0'..=b'9' => self.number().map(|n| Some(Token::Number(n))),
            _ => {
                let c = self.data[self.i..].chars().next().unwrap_or('?');
                Err(Error::malformed_path(
                    self.data,
                    format!(
                        "unsupported command '{}' at offset {}; only M, L and A are allowed",
                        c, self.i
                    ),
                ))
            }
        }
    }

    fn number(&mut self) -> Result<f64> {
        let start = self.i;
        if matches!(self.bytes[self.i], b'+' | b'-') {
            self.i += 1;
        }
        let mut digits = self.skip_digits();
        if self.bytes.get(self.i) == Some(&b'.') {
            self.i += 1;
            digits += self.skip_digits();
        }
        if digits == 0 {
            return Err(Error::malformed_path(
                self.data,
                format!("expected a number at offset {}", start),
            ));
        }

        // Only consume an exponent when digits follow it
        if matches!(self.bytes.get(self.i), Some(b'e' | b'E')) {
            let mark = self.i;
            self.i += 1;
            if matches!(self.bytes.get(self.i), Some(b'+' | b'-')) {
                self.i += 1;
            }
            if self.skip_digits() == 0 {
                self.i = mark;
            }
        }

        let text = &self.data[start..self.i];
        let value: f64 = text.parse().map_err(|_| {
            Error::malformed_path(self.data, format!("invalid number '{}'", text))
        })?;
        if !value.is_finite() {
            return Err(Error::malformed_path(
                self.data,
                format!("number '{}' is out of range", text),
            ));
        }
        Ok(value)
    }
}

fn build_command(data: &str, command: u8, params: &[f64]) -> Result<PathCommand> {
    let expected = parameter_count(command);
    if params.len() != expected {
        return Err(Error::malformed_path(
            data,
            format!(
                "command '{}' takes {} parameters, got {}",
                command as char,
                expected,
                params.len()
            ),
        ));
    }

    Ok(match command {
        b'M' => PathCommand::MoveTo(Point::new(params[0], params[1])),
        b'L' => PathCommand::LineTo(Point::new(params[0], params[1])),
        _ => PathCommand::ArcTo {
            rx: params[0],
            ry: params[1],
            x_axis_rotation_deg: params[2],
            large_arc: params[3] != 0.0,
            sweep: params[4] != 0.0,
            end: Point::new(params[5], params[6]),
        },
    })
}

/// Decode a path's `d` attribute into commands
///
/// An empty or whitespace-only string yields no commands.
///
/// # Example
///
/// ```
/// use svg2mesh::path::{PathCommand, parse_path_data};
///
/// let commands = parse_path_data("M0,0 L10,0").unwrap();
/// assert_eq!(commands.len(), 2);
/// assert_eq!(commands[1].letter(), 'L');
/// ```
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    let mut scanner = PathScanner::new(data);
    let mut commands = Vec::new();
    let mut current: Option<u8> = None;
    let mut params: Vec<f64> = Vec::with_capacity(7);

    while let Some(token) = scanner.next_token()? {
        match token {
            Token::Command(letter) => {
                if let Some(command) = current.replace(letter) {
                    commands.push(build_command(data, command, &params)?);
                    params.clear();
                }
            }
            Token::Number(value) => {
                if current.is_none() {
                    return Err(Error::malformed_path(
                        data,
                        "path data must start with a command",
                    ));
                }
                params.push(value);
            }
        }
    }

    if let Some(command) = current {
        commands.push(build_command(data, command, &params)?);
    }

    Ok(commands)
}
