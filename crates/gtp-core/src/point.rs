//! Board coordinates in GTP notation (`D4`, `Q16`, `pass`).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ParseError;
use crate::tokenize::split_arguments;

/// Largest board that column letters can address (`A`..`Z` without `I`).
pub const MAX_BOARD_SIZE: usize = 25;

/// Column letters in order; `I` is skipped.
const COLUMNS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// Point mentions in free text: `pass` or a column letter and a 1-2 digit row.
static POINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(pass|[a-z][0-9]{1,2})\b").expect("point regex is valid")
});

/// A point on the board. `x` is the column and `y` the row, both zero-based,
/// with `y = 0` the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMNS.get(self.x) {
            Some(&c) => write!(f, "{}{}", c as char, self.y + 1),
            None => write!(f, "?{}", self.y + 1),
        }
    }
}

/// A move target: a board point or a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertex {
    Pass,
    Point(Point),
}

impl Vertex {
    pub fn is_pass(&self) -> bool {
        matches!(self, Vertex::Pass)
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            Vertex::Pass => None,
            Vertex::Point(p) => Some(*p),
        }
    }

    /// Parse a single vertex, validated against `board_size`.
    pub fn parse(s: &str, board_size: usize) -> Result<Self, ParseError> {
        parse_point(s, board_size)
    }
}

impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        Vertex::Point(p)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vertex::Pass => f.write_str("PASS"),
            Vertex::Point(p) => p.fmt(f),
        }
    }
}

/// A stone of one color played at a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub color: Color,
    pub vertex: Vertex,
}

impl Move {
    pub fn new(color: Color, vertex: Vertex) -> Self {
        Self { color, vertex }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.vertex)
    }
}

pub(crate) fn check_board_size(board_size: usize) -> Result<(), ParseError> {
    if board_size == 0 || board_size > MAX_BOARD_SIZE {
        return Err(ParseError::UnsupportedBoardSize(board_size));
    }
    Ok(())
}

/// Parse a point like `D4` or `pass` (any case).
///
/// The column letter `I` is not used on real boards; it is accepted and read
/// as the same column as `J`.
pub fn parse_point(s: &str, board_size: usize) -> Result<Vertex, ParseError> {
    check_board_size(board_size)?;
    let invalid = || ParseError::InvalidPoint {
        point: s.to_string(),
        size: board_size,
    };

    let lower = s.trim().to_ascii_lowercase();
    if lower == "pass" {
        return Ok(Vertex::Pass);
    }

    let mut chars = lower.chars();
    let column = chars.next().filter(|c| c.is_ascii_lowercase()).ok_or_else(invalid)?;
    let row = chars.as_str();
    if row.is_empty() || row.len() > 2 || !row.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let mut x = (column as u8 - b'a') as usize;
    if column >= 'j' {
        x -= 1;
    }
    let y: usize = row.parse().map_err(|_| invalid())?;
    if y == 0 || x >= board_size || y > board_size {
        return Err(invalid());
    }
    Ok(Vertex::Point(Point::new(x, y - 1)))
}

/// Parse a whitespace-separated list of points. One bad point fails the list.
pub fn parse_point_list(s: &str, board_size: usize) -> Result<Vec<Vertex>, ParseError> {
    split_arguments(s)
        .iter()
        .map(|token| parse_point(token, board_size))
        .collect()
}

/// Find every point mentioned in free text, in order of appearance.
///
/// Mentions that do not fit on a board of `board_size` are skipped.
pub fn parse_point_string(text: &str, board_size: usize) -> Vec<Vertex> {
    POINT_RE
        .find_iter(text)
        .filter_map(|m| parse_point(m.as_str(), board_size).ok())
        .collect()
}

/// [`parse_point_string`] on the largest supported board.
pub fn scan_points(text: &str) -> Vec<Vertex> {
    parse_point_string(text, MAX_BOARD_SIZE)
}
