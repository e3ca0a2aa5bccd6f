//! Parsing of board dumps returned by analysis commands.
//!
//! Engines print the top row first; [`Grid`] stores the bottom row first so
//! that `get(x, y)` uses the same coordinates as [`crate::Point`].

use crate::error::ParseError;
use crate::point::{check_board_size, Point};
use crate::tokenize::split_arguments;

/// A square grid of cells, `size` by `size`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at column `x`, row `y` (`y = 0` is the bottom row).
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.cells.get(y * self.size + x)
    }

    pub fn at(&self, point: Point) -> Option<&T> {
        self.get(point.x, point.y)
    }

    /// Rows from the bottom up.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.size.max(1))
    }

    fn map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Grid<U>, E> {
        let cells = self.cells.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Grid {
            size: self.size,
            cells,
        })
    }
}

/// Read `board_size` non-blank lines of at least `board_size` words each.
///
/// Fails with [`ParseError::UnsupportedBoardSize`] for sizes outside
/// `1..=MAX_BOARD_SIZE`. Blank lines are skipped. Extra words at the end of a line and lines after
/// the last row are ignored.
pub fn parse_string_board(response: &str, board_size: usize) -> Result<Grid<String>, ParseError> {
    check_board_size(board_size)?;
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(board_size);
    let mut lines = response.lines().filter(|line| !line.trim().is_empty());

    while rows.len() < board_size {
        let line = lines.next().ok_or(ParseError::IncompleteBoard)?;
        let mut args = split_arguments(line);
        if args.len() < board_size {
            return Err(ParseError::IncompleteBoard);
        }
        args.truncate(board_size);
        rows.push(args);
    }

    // First line read is the top row.
    let cells = rows.into_iter().rev().flatten().collect();
    Ok(Grid {
        size: board_size,
        cells,
    })
}

/// [`parse_string_board`] with every cell read as a floating point number.
pub fn parse_double_board(response: &str, board_size: usize) -> Result<Grid<f64>, ParseError> {
    parse_string_board(response, board_size)?
        .map(|cell| cell.parse::<f64>().map_err(|_| ParseError::NotANumber))
}
