//! Parsers for the argument shapes common to GTP commands.
//!
//! Each parser takes the command line split into words (`cmd_array[0]` is the
//! command name) and checks the arity before looking at the values.

use crate::color::Color;
use crate::error::ParseError;
use crate::point::{parse_point, Vertex};

/// Returned by [`parse_color_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorArgument {
    pub color: Color,
}

/// Returned by [`parse_color_point_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPointArgument {
    pub color: Color,
    pub point: Vertex,
}

/// Returned by [`parse_integer_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerArgument {
    pub integer: i32,
}

/// Returned by [`parse_double_argument`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleArgument {
    pub double: f64,
}

/// Returned by [`parse_point_argument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointArgument {
    pub point: Vertex,
}

/// Returned by [`parse_point_list_argument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointListArgument {
    pub points: Vec<Vertex>,
}

fn color_token(token: &str) -> Result<Color, ParseError> {
    Color::from_token(token).ok_or(ParseError::InvalidArgument("color"))
}

pub fn parse_color_argument(cmd_array: &[&str]) -> Result<ColorArgument, ParseError> {
    if cmd_array.len() != 2 {
        return Err(ParseError::MissingArgument("color"));
    }
    Ok(ColorArgument {
        color: color_token(cmd_array[1])?,
    })
}

pub fn parse_color_point_argument(
    cmd_array: &[&str],
    board_size: usize,
) -> Result<ColorPointArgument, ParseError> {
    if cmd_array.len() != 3 {
        return Err(ParseError::MissingArgument("color and point"));
    }
    let color = color_token(cmd_array[1])?;
    let point = parse_point(cmd_array[2], board_size)
        .map_err(|_| ParseError::InvalidArgument("point"))?;
    Ok(ColorPointArgument { color, point })
}

pub fn parse_integer_argument(cmd_array: &[&str]) -> Result<IntegerArgument, ParseError> {
    if cmd_array.len() != 2 {
        return Err(ParseError::MissingArgument("integer"));
    }
    let integer = cmd_array[1]
        .parse()
        .map_err(|_| ParseError::InvalidArgument("integer"))?;
    Ok(IntegerArgument { integer })
}

pub fn parse_double_argument(cmd_array: &[&str]) -> Result<DoubleArgument, ParseError> {
    if cmd_array.len() != 2 {
        return Err(ParseError::MissingArgument("float"));
    }
    let double = cmd_array[1]
        .parse()
        .map_err(|_| ParseError::InvalidArgument("float"))?;
    Ok(DoubleArgument { double })
}

pub fn parse_point_argument(
    cmd_array: &[&str],
    board_size: usize,
) -> Result<PointArgument, ParseError> {
    if cmd_array.len() != 2 {
        return Err(ParseError::MissingArgument("point"));
    }
    let point = parse_point(cmd_array[1], board_size)
        .map_err(|_| ParseError::InvalidArgument("point"))?;
    Ok(PointArgument { point })
}

/// All words after the command name as points; an empty list is valid.
pub fn parse_point_list_argument(
    cmd_array: &[&str],
    board_size: usize,
) -> Result<PointListArgument, ParseError> {
    assert!(!cmd_array.is_empty(), "command line has no command name");
    let points = cmd_array[1..]
        .iter()
        .map(|token| parse_point(token, board_size))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ParseError::InvalidArgument("point list"))?;
    Ok(PointListArgument { points })
}
