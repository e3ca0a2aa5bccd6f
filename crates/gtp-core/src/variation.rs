//! Move sequences and labelled point lists embedded in engine output.

use crate::color::Color;
use crate::error::ParseError;
use crate::point::{parse_point, Move, Vertex};
use crate::tokenize::split_arguments;

/// Find all moves in `s`, starting with `to_move`.
///
/// A color word (`b`, `white`, ...) sets the color of the next move. Otherwise
/// colors alternate. Words that are neither colors nor points are skipped.
pub fn parse_variation(s: &str, to_move: Color, board_size: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    let mut to_move = to_move;
    let mut color_set = true;

    for token in split_arguments(s) {
        if let Some(color) = Color::from_token(&token) {
            to_move = color;
            color_set = true;
            continue;
        }
        let Ok(vertex) = parse_point(&token, board_size) else {
            continue;
        };
        if !color_set {
            to_move = to_move.other();
        }
        moves.push(Move::new(to_move, vertex));
        color_set = false;
    }
    moves
}

/// Parse alternating `point label` pairs, e.g. `D4 "territory" E5 x`.
pub fn parse_point_string_list(
    s: &str,
    board_size: usize,
) -> Result<Vec<(Vertex, String)>, ParseError> {
    let mut pairs = Vec::new();
    let mut pending: Option<Vertex> = None;

    // Empty tokens (`""`) are skipped in either position.
    for token in split_arguments(s).into_iter().filter(|t| !t.is_empty()) {
        match pending.take() {
            None => pending = Some(parse_point(&token, board_size)?),
            Some(point) => pairs.push((point, token)),
        }
    }
    if pending.is_some() {
        return Err(ParseError::MissingString);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn mv(color: Color, x: usize, y: usize) -> Move {
        Move::new(color, Vertex::Point(Point::new(x, y)))
    }

    #[test]
    fn test_variation_explicit_colors() {
        let moves = parse_variation("b a1 a2 w b3", Color::Black, 19);
        assert_eq!(
            moves,
            vec![
                mv(Color::Black, 0, 0),
                mv(Color::White, 0, 1),
                mv(Color::White, 1, 2),
            ]
        );
    }

    #[test]
    fn test_variation_alternates_from_start_color() {
        let moves = parse_variation("Q16 D4 pass C3", Color::White, 19);
        assert_eq!(moves.len(), 4);
        assert_eq!(moves[0], mv(Color::White, 15, 15));
        assert_eq!(moves[1], mv(Color::Black, 3, 3));
        assert_eq!(moves[2], Move::new(Color::White, Vertex::Pass));
        assert_eq!(moves[3], mv(Color::Black, 2, 2));
    }

    #[test]
    fn test_variation_skips_noise() {
        let moves = parse_variation("1. D4 (0.53) 2. Q16 z99", Color::Black, 19);
        assert_eq!(moves, vec![mv(Color::Black, 3, 3), mv(Color::White, 15, 15)]);
    }

    #[test]
    fn test_point_string_list() {
        let pairs = parse_point_string_list(r#"D4 "my label" pass x"#, 19).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (Vertex::Point(Point::new(3, 3)), "my label".to_string()));
        assert_eq!(pairs[1], (Vertex::Pass, "x".to_string()));
    }

    #[test]
    fn test_point_string_list_skips_empty_labels() {
        let pairs = parse_point_string_list(r#"D4 "" E5 x"#, 19);
        assert_eq!(
            pairs,
            Err(ParseError::InvalidPoint {
                point: "x".to_string(),
                size: 19
            })
        );
        let pairs = parse_point_string_list(r#"D4 "" "lbl" E5 x"#, 19).unwrap();
        assert_eq!(pairs[0], (Vertex::Point(Point::new(3, 3)), "lbl".to_string()));
        assert_eq!(pairs[1], (Vertex::Point(Point::new(4, 4)), "x".to_string()));
    }

    #[test]
    fn test_point_string_list_errors() {
        assert_eq!(
            parse_point_string_list("D4 a E5", 19),
            Err(ParseError::MissingString)
        );
        assert!(parse_point_string_list("Z30 a", 19).is_err());
        assert_eq!(parse_point_string_list("", 19), Ok(vec![]));
    }
}
