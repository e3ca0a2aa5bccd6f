//! Controller-side use of the grammar: reading an intercepted GTP stream and
//! the responses of analysis commands.

use gtp_core::arguments::{parse_color_point_argument, parse_point_list_argument};
use gtp_core::board::{parse_double_board, parse_string_board};
use gtp_core::command::is_state_changing_command;
use gtp_core::point::{parse_point_string, Point, Vertex};
use gtp_core::time_settings::{parse_time_settings, time_settings_command};
use gtp_core::variation::parse_variation;
use gtp_core::{Color, Command, TimeSettings};

const SESSION: &str = "\
# controller session
1 boardsize 9
2 clear_board
3 komi 6.5
4 play b e5
5 name
6 genmove w
gogui-analyze_commands
7 undo
";

#[test]
fn test_filter_state_changing_commands() {
    let replay: Vec<String> = SESSION
        .lines()
        .filter(|line| is_state_changing_command(line))
        .filter_map(Command::parse_line)
        .map(|cmd| cmd.text)
        .collect();
    assert_eq!(
        replay,
        vec!["boardsize 9", "clear_board", "play b e5", "genmove w", "undo"]
    );
}

#[test]
fn test_mirror_play_commands() {
    let mut stones = Vec::new();
    for line in SESSION.lines() {
        let Some(cmd) = Command::parse_line(line) else {
            continue;
        };
        if cmd.name() == "play" {
            let arg = parse_color_point_argument(&cmd.args(), 9).unwrap();
            stones.push((arg.color, arg.point));
        }
    }
    assert_eq!(stones, vec![(Color::Black, Vertex::Point(Point::new(4, 4)))]);
}

#[test]
fn test_handicap_point_list() {
    let cmd = Command::parse_line("12 set_free_handicap c3 g7 C7").unwrap();
    let arg = parse_point_list_argument(&cmd.args(), 9).unwrap();
    assert_eq!(
        arg.points,
        vec![
            Vertex::Point(Point::new(2, 2)),
            Vertex::Point(Point::new(6, 6)),
            Vertex::Point(Point::new(2, 6)),
        ]
    );
}

#[test]
fn test_influence_board_response() {
    let response = "\
 0.0  0.5  1.0
-1.0  0.0  0.5

-1.0 -1.0  0.0
";
    let grid = parse_double_board(response, 3).unwrap();
    // Top-left of the dump is A3, bottom-left is A1.
    assert_eq!(grid.at(Point::new(0, 2)), Some(&0.0));
    assert_eq!(grid.at(Point::new(2, 2)), Some(&1.0));
    assert_eq!(grid.at(Point::new(0, 0)), Some(&-1.0));

    let labels = parse_string_board("x . .\n. o .\n", 3);
    assert!(labels.is_err());
}

#[test]
fn test_analysis_text() {
    let line = "Best line: B E5 D4 W C3 then e4";
    let moves = parse_variation(line, Color::White, 9);
    let rendered: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    // "E5" follows "B", D4 alternates, "W" restates before C3, then e4 alternates.
    assert_eq!(rendered, vec!["B E5", "W D4", "W C3", "B E4"]);

    let comment = "Consider C3, then e4 (or PASS). J10 is off the board.";
    let mentioned = parse_point_string(comment, 9);
    assert_eq!(
        mentioned,
        vec![
            Vertex::Point(Point::new(2, 2)),
            Vertex::Point(Point::new(4, 3)),
            Vertex::Pass,
        ]
    );
}

#[test]
fn test_time_settings_round_trip_through_command_line() {
    let settings = TimeSettings::with_byoyomi(1_800_000, 30_000, 10);
    let line = time_settings_command(Some(&settings));
    let cmd = Command::parse_line(&format!("9 {line}")).unwrap();
    assert_eq!(cmd.id, Some(9));
    assert_eq!(parse_time_settings(&cmd.args()), Ok(Some(settings)));
}
