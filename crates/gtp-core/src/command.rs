//! Command line framing: id extraction, comment filtering, normalization.

/// Commands that change the board state. A controller that mirrors the board
/// must replay these rather than forward them blindly.
///
/// Covers GTP versions 1 and 2, `quit`, and known extensions such as
/// `gg-undo` (GNU Go) and `gogui-play_sequence` (GoGui). Non-critical state
/// such as `komi` is not included.
const STATE_CHANGING_COMMANDS: [&str; 19] = [
    "boardsize",
    "black",
    "clear_board",
    "fixed_handicap",
    "genmove",
    "genmove_black",
    "genmove_cleanup",
    "genmove_white",
    "gg-undo",
    "gogui-play_sequence",
    "kgs-genmove_cleanup",
    "loadsgf",
    "place_free_handicap",
    "play",
    "play_sequence",
    "quit",
    "set_free_handicap",
    "undo",
    "white",
];

/// Out-of-band marker line requesting an interrupt of the running command.
pub const INTERRUPT_MARKER: &str = "# interrupt";

/// One framed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Numeric id to echo in the response, if the line had one.
    pub id: Option<i32>,
    /// The normalized line without the id. Never empty.
    pub text: String,
}

impl Command {
    /// Frame a raw input line.
    ///
    /// Returns `None` for blank and comment lines. Control characters are
    /// dropped and whitespace runs collapse to one space. A leading token that
    /// parses as an integer becomes the id; anything else that merely looks
    /// numeric stays part of the text.
    pub fn parse_line(line: &str) -> Option<Command> {
        if !is_command(line) {
            return None;
        }
        let text = normalize(line);
        if text.is_empty() {
            return None;
        }

        match text.split_once(' ') {
            Some((first, rest)) => match first.parse::<i32>() {
                Ok(id) => Some(Command {
                    id: Some(id),
                    text: rest.to_string(),
                }),
                Err(_) => Some(Command { id: None, text }),
            },
            // A lone number has nothing left to run; keep it as the command.
            None => Some(Command { id: None, text }),
        }
    }

    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    pub fn is_quit(&self) -> bool {
        self.text.trim().eq_ignore_ascii_case("quit")
    }

    /// The command name, e.g. `genmove` for `genmove b`.
    pub fn name(&self) -> &str {
        self.text.split(' ').next().unwrap_or("")
    }

    /// The command line split into words; element 0 is the command name.
    pub fn args(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }
}

/// False if the line holds only whitespace or is a `#` comment.
pub fn is_command(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && !line.starts_with('#')
}

/// Whether a command (or a full command line, id included) changes the board.
pub fn is_state_changing_command(line: &str) -> bool {
    match Command::parse_line(line) {
        Some(cmd) => STATE_CHANGING_COMMANDS.contains(&cmd.name()),
        None => false,
    }
}

fn normalize(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut last_was_space = false;
    for c in line.trim().chars() {
        if c.is_control() {
            continue;
        }
        if c.is_whitespace() {
            if !last_was_space {
                result.push(' ');
                last_was_space = true;
            }
        } else {
            result.push(c);
            last_was_space = false;
        }
    }
    result.trim_end().to_string()
}
