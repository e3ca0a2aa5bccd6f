//! `time_settings` command serialization.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Canonical "no time limit" command line.
const NO_TIME_LIMIT: &str = "time_settings 0 1 0";

/// Byoyomi period: `moves` stones must be played within `period_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Byoyomi {
    pub period_ms: u64,
    pub moves: u32,
}

/// Game clock settings. Times are in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSettings {
    pub pre_byoyomi_ms: u64,
    pub byoyomi: Option<Byoyomi>,
}

impl TimeSettings {
    pub fn absolute(pre_byoyomi_ms: u64) -> Self {
        Self {
            pre_byoyomi_ms,
            byoyomi: None,
        }
    }

    pub fn with_byoyomi(pre_byoyomi_ms: u64, period_ms: u64, moves: u32) -> Self {
        Self {
            pre_byoyomi_ms,
            byoyomi: Some(Byoyomi { period_ms, moves }),
        }
    }
}

/// Build the `time_settings` command for `settings`, in whole seconds.
///
/// `None` produces `time_settings 0 1 0`, meaning no time limit. Some engines
/// misread that line, so only send it when switching away from a clock.
pub fn time_settings_command(settings: Option<&TimeSettings>) -> String {
    let Some(settings) = settings else {
        return NO_TIME_LIMIT.to_string();
    };
    let pre_byoyomi = settings.pre_byoyomi_ms / 1000;
    let (byoyomi, moves) = match settings.byoyomi {
        Some(b) => (b.period_ms / 1000, b.moves),
        None => (0, 0),
    };
    format!("time_settings {pre_byoyomi} {byoyomi} {moves}")
}

/// Read a `time_settings main_time byoyomi_time byoyomi_stones` command line.
///
/// Returns `None` for "no time limit" (byoyomi time without stones).
pub fn parse_time_settings(cmd_array: &[&str]) -> Result<Option<TimeSettings>, ParseError> {
    if cmd_array.len() != 4 {
        return Err(ParseError::MissingArgument("time settings"));
    }
    let number = |s: &str| {
        s.parse::<u64>()
            .map_err(|_| ParseError::InvalidArgument("time settings"))
    };
    let main_time = number(cmd_array[1])?.saturating_mul(1000);
    let byoyomi_time = number(cmd_array[2])?.saturating_mul(1000);
    let stones = u32::try_from(number(cmd_array[3])?)
        .map_err(|_| ParseError::InvalidArgument("time settings"))?;

    if byoyomi_time > 0 && stones == 0 {
        return Ok(None);
    }
    if byoyomi_time == 0 {
        return Ok(Some(TimeSettings::absolute(main_time)));
    }
    Ok(Some(TimeSettings::with_byoyomi(main_time, byoyomi_time, stones)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_settings() {
        assert_eq!(time_settings_command(None), "time_settings 0 1 0");
    }

    #[test]
    fn test_truncates_to_seconds() {
        let settings = TimeSettings::with_byoyomi(300_999, 30_500, 5);
        assert_eq!(time_settings_command(Some(&settings)), "time_settings 300 30 5");
    }

    #[test]
    fn test_absolute_time() {
        let settings = TimeSettings::absolute(600_000);
        assert_eq!(time_settings_command(Some(&settings)), "time_settings 600 0 0");
    }

    #[test]
    fn test_parse_time_settings() {
        assert_eq!(parse_time_settings(&["time_settings", "0", "1", "0"]), Ok(None));
        assert_eq!(
            parse_time_settings(&["time_settings", "600", "0", "0"]),
            Ok(Some(TimeSettings::absolute(600_000)))
        );
        assert_eq!(
            parse_time_settings(&["time_settings", "300", "30", "5"]),
            Ok(Some(TimeSettings::with_byoyomi(300_000, 30_000, 5)))
        );
    }

    #[test]
    fn test_parse_time_settings_errors() {
        assert_eq!(
            parse_time_settings(&["time_settings", "300"]).unwrap_err().to_string(),
            "Missing time settings argument"
        );
        assert_eq!(
            parse_time_settings(&["time_settings", "a", "0", "0"]).unwrap_err().to_string(),
            "Invalid time settings argument"
        );
    }

    #[test]
    fn test_command_reads_back() {
        let settings = TimeSettings::with_byoyomi(900_000, 60_000, 25);
        let line = time_settings_command(Some(&settings));
        let words: Vec<&str> = line.split(' ').collect();
        assert_eq!(parse_time_settings(&words), Ok(Some(settings)));
    }
}
