//! Grammar error types

use thiserror::Error;

/// Failure of one of the argument or response parsers.
///
/// The `Display` text is the message a handler sends back in a `?` response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing {0} argument")]
    MissingArgument(&'static str),

    #[error("Invalid {0} argument")]
    InvalidArgument(&'static str),

    #[error("Invalid point {point} (size {size})")]
    InvalidPoint { point: String, size: usize },

    #[error("Unsupported board size {0}")]
    UnsupportedBoardSize(usize),

    #[error("Incomplete string board")]
    IncompleteBoard,

    #[error("Floating point number expected")]
    NotANumber,

    #[error("Missing string")]
    MissingString,
}
