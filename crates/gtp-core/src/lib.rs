//! Go Text Protocol value types and argument grammar.
//!
//! Everything in this crate is pure: parsing functions take text (and a board
//! size where points are involved) and return a value or a [`ParseError`].

pub mod arguments;
pub mod board;
pub mod color;
pub mod command;
pub mod error;
pub mod point;
pub mod time_settings;
pub mod tokenize;
pub mod variation;

pub use color::Color;
pub use command::Command;
pub use error::ParseError;
pub use point::{Move, Point, Vertex, MAX_BOARD_SIZE};
pub use time_settings::{Byoyomi, TimeSettings};
