//! GTP protocol engine: reads commands, dispatches them to a handler and
//! frames the responses.

pub use gtp_core;

pub mod config;
pub mod dummy;
pub mod engine;
pub mod error;
pub mod handler;
pub mod mailbox;
pub mod reader;
pub mod response;
pub mod transcript;

pub use engine::GtpEngine;
pub use error::EngineError;
pub use handler::{CommandHandler, InterruptHook};
pub use response::Response;
pub use transcript::Transcript;
