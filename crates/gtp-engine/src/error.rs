//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
