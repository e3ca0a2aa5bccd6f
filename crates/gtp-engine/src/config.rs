//! Dummy engine configuration from environment variables

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::error::EngineError;

#[derive(Clone, Debug)]
pub struct DummyConfig {
    /// File receiving the GTP transcript, if any
    pub log_file: Option<PathBuf>,

    /// Reported by the `name` command
    pub name: String,

    /// Reported by the `version` command
    pub version: String,

    /// How long `dummy_sleep` sleeps when given no argument
    pub default_sleep_secs: u64,
}

impl Default for DummyConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            name: "GtpDummy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            default_sleep_secs: 20,
        }
    }
}

impl DummyConfig {
    /// Load configuration from environment variables.
    /// Call after any `.env` file has been applied.
    pub fn load() -> Result<Self, EngineError> {
        let defaults = Self::default();

        let log_file = env::var("GTP_LOG_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let name = env::var("GTP_DUMMY_NAME").unwrap_or(defaults.name);
        let version = env::var("GTP_DUMMY_VERSION").unwrap_or(defaults.version);

        let default_sleep_secs = match env::var("GTP_DUMMY_SLEEP_SECS") {
            Ok(v) => v
                .trim()
                .parse()
                .map_err(|_| EngineError::Config("GTP_DUMMY_SLEEP_SECS must be a whole number"))?,
            Err(_) => defaults.default_sleep_secs,
        };

        if let Some(path) = &log_file {
            info!(log_file = %path.display(), "GTP stream will be logged");
        }

        Ok(Self {
            log_file,
            name,
            version,
            default_sleep_secs,
        })
    }
}
