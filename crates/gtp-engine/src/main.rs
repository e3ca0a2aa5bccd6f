//! GtpDummy
//!
//! Serves a tiny GTP command set on stdin/stdout. Useful for checking how a
//! controller copes with slow, interrupted, failing and malformed responses.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gtp_engine::config::DummyConfig;
use gtp_engine::dummy::DummyHandler;
use gtp_engine::{GtpEngine, Transcript};

#[derive(Parser, Debug)]
#[command(name = "gtp-dummy", version, about = "Dummy Go program speaking GTP on stdin/stdout")]
struct Cli {
    /// Read settings from an env-format file instead of `.env`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log the GTP stream to a file
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match &cli.config {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let mut config = DummyConfig::load()?;
    if cli.log.is_some() {
        config.log_file = cli.log;
    }

    let handler = Arc::new(DummyHandler::new(&config));
    let mut engine = GtpEngine::new(handler);
    if let Some(path) = &config.log_file {
        let transcript = Transcript::create(path)
            .await
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        engine = engine.with_transcript(transcript);
    }

    info!(name = %config.name, version = %config.version, "GtpDummy ready");
    let mut stdout = tokio::io::stdout();
    engine.run(tokio::io::stdin(), &mut stdout).await?;
    Ok(())
}
