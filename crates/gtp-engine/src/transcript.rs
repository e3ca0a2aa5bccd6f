//! GTP stream log: every raw input line and every framed response.

use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::error::EngineError;

type Sink = Box<dyn AsyncWrite + Send + Unpin>;

/// Append-only, line-oriented log shared by the reader and the engine.
///
/// Clones write to the same sink; each call writes one whole line.
#[derive(Clone)]
pub struct Transcript {
    sink: Arc<Mutex<Sink>>,
}

impl Transcript {
    pub fn new<W>(writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Log to a newly created (or truncated) file.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let file = tokio::fs::File::create(path).await?;
        Ok(Self::new(file))
    }

    /// Write `line` followed by a newline.
    pub async fn log(&self, line: &str) -> Result<(), EngineError> {
        let mut sink = self.sink.lock().await;
        sink.write_all(line.as_bytes()).await?;
        sink.write_all(b"\n").await?;
        sink.flush().await?;
        Ok(())
    }
}
