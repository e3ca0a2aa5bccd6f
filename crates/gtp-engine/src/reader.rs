//! Background task turning the input stream into framed commands.
//!
//! Reading happens apart from the engine loop so that the `# interrupt` line
//! can reach the handler while a command is still running.

use gtp_core::command::INTERRUPT_MARKER;
use gtp_core::Command;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Split};
use tracing::{debug, info, warn};

use crate::handler::InterruptHook;
use crate::mailbox::Outbox;
use crate::transcript::Transcript;

pub struct CommandReader<R> {
    lines: Split<BufReader<R>>,
    outbox: Outbox,
    interrupt: InterruptHook,
    transcript: Option<Transcript>,
}

impl<R: AsyncRead + Unpin> CommandReader<R> {
    pub fn new(
        input: R,
        outbox: Outbox,
        interrupt: InterruptHook,
        transcript: Option<Transcript>,
    ) -> Self {
        Self {
            lines: BufReader::new(input).split(b'\n'),
            outbox,
            interrupt,
            transcript,
        }
    }

    /// Read until end of input, `quit`, or the engine going away.
    pub async fn run(mut self) {
        loop {
            let line = match self.lines.next_segment().await {
                Ok(Some(bytes)) => decode_line(&bytes),
                Ok(None) => {
                    debug!("End of command stream");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to read command stream, treating as end of input");
                    break;
                }
            };
            debug!(line = %line, "GTP <");

            if let Some(transcript) = &self.transcript {
                if let Err(e) = transcript.log(&line).await {
                    warn!(error = %e, "Failed to write GTP log");
                }
            }

            if line.trim() == INTERRUPT_MARKER {
                info!("Interrupt requested");
                (self.interrupt)();
            }

            let Some(command) = Command::parse_line(&line) else {
                continue;
            };
            let is_quit = command.is_quit();
            if !self.outbox.deliver(Some(command)).await || is_quit {
                return;
            }
        }
        self.outbox.deliver(None).await;
    }
}

/// Undecodable bytes become U+FFFD rather than ending the session.
fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
