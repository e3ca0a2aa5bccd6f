//! The GTP main loop.

use std::sync::Arc;

use gtp_core::Command;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

use crate::error::EngineError;
use crate::handler::{interrupt_hook, CommandHandler, InterruptHook};
use crate::mailbox::{self, Mailbox};
use crate::reader::CommandReader;
use crate::response::Response;
use crate::transcript::Transcript;

/// Serves GTP for one handler: reads commands from an input stream, runs them
/// through the handler one at a time and writes framed responses.
pub struct GtpEngine<H> {
    handler: Arc<H>,
    interrupt: InterruptHook,
    transcript: Option<Transcript>,
}

impl<H: CommandHandler> GtpEngine<H> {
    pub fn new(handler: Arc<H>) -> Self {
        let interrupt = interrupt_hook(&handler);
        Self {
            handler,
            interrupt,
            transcript: None,
        }
    }

    /// Mirror the GTP stream (input lines and responses) to `transcript`.
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    /// Run until end of input or `quit`.
    ///
    /// Read errors count as end of input. Write errors on `output` or the
    /// transcript end the loop with an error.
    pub async fn run<R, W>(&self, input: R, output: &mut W) -> Result<(), EngineError>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin,
    {
        let (mut mailbox, outbox) = mailbox::channel();
        let reader = CommandReader::new(
            input,
            outbox,
            Arc::clone(&self.interrupt),
            self.transcript.clone(),
        );
        let reader_task = tokio::spawn(reader.run());

        let result = self.serve(&mut mailbox, output).await;
        match &result {
            Ok(()) => {
                drop(mailbox);
                if let Err(e) = reader_task.await {
                    error!(error = %e, "Command reader task failed");
                }
            }
            Err(_) => reader_task.abort(),
        }
        result
    }

    async fn serve<W>(&self, mailbox: &mut Mailbox, output: &mut W) -> Result<(), EngineError>
    where
        W: AsyncWrite + Unpin,
    {
        loop {
            let Some(command) = mailbox.request().await else {
                info!("End of input, stopping");
                return Ok(());
            };
            let response = self.dispatch(&command).await;
            self.respond(output, command.id, &response).await?;
            if command.is_quit() {
                info!("Quit received, stopping");
                return Ok(());
            }
        }
    }

    async fn dispatch(&self, command: &Command) -> Response {
        let handler = Arc::clone(&self.handler);
        let text = command.text.trim().to_string();
        match tokio::task::spawn_blocking(move || handler.handle_command(&text)).await {
            Ok(response) => response,
            Err(e) => {
                error!(command = %command.text, error = %e, "Command handler panicked");
                Response::failure("internal error")
            }
        }
    }

    async fn respond<W>(
        &self,
        output: &mut W,
        id: Option<i32>,
        response: &Response,
    ) -> Result<(), EngineError>
    where
        W: AsyncWrite + Unpin,
    {
        let text = response.wire_text(id);
        debug!(response = %text.trim_end(), "GTP >");

        output.write_all(text.as_bytes()).await?;
        if !matches!(response, Response::Raw(_)) {
            output.write_all(b"\n").await?;
            if let Some(transcript) = &self.transcript {
                transcript.log(&text).await?;
            }
        }
        output.flush().await?;
        Ok(())
    }
}
