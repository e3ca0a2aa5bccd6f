//! Single-slot rendezvous between the command reader and the engine loop.
//!
//! The engine posts a request carrying a reply slot and waits. The reader,
//! once it has framed a command (or hit end of input), waits for a request
//! and answers it. At most one command is ever in flight, and the reader does
//! not frame another command until the current one has been taken.

use gtp_core::Command;
use tokio::sync::{mpsc, oneshot};
use tokio::sync::mpsc::error::TrySendError;

/// `None` is the end-of-input sentinel.
type Reply = oneshot::Sender<Option<Command>>;

/// Engine side.
pub struct Mailbox {
    requests: mpsc::Sender<Reply>,
}

/// Reader side.
pub struct Outbox {
    requests: mpsc::Receiver<Reply>,
}

pub fn channel() -> (Mailbox, Outbox) {
    let (tx, rx) = mpsc::channel(1);
    (Mailbox { requests: tx }, Outbox { requests: rx })
}

impl Mailbox {
    /// Ask for the next command and wait for it.
    ///
    /// Returns `None` at end of input or when the reader has stopped.
    ///
    /// # Panics
    ///
    /// If a previous request is still pending.
    pub async fn request(&mut self) -> Option<Command> {
        let (reply, answer) = oneshot::channel();
        match self.requests.try_send(reply) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                panic!("command requested while another request is pending")
            }
            Err(TrySendError::Closed(_)) => return None,
        }
        answer.await.ok().flatten()
    }
}

impl Outbox {
    /// Wait for the engine to ask, then hand over `command`.
    ///
    /// Returns `false` if the engine has gone away.
    pub async fn deliver(&mut self, command: Option<Command>) -> bool {
        let mut command = command;
        while let Some(reply) = self.requests.recv().await {
            // A dropped reply slot means that request was abandoned; keep the
            // command for the next one.
            match reply.send(command) {
                Ok(()) => return true,
                Err(returned) => command = returned,
            }
        }
        false
    }
}
