use std::sync::Arc;

use crate::response::Response;

/// The capability the engine dispatches commands to.
///
/// `handle_command` runs on a blocking thread and may take as long as it
/// needs. `interrupt_command` is called from the reader task when the line
/// `# interrupt` arrives, possibly while `handle_command` is still running
/// for an earlier command. It must not block; the usual implementation sets a
/// flag that long-running commands poll.
pub trait CommandHandler: Send + Sync + 'static {
    /// Run one command. `command` is trimmed and has no id.
    fn handle_command(&self, command: &str) -> Response;

    fn interrupt_command(&self);
}

/// Thread-safe interrupt callback handed to the command reader.
pub type InterruptHook = Arc<dyn Fn() + Send + Sync>;

/// Build the interrupt callback for `handler`.
pub fn interrupt_hook<H: CommandHandler>(handler: &Arc<H>) -> InterruptHook {
    let handler = Arc::clone(handler);
    Arc::new(move || handler.interrupt_command())
}
