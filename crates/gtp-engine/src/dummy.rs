//! A minimal command handler for exercising GTP controllers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use gtp_core::arguments::parse_integer_argument;

use crate::config::DummyConfig;
use crate::handler::CommandHandler;
use crate::response::Response;

const COMMANDS: [&str; 10] = [
    "dummy_invalid",
    "dummy_sleep",
    "echo",
    "echo_err",
    "known_command",
    "list_commands",
    "name",
    "protocol_version",
    "quit",
    "version",
];

/// How often `dummy_sleep` checks for an interrupt.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct DummyHandler {
    name: String,
    version: String,
    default_sleep: Duration,
    interrupted: AtomicBool,
}

impl DummyHandler {
    pub fn new(config: &DummyConfig) -> Self {
        Self {
            name: config.name.clone(),
            version: config.version.clone(),
            default_sleep: Duration::from_secs(config.default_sleep_secs),
            interrupted: AtomicBool::new(false),
        }
    }

    fn dispatch(&self, args: &[&str]) -> Response {
        match args[0] {
            "protocol_version" => Response::success("2"),
            "name" => Response::success(self.name.as_str()),
            "version" => Response::success(self.version.as_str()),
            "list_commands" => Response::success(COMMANDS.join("\n")),
            "known_command" => match args {
                [_, command] => Response::success(COMMANDS.contains(command).to_string()),
                _ => Response::failure("Missing command argument"),
            },
            "echo" => Response::success(args[1..].join(" ")),
            "echo_err" => Response::failure(args[1..].join(" ")),
            "dummy_sleep" => self.sleep(args),
            "dummy_invalid" => Response::raw(
                "This is an invalid GTP response.\n\
                 It does not start with a status character.\n\n",
            ),
            "quit" => Response::success(""),
            _ => Response::failure("unknown command"),
        }
    }

    /// Sleep for the given number of seconds, or until interrupted.
    fn sleep(&self, args: &[&str]) -> Response {
        let duration = if args.len() == 1 {
            self.default_sleep
        } else {
            match parse_integer_argument(args) {
                Ok(arg) if arg.integer >= 0 => Duration::from_secs(arg.integer as u64),
                Ok(_) => return Response::failure("Invalid integer argument"),
                Err(e) => return Response::failure(e.to_string()),
            }
        };

        let deadline = Instant::now() + duration;
        loop {
            if self.interrupted.load(Ordering::SeqCst) {
                return Response::failure("interrupted");
            }
            let now = Instant::now();
            if now >= deadline {
                return Response::success("");
            }
            std::thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }
}

impl CommandHandler for DummyHandler {
    fn handle_command(&self, command: &str) -> Response {
        let args: Vec<&str> = command.split_whitespace().collect();
        if args.is_empty() {
            return Response::failure("empty command");
        }
        // An interrupt only applies to the command it arrives during.
        self.interrupted.store(false, Ordering::SeqCst);
        self.dispatch(&args)
    }

    fn interrupt_command(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }
}
