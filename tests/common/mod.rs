use std::sync::Arc;

use gtp_engine::config::DummyConfig;
use gtp_engine::dummy::DummyHandler;
use gtp_engine::{CommandHandler, GtpEngine};

/// Dummy handler whose argument-less `dummy_sleep` would block for a minute.
pub fn dummy() -> Arc<DummyHandler> {
    Arc::new(DummyHandler::new(&DummyConfig {
        name: "TestDummy".to_string(),
        version: "1.0".to_string(),
        default_sleep_secs: 60,
        ..DummyConfig::default()
    }))
}

/// Feed `input` to an engine around `handler` and return everything written.
pub async fn serve<H: CommandHandler>(handler: Arc<H>, input: &str) -> String {
    let engine = GtpEngine::new(handler);
    let mut output = Vec::new();
    engine
        .run(std::io::Cursor::new(input.as_bytes().to_vec()), &mut output)
        .await
        .expect("engine failed");
    String::from_utf8(output).expect("output is not UTF-8")
}
