//! Headless runner: line-delimited commands on stdin, JSON observations on stdout.
//!
//! Diagnostics go to stderr so stdout stays a clean protocol stream.

use std::io;

use anyhow::Result;

use neon_tetris::config::HostConfig;
use neon_tetris::core::GameState;
use neon_tetris::event_log::EventLog;
use neon_tetris::headless::HeadlessSession;

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    let log = EventLog::open(config.log_path.as_deref())?;

    eprintln!("[Headless] seed {}", config.seed);
    if let Some(path) = config.log_path.as_deref() {
        eprintln!("[Headless] event log: {path}");
    }

    let mut session = HeadlessSession::new(GameState::new(config.seed), log);
    let result = session.run(io::stdin().lock(), io::stdout().lock());

    if let Some(e) = session.log_mut().take_error() {
        eprintln!("[Headless] {e}");
    }
    if let Err(e) = &result {
        eprintln!("[Headless] stopped: {e}");
    }
    result
}
