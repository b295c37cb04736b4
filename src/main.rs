//! Neon Tetris terminal runner (default binary).
//!
//! crossterm for input, a framebuffer renderer for output. Configuration comes
//! from `NEON_TETRIS_*` environment variables (see `neon_tetris::config`).

use anyhow::Result;

use neon_tetris::config::HostConfig;
use neon_tetris::core::GameState;
use neon_tetris::event_log::EventLog;
use neon_tetris::host::run_frames;
use neon_tetris::input::TerminalInput;
use neon_tetris::term::{TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    let mut log = EventLog::open(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut game = GameState::new(config.seed);
    let mut input = TerminalInput::new();
    let result = run_frames(
        &mut game,
        &mut input,
        &mut term,
        &mut log,
        config.frame_ms,
        Viewport::new(w, h),
    );

    // Always restore the terminal before reporting anything.
    let restored = term.exit();

    if let Some(e) = log.take_error() {
        eprintln!("[NeonTetris] {e}");
    }
    result.and(restored)
}
