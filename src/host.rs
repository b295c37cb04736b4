//! Interactive frame loop shared by the terminal binary and its tests.
//!
//! Each frame: render the snapshot, wait for input until the frame deadline,
//! then convert elapsed time into gravity ticks.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameSnapshot, GameState, GravityClock, PieceSource};
use crate::event_log::EventLog;
use crate::input::{InputEvent, InputPort};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use crate::types::GameAction;

/// Run until the input port reports `Quit`.
pub fn run_frames<S, P, W>(
    game: &mut GameState<S>,
    input: &mut P,
    term: &mut TerminalRenderer<W>,
    log: &mut EventLog,
    frame_ms: u64,
    mut viewport: Viewport,
) -> Result<()>
where
    S: PieceSource,
    P: InputPort,
    W: Write,
{
    let view = GameView::default();
    let frame = Duration::from_millis(frame_ms.max(1));
    let mut clock = GravityClock::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut last_frame = Instant::now();

    loop {
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let deadline = last_frame + frame;
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            match input.poll(timeout)? {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::Resize(w, h)) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                Some(InputEvent::Action(action)) => {
                    game.apply_action(action);
                    log.sync(game);
                }
                None => {}
            }
            if Instant::now() >= deadline {
                break;
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_millis().min(u32::MAX as u128) as u32;
        last_frame = now;

        for _ in 0..clock.advance(elapsed, game.status(), game.level()) {
            game.apply_action(GameAction::Tick);
            log.sync(game);
        }
    }
}
