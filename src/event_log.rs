//! Line-delimited JSON event log.
//!
//! When a log path is configured, every host appends one JSON object per game
//! event (session start, lock, line clear, game over). Logging never interrupts
//! play: the first write failure closes the log and is kept for the host to
//! report once it is safe to print.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Error, Result};
use serde::Serialize;

use crate::core::{GameState, PieceSource};
use crate::types::{LockEvent, SessionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogRecord {
    SessionStart {
        ts: u64,
        episode_id: u32,
    },
    Lock {
        ts: u64,
        episode_id: u32,
        piece: char,
        drop_distance: u32,
        score: u32,
    },
    LineClear {
        ts: u64,
        episode_id: u32,
        lines_cleared: u32,
        line_clear_score: u32,
        level_up: bool,
        score: u32,
        level: u32,
        lines: u32,
    },
    GameOver {
        ts: u64,
        episode_id: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
}

pub struct EventLog {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    error: Option<Error>,
    seen_episode: u32,
    seen_status: SessionStatus,
}

impl EventLog {
    /// A log that records nothing.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
            error: None,
            seen_episode: 0,
            seen_status: SessionStatus::Menu,
        }
    }

    /// Append to `path`, or a disabled log for `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("event log: cannot open {path}: {e}"))?;
        Ok(Self::with_writer(BufWriter::new(file)))
    }

    /// Log into any writer.
    pub fn with_writer(w: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(w)),
            buf: Vec::with_capacity(256),
            ..Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// First write error, if logging has stopped.
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    pub fn record(&mut self, record: &LogRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        let written = serde_json::to_writer(&mut self.buf, record)
            .map_err(Error::from)
            .and_then(|_| {
                self.buf.push(b'\n');
                sink.write_all(&self.buf)?;
                sink.flush()?;
                Ok(())
            });

        if let Err(e) = written {
            self.sink = None;
            self.error = Some(anyhow!("event log: write failed: {e}"));
        }
    }

    /// Take the state's pending lock event, log it together with any session
    /// transition since the last call, and hand the event back to the caller.
    pub fn sync<S: PieceSource>(&mut self, state: &mut GameState<S>) -> Option<LockEvent> {
        let event = state.take_last_event();
        let episode_id = state.episode_id();

        if episode_id != self.seen_episode {
            self.seen_episode = episode_id;
            self.seen_status = SessionStatus::Playing;
            self.record(&LogRecord::SessionStart {
                ts: now_ms(),
                episode_id,
            });
        }

        if let Some(ev) = event {
            self.record(&LogRecord::Lock {
                ts: now_ms(),
                episode_id,
                piece: ev.kind.letter(),
                drop_distance: ev.drop_distance,
                score: state.score(),
            });
            if ev.lines_cleared > 0 {
                self.record(&LogRecord::LineClear {
                    ts: now_ms(),
                    episode_id,
                    lines_cleared: ev.lines_cleared,
                    line_clear_score: ev.line_clear_score,
                    level_up: ev.level_up,
                    score: state.score(),
                    level: state.level(),
                    lines: state.lines(),
                });
            }
        }

        let status = state.status();
        if status == SessionStatus::GameOver && self.seen_status != SessionStatus::GameOver {
            self.record(&LogRecord::GameOver {
                ts: now_ms(),
                episode_id,
                score: state.score(),
                level: state.level(),
                lines: state.lines(),
            });
        }
        self.seen_status = status;

        event
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::{GameAction, PieceKind};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Writer whose contents stay readable after the log takes ownership.
    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn events(out: &Shared) -> Vec<serde_json::Value> {
        let bytes = out.0.borrow();
        std::str::from_utf8(&bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_disabled_log_still_hands_back_events() {
        let mut log = EventLog::disabled();
        let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::O));
        state.apply_action(GameAction::Start);
        state.apply_action(GameAction::HardDrop);
        let event = log.sync(&mut state);
        assert_eq!(event.map(|e| e.kind), Some(PieceKind::O));
        assert!(!log.is_enabled());
    }

    #[test]
    fn test_session_and_lock_records() {
        let out = Shared::default();
        let mut log = EventLog::with_writer(out.clone());
        let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::O));

        state.apply_action(GameAction::Start);
        log.sync(&mut state);
        state.apply_action(GameAction::HardDrop);
        log.sync(&mut state);

        let records = events(&out);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["event"], "session_start");
        assert_eq!(records[0]["episode_id"], 1);
        assert_eq!(records[1]["event"], "lock");
        assert_eq!(records[1]["piece"], "O");
        assert_eq!(records[1]["drop_distance"], 18);
    }

    #[test]
    fn test_game_over_logged_once() {
        let out = Shared::default();
        let mut log = EventLog::with_writer(out.clone());
        let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::O));
        state.apply_action(GameAction::Start);
        log.sync(&mut state);

        for _ in 0..20 {
            state.apply_action(GameAction::HardDrop);
            log.sync(&mut state);
        }
        assert_eq!(state.status(), SessionStatus::GameOver);

        let game_overs = events(&out)
            .iter()
            .filter(|r| r["event"] == "game_over")
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_write_failure_closes_log() {
        let mut log = EventLog::with_writer(Broken);
        log.record(&LogRecord::SessionStart { ts: 0, episode_id: 1 });
        assert!(!log.is_enabled());
        assert!(log.take_error().is_some());
        assert!(log.take_error().is_none());
    }
}
