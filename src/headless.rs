//! Headless session: one request line in, one JSON line out.

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};

use crate::core::{GameSnapshot, GameState, PieceSource, UniformSource};
use crate::event_log::EventLog;
use crate::protocol::{build_observation, parse_request, to_json_line, ErrorMessage, Request};

pub struct HeadlessSession<S: PieceSource = UniformSource> {
    state: GameState<S>,
    log: EventLog,
    seq: u64,
    snap: GameSnapshot,
}

impl<S: PieceSource> HeadlessSession<S> {
    pub fn new(state: GameState<S>, log: EventLog) -> Self {
        Self {
            state,
            log,
            seq: 0,
            snap: GameSnapshot::default(),
        }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn log_mut(&mut self) -> &mut EventLog {
        &mut self.log
    }

    /// Handle one request line and return the response line (without newline).
    ///
    /// Blank lines are skipped and produce `None`.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.seq += 1;

        let accepted = match parse_request(line) {
            Ok(Request::Action(action)) => self.state.apply_action(action),
            Ok(Request::Snapshot) => false,
            Err(e) => return to_json_line(&ErrorMessage::new(self.seq, e.to_string())).map(Some),
        };

        let event = self.log.sync(&mut self.state);
        self.state.snapshot_into(&mut self.snap);
        to_json_line(&build_observation(self.seq, accepted, &self.snap, event)).map(Some)
    }

    /// Serve requests from `input` until EOF, answering on `output`.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line.map_err(|e| anyhow!("headless: read failed: {e}"))?;
            if let Some(reply) = self.handle_line(&line)? {
                writeln!(output, "{reply}").map_err(|e| anyhow!("headless: write failed: {e}"))?;
                output
                    .flush()
                    .map_err(|e| anyhow!("headless: flush failed: {e}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::types::PieceKind;

    fn session() -> HeadlessSession<SequenceSource> {
        HeadlessSession::new(
            GameState::with_source(SequenceSource::repeat(PieceKind::T)),
            EventLog::disabled(),
        )
    }

    fn reply(session: &mut HeadlessSession<SequenceSource>, line: &str) -> serde_json::Value {
        let text = session.handle_line(line).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_seq_counts_answered_lines() {
        let mut s = session();
        assert_eq!(reply(&mut s, "snapshot")["seq"], 1);
        assert!(s.handle_line("").unwrap().is_none());
        assert_eq!(reply(&mut s, "bogus")["seq"], 2);
        assert_eq!(reply(&mut s, "start")["seq"], 3);
    }

    #[test]
    fn test_rejected_action_reports_not_accepted() {
        let mut s = session();
        let v = reply(&mut s, "moveLeft");
        assert_eq!(v["accepted"], false);
        assert_eq!(v["status"], "menu");
    }

    #[test]
    fn test_hard_drop_reports_lock() {
        let mut s = session();
        reply(&mut s, "start");
        let v = reply(&mut s, "hardDrop");
        assert_eq!(v["accepted"], true);
        assert_eq!(v["last_event"]["piece"], "T");
        assert_eq!(v["last_event"]["drop_distance"], 18);
        assert_eq!(v["score"], 36);
        assert_eq!(v["board"][19], "....T.....");
        assert_eq!(v["board"][18], "...TTT....");
    }

    #[test]
    fn test_run_answers_every_line() {
        let mut s = session();
        let mut out = Vec::new();
        s.run("start\nrotate\n\nnope\n".as_bytes(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].contains(r#""type":"error""#));
    }
}
