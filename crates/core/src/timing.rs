//! Timing module - gravity clock for hosts
//!
//! The engine itself has no notion of time; a host feeds elapsed wall-clock
//! milliseconds into a [`GravityClock`] and applies one `GameAction::Tick` per
//! tick it reports.
//!
//! Rules:
//! - Nothing accumulates unless the session is `Playing`.
//! - Entering `Playing` (start or resume) begins a fresh interval; no remainder
//!   carries over from before a pause.
//! - A level change restarts the interval at the new speed.

use crate::scoring::tick_interval_ms;
use crate::types::{SessionStatus, START_LEVEL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityClock {
    interval_ms: u32,
    elapsed_ms: u32,
    level: u32,
    running: bool,
}

impl GravityClock {
    pub fn new() -> Self {
        Self {
            interval_ms: tick_interval_ms(START_LEVEL),
            elapsed_ms: 0,
            level: START_LEVEL,
            running: false,
        }
    }

    /// Interval currently in effect (ms)
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Time accumulated towards the next tick (ms)
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Advance by `elapsed_ms` of host time and return how many ticks are due.
    pub fn advance(&mut self, elapsed_ms: u32, status: SessionStatus, level: u32) -> u32 {
        if status != SessionStatus::Playing {
            self.running = false;
            self.elapsed_ms = 0;
            return 0;
        }

        if !self.running || level != self.level {
            self.running = true;
            self.level = level;
            self.interval_ms = tick_interval_ms(level);
            self.elapsed_ms = 0;
            return 0;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }
}

impl Default for GravityClock {
    fn default() -> Self {
        Self::new()
    }
}
