//! Host configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `NEON_TETRIS_SEED` | piece sequence seed (u32) | derived from the clock |
//! | `NEON_TETRIS_FRAME_MS` | frame period in ms (>= 1) | 16 |
//! | `NEON_TETRIS_LOG_PATH` | JSON-lines event log file | off |
//!
//! Malformed values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub seed: u32,
    pub frame_ms: u64,
    pub log_path: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            seed: seed_from_clock(),
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("NEON_TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(seed_from_clock);

        let frame_ms = lookup("NEON_TETRIS_FRAME_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(DEFAULT_FRAME_MS);

        let log_path = lookup("NEON_TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            seed,
            frame_ms,
            log_path,
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
