//! Neon Tetris (workspace facade crate).
//!
//! The engine and its presentation live in dedicated crates under `crates/`;
//! this package re-exports them as `neon_tetris::{core,input,term,types}` and
//! adds the host pieces: configuration, event log, the headless JSON protocol
//! and the interactive frame loop.

pub use neon_tetris_core as core;
pub use neon_tetris_input as input;
pub use neon_tetris_term as term;
pub use neon_tetris_types as types;

pub mod config;
pub mod event_log;
pub mod headless;
pub mod host;
pub mod protocol;
