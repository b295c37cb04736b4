//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and exposes input sources behind the
//! [`InputPort`] trait, so hosts can be driven by a real terminal or by a script.

pub mod map;
pub mod port;

pub use neon_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use port::{InputEvent, InputPort, ScriptedInput, TerminalInput};
