//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, timers, or I/O:
//!
//! - **Deterministic**: A seed (or a scripted piece source) fixes the whole game
//! - **Synchronous**: Every command fully resolves before it returns
//! - **Portable**: The same engine drives the terminal and the headless host
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, piece merging and row sweeping
//! - [`collision`]: Fit test for a shape matrix at an anchor
//! - [`game_state`]: Session lifecycle, active piece, hold, scoring and spawning
//! - [`pieces`]: Tetromino shape matrices, rotation transform, kick offsets
//! - [`rng`]: Piece sources (seeded uniform, scripted sequence)
//! - [`scoring`]: Line points, drop points, level and gravity interval
//! - [`snapshot`]: Plain copies of state for renderers and hosts
//! - [`timing`]: Gravity clock that turns elapsed time into ticks
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: Every kind is equally likely on every draw
//! - **Matrix rotation**: Clockwise only, with sideways nudges of up to 5 columns
//! - **No lock delay**: A piece locks the moment a downward move is blocked
//! - **Ghost piece**: Shows where the current piece will land
//! - **Hold**: Store one piece for later use (once per lock)
//!
//! # Example
//!
//! ```
//! use neon_tetris_core::GameState;
//! use neon_tetris_types::{GameAction, SessionStatus};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.status(), SessionStatus::Menu);
//! game.apply_action(GameAction::Start);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drop awards points
//! assert!(game.score() > 0);
//! ```
//!
//! # Timing
//!
//! The engine never reads a clock. Hosts feed elapsed time into a
//! [`GravityClock`] and apply `GameAction::Tick` once per tick it reports.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timing;

pub use neon_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{GameState, Tetromino};
pub use pieces::{canonical_shape, current_matrix, kick_offsets, ShapeMatrix, Turn};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{
    calculate_drop_score, calculate_level, calculate_line_score, calculate_score,
    tick_interval_ms, ScoreResult,
};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timing::GravityClock;
