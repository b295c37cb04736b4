//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is diffed and flushed to
//! the terminal.
//!
//! - [`GameView`] is pure: snapshot in, framebuffer out
//! - [`TerminalRenderer`] owns terminal modes and sends only changed cells
//! - Board cells are 2 columns wide to keep them roughly square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use neon_tetris_core as core;
pub use neon_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
