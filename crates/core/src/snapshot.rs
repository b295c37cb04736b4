//! Snapshot types for rendering and observation
//!
//! These are plain copies of game state that renderers and hosts can consume
//! without borrowing the engine.

use crate::game_state::Tetromino;
use crate::types::{PieceKind, Rotation, SessionStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Active piece as seen from outside the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub collided: bool,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(t: Tetromino) -> Self {
        Self {
            kind: t.kind,
            rotation: t.rotation,
            x: t.x,
            y: t.y,
            collided: t.collided,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board cells covered by this piece (may include rows above the board)
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let matrix = crate::pieces::current_matrix(self.kind, self.rotation);
        let (x, y) = (self.x, self.y);
        let cells: arrayvec::ArrayVec<(i8, i8), 4> =
            matrix.cells().map(|(dx, dy)| (x + dx, y + dy)).collect();
        cells.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Locked cells (0 = empty, otherwise `PieceKind::cell_id`)
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    /// `None` while in the menu.
    pub active: Option<ActiveSnapshot>,
    /// Landing anchor of the active piece; `None` unless playing.
    pub ghost: Option<(i8, i8)>,
    pub hold: Option<PieceKind>,
    pub next: PieceKind,
    pub can_hold: bool,
    pub status: SessionStatus,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost: None,
            hold: None,
            next: PieceKind::I,
            can_hold: true,
            status: SessionStatus::Menu,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}

impl GameSnapshot {
    /// Ghost cells: the active piece's shape at the ghost anchor
    pub fn ghost_cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let ghost = match (self.active, self.ghost) {
            (Some(active), Some((x, y))) => Some(ActiveSnapshot { x, y, ..active }),
            _ => None,
        };
        ghost.into_iter().flat_map(|g| g.cells())
    }
}
