//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal view, and the headless protocol alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: (`BOARD_WIDTH / 2 - 2`, 0) = (3, 0) for every piece
//!
//! # Scoring
//!
//! | Lines | Points (× level) |
//! |-------|------------------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 500 |
//! | 4 | 800 |
//!
//! Hard drops add `HARD_DROP_POINT` per row travelled. Level starts at 1 and
//! rises every 10 cleared lines.
//!
//! # Gravity
//!
//! The host ticks the game every `max(100, 1000 / (level * 0.8 + 0.2))` ms.
//!
//! # Examples
//!
//! ```
//! use neon_tetris_types::{PieceKind, Rotation, GameAction, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor column for freshly spawned pieces.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Anchor row for freshly spawned pieces.
pub const SPAWN_Y: i8 = 0;

/// Line clear points indexed by the number of rows cleared in one lock.
///
/// Multiplied by the level that was current when the rows were cleared.
pub const LINE_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Points per row travelled by a hard drop.
pub const HARD_DROP_POINT: u32 = 2;

/// Cleared lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Level of a fresh game.
pub const START_LEVEL: u32 = 1;

/// Gravity numerator: the tick interval at level 1 (ms).
pub const BASE_TICK_MS: f64 = 1000.0;

/// Tick interval never drops below this (ms).
pub const MIN_TICK_MS: u32 = 100;

/// Largest horizontal nudge tried when a rotation collides.
pub const MAX_KICK: i8 = 5;

/// The seven tetromino piece kinds
///
/// Shapes are defined by the core geometry module; colours belong to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in canonical order. Uniform piece selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Upper-case letter used by the view and the headless protocol.
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
            PieceKind::O => 'O',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
            PieceKind::Z => 'Z',
        }
    }

    /// Compact non-zero cell id (1..=7); 0 is reserved for an empty cell.
    pub fn cell_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell_id`].
    pub fn from_cell_id(id: u8) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }
}

/// Orientation of the active piece: the number of clockwise quarter turns
/// applied to its canonical shape.
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Number of clockwise quarter turns (0..=3).
    pub fn index(&self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from any turn count; reduced modulo 4.
    pub fn from_index(turns: u32) -> Self {
        match turns % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// Title screen; waiting for a start command.
    #[default]
    Menu,
    Playing,
    Paused,
    /// Terminal state until the next start/reset.
    GameOver,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Menu => "menu",
            SessionStatus::Playing => "playing",
            SessionStatus::Paused => "paused",
            SessionStatus::GameOver => "gameOver",
        }
    }
}

/// Commands a host can apply to the game state
///
/// Both human input and scripted input produce these. Gameplay commands are
/// ignored unless the session is `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise, nudging sideways if needed
    Rotate,
    /// Drop piece one cell down; locks it when blocked
    SoftDrop,
    /// Instantly drop piece to lowest valid position and lock it
    HardDrop,
    /// Swap the active piece with the hold slot (once per lock)
    Hold,
    /// Gravity tick issued by the host timer (same rules as `SoftDrop`)
    Tick,
    /// Playing → Paused
    Pause,
    /// Paused → Playing
    Resume,
    /// Pause or resume depending on current state
    TogglePause,
    /// Start a fresh game from the menu or the game-over screen
    Start,
    /// Full reset into a fresh game from any state
    Reset,
}

impl GameAction {
    /// Parse action from string (headless protocol, case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use neon_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" | "rotatecw" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "hold" => Some(GameAction::Hold),
            "tick" => Some(GameAction::Tick),
            "pause" => Some(GameAction::Pause),
            "resume" => Some(GameAction::Resume),
            "togglepause" => Some(GameAction::TogglePause),
            "start" => Some(GameAction::Start),
            "reset" | "restart" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// Convert to camelCase string for the headless protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Hold => "hold",
            GameAction::Tick => "tick",
            GameAction::Pause => "pause",
            GameAction::Resume => "resume",
            GameAction::TogglePause => "togglePause",
            GameAction::Start => "start",
            GameAction::Reset => "reset",
        }
    }
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by hosts (event log, headless protocol).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Rows travelled by the hard drop that caused the lock (0 for gravity locks).
    pub drop_distance: u32,
    pub level_up: bool,
    /// The respawn after this lock ended the game.
    pub game_over: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the specified piece kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_is_centered() {
        assert_eq!(SPAWN_X, 3);
        assert_eq!(SPAWN_Y, 0);
    }

    #[test]
    fn scoring_table_matches_classic_values() {
        assert_eq!(LINE_POINTS, [0, 100, 300, 500, 800]);
        assert_eq!(HARD_DROP_POINT, 2);
    }

    #[test]
    fn cell_id_roundtrips_every_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_cell_id(kind.cell_id()), Some(kind));
        }
        assert_eq!(PieceKind::from_cell_id(0), None);
        assert_eq!(PieceKind::from_cell_id(8), None);
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(0), Rotation::North);
        assert_eq!(Rotation::from_index(3), Rotation::West);
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::West.rotate_cw().index(), 0);
    }

    #[test]
    fn action_strings_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::Rotate,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Hold,
            GameAction::Tick,
            GameAction::Pause,
            GameAction::Resume,
            GameAction::TogglePause,
            GameAction::Start,
            GameAction::Reset,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn session_starts_in_menu() {
        assert_eq!(SessionStatus::default(), SessionStatus::Menu);
    }
}
