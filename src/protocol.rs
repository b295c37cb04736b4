//! Protocol module - line-delimited JSON messages for the headless host
//!
//! Requests are single lines holding an action name (`moveLeft`, `hardDrop`, ...)
//! or `snapshot`. Every request is answered by exactly one JSON object on one
//! line: an `observation`, or an `error` for lines that cannot be understood.

use anyhow::{anyhow, Result};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::{GameAction, LockEvent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// A parsed request line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Action(GameAction),
    /// Report state without changing it.
    Snapshot,
}

/// Parse one request line (surrounding whitespace ignored, names case-insensitive).
pub fn parse_request(line: &str) -> Result<Request> {
    let name = line.trim();
    if name.is_empty() {
        return Err(anyhow!("empty command"));
    }
    if name.eq_ignore_ascii_case("snapshot") {
        return Ok(Request::Snapshot);
    }
    GameAction::from_str(name)
        .map(Request::Action)
        .ok_or_else(|| anyhow!("unknown command: {name}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObservationType {
    #[serde(rename = "observation")]
    Observation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorType {
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PieceLetter {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl From<PieceKind> for PieceLetter {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::J => Self::J,
            PieceKind::L => Self::L,
            PieceKind::O => Self::O,
            PieceKind::S => Self::S,
            PieceKind::T => Self::T,
            PieceKind::Z => Self::Z,
        }
    }
}

/// Locked cells, serialized as 20 strings of 10 chars (`.` or a piece letter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRows(pub [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]);

impl BoardRows {
    fn row_bytes(row: &[u8; BOARD_WIDTH as usize]) -> [u8; BOARD_WIDTH as usize] {
        row.map(|id| {
            PieceKind::from_cell_id(id).map_or(b'.', |k| k.letter() as u8)
        })
    }
}

impl Serialize for BoardRows {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for row in &self.0 {
            let bytes = Self::row_bytes(row);
            let text = std::str::from_utf8(&bytes).map_err(<S::Error as serde::ser::Error>::custom)?;
            seq.serialize_element(text)?;
        }
        seq.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivePiece {
    pub kind: PieceLetter,
    /// `north`, `east`, `south` or `west`.
    pub rotation: &'static str,
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LastEvent {
    pub piece: PieceLetter,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub drop_distance: u32,
    pub level_up: bool,
    pub game_over: bool,
}

impl From<LockEvent> for LastEvent {
    fn from(ev: LockEvent) -> Self {
        Self {
            piece: ev.kind.into(),
            lines_cleared: ev.lines_cleared,
            line_clear_score: ev.line_clear_score,
            drop_distance: ev.drop_distance,
            level_up: ev.level_up,
            game_over: ev.game_over,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationMessage {
    #[serde(rename = "type")]
    pub msg_type: ObservationType,
    pub seq: u64,
    /// Whether the request changed the game.
    pub accepted: bool,
    /// `menu`, `playing`, `paused` or `gameOver`.
    pub status: &'static str,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub board: BoardRows,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActivePiece>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ghost: Option<Position>,
    pub next: PieceLetter,
    pub hold: Option<PieceLetter>,
    pub can_hold: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event: Option<LastEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    #[serde(rename = "type")]
    pub msg_type: ErrorType,
    pub seq: u64,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(seq: u64, message: impl Into<String>) -> Self {
        Self {
            msg_type: ErrorType::Error,
            seq,
            message: message.into(),
        }
    }
}

pub fn build_observation(
    seq: u64,
    accepted: bool,
    snap: &GameSnapshot,
    last_event: Option<LockEvent>,
) -> ObservationMessage {
    ObservationMessage {
        msg_type: ObservationType::Observation,
        seq,
        accepted,
        status: snap.status.as_str(),
        episode_id: snap.episode_id,
        score: snap.score,
        level: snap.level,
        lines: snap.lines,
        board: BoardRows(snap.board),
        active: snap.active.map(|a| ActivePiece {
            kind: a.kind.into(),
            rotation: a.rotation.as_str(),
            x: a.x,
            y: a.y,
        }),
        ghost: snap.ghost.map(|(x, y)| Position { x, y }),
        next: snap.next.into(),
        hold: snap.hold.map(PieceLetter::from),
        can_hold: snap.can_hold,
        last_event: last_event.map(LastEvent::from),
    }
}

/// Serialize one message as a single JSON line (no trailing newline).
pub fn to_json_line<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| anyhow!("protocol: serialize failed: {e}"))
}
