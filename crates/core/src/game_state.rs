//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, piece geometry,
//! collision, piece sources, and scoring. It owns the active piece, the hold
//! slot, the next-piece lookahead, and the session lifecycle.
//!
//! Every command is synchronous and atomic: by the time [`GameState::apply_action`]
//! returns, any lock, sweep, score update and respawn it triggered has completed.
//! Rejected commands leave the state untouched and return `false`.

use crate::collision::collides;
use crate::pieces::{current_matrix, kick_offsets, ShapeMatrix, Turn};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{calculate_drop_score, calculate_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column (left edge of the shape matrix)
    pub x: i8,
    /// Anchor row (top edge of the shape matrix)
    pub y: i8,
    /// Set when the piece could not fall any further and is being locked.
    pub collided: bool,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
            collided: false,
        }
    }

    /// Shape matrix for the current rotation
    pub fn matrix(&self) -> ShapeMatrix {
        current_matrix(self.kind, self.rotation)
    }

    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Whether the piece would collide if shifted by (dx, dy)
    pub fn collides_at(&self, board: &Board, dx: i8, dy: i8) -> bool {
        collides(board, &self.matrix(), self.position(), (dx, dy))
    }

    /// How many rows the piece can fall before it rests on something
    pub fn drop_distance(&self, board: &Board) -> u32 {
        let matrix = self.matrix();
        let mut distance: i8 = 0;
        while !collides(board, &matrix, self.position(), (0, distance + 1)) {
            distance += 1;
        }
        distance as u32
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    hold: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    level: u32,
    lines: u32,
    status: SessionStatus,
    /// Monotonic episode id (increments on every start/reset).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    source: S,
}

impl GameState<UniformSource> {
    /// Create a new game in the menu, drawing pieces uniformly from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(UniformSource::new(seed))
    }
}

impl Default for GameState<UniformSource> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game in the menu with an injected piece source
    pub fn with_source(mut source: S) -> Self {
        let active = Tetromino::new(source.next_piece());
        let next = source.next_piece();

        Self {
            board: Board::new(),
            active,
            next,
            hold: None,
            can_hold: true,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            status: SessionStatus::Menu,
            episode_id: 0,
            last_event: None,
            source,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == SessionStatus::Playing
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (tests, tooling).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    ///
    /// Returns whether the action was accepted (changed the state).
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_player(-1),
            GameAction::MoveRight => self.move_player(1),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop | GameAction::Tick => self.drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.set_status(SessionStatus::Paused),
            GameAction::Resume => self.set_status(SessionStatus::Playing),
            GameAction::TogglePause => match self.status {
                SessionStatus::Playing => self.set_status(SessionStatus::Paused),
                SessionStatus::Paused => self.set_status(SessionStatus::Playing),
                _ => false,
            },
            GameAction::Start => self.start(),
            GameAction::Reset => {
                self.reset_game();
                true
            }
        }
    }

    /// Reducer form of [`GameState::apply_action`]: consume a state, return the next one.
    pub fn reduce(mut self, action: GameAction) -> Self {
        self.apply_action(action);
        self
    }

    /// Start a game from the menu or the game-over screen
    pub fn start(&mut self) -> bool {
        match self.status {
            SessionStatus::Menu | SessionStatus::GameOver => {
                self.reset_game();
                true
            }
            SessionStatus::Playing | SessionStatus::Paused => false,
        }
    }

    /// Full reset into a fresh game, from any state
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = START_LEVEL;
        self.lines = 0;
        self.hold = None;
        self.can_hold = true;
        self.last_event = None;
        self.active = Tetromino::new(self.source.next_piece());
        self.next = self.source.next_piece();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.status = SessionStatus::Playing;
    }

    /// Request a status change from the host
    ///
    /// Allowed: Playing → Paused, Paused → Playing, and Paused/GameOver → Menu.
    /// Starting a game goes through [`GameState::start`]; GameOver is only ever
    /// reached through play.
    pub fn set_status(&mut self, status: SessionStatus) -> bool {
        let allowed = matches!(
            (self.status, status),
            (SessionStatus::Playing, SessionStatus::Paused)
                | (SessionStatus::Paused, SessionStatus::Playing)
                | (SessionStatus::Paused, SessionStatus::Menu)
                | (SessionStatus::GameOver, SessionStatus::Menu)
        );
        if allowed {
            self.status = status;
        }
        allowed
    }

    /// Shift the active piece one column left (`-1`) or right (`+1`)
    pub fn move_player(&mut self, dir: i8) -> bool {
        if !self.is_playing() || dir == 0 {
            return false;
        }
        let dir = dir.signum();
        if self.active.collides_at(&self.board, dir, 0) {
            return false;
        }
        self.active.x += dir;
        self.active.collided = false;
        true
    }

    /// Rotate the active piece clockwise, nudging it sideways if the turned
    /// shape collides. Offsets are tried in the order 0, +1, -1, ... ±5.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let rotated = self.active.matrix().rotate(Turn::Clockwise);
        let anchor = self.active.position();
        let Some(kick) = kick_offsets().find(|&dx| !collides(&self.board, &rotated, anchor, (dx, 0)))
        else {
            return false;
        };

        self.active.rotation = self.active.rotation.rotate_cw();
        self.active.x += kick;
        true
    }

    /// Soft drop (also the gravity tick)
    ///
    /// Moves the piece down one row. When blocked, a piece still on its spawn
    /// row ends the game; otherwise it locks in place.
    pub fn drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        if !self.active.collides_at(&self.board, 0, 1) {
            self.active.y += 1;
            self.active.collided = false;
            return true;
        }

        if self.active.y < 1 {
            self.status = SessionStatus::GameOver;
            return true;
        }

        self.active.collided = true;
        self.lock_piece(0);
        true
    }

    /// Hard drop the active piece to the bottom and lock it
    ///
    /// Awards `HARD_DROP_POINT` per row travelled.
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let distance = self.active.drop_distance(&self.board);
        self.active.y += distance as i8;
        self.active.collided = true;
        self.score = self.score.saturating_add(calculate_drop_score(distance));
        self.lock_piece(distance);
        true
    }

    /// Swap active piece with hold piece (once per lock)
    pub fn hold(&mut self) -> bool {
        if !self.is_playing() || !self.can_hold {
            return false;
        }

        let current = self.active.kind;
        let incoming = match self.hold {
            Some(held) => held,
            None => {
                let next = self.next;
                self.next = self.source.next_piece();
                next
            }
        };

        self.hold = Some(current);
        self.can_hold = false;
        self.spawn(incoming);
        true
    }

    /// Where the active piece would land if hard-dropped now
    ///
    /// `None` unless a game is being played. Never mutates anything.
    pub fn ghost_position(&self) -> Option<(i8, i8)> {
        if !self.is_playing() {
            return None;
        }
        let distance = self.active.drop_distance(&self.board) as i8;
        Some((self.active.x, self.active.y + distance))
    }

    /// Replace the active piece; a blocked spawn ends the game without
    /// writing anything to the board.
    fn spawn(&mut self, kind: PieceKind) -> bool {
        self.active = Tetromino::new(kind);
        if self.active.collides_at(&self.board, 0, 0) {
            self.status = SessionStatus::GameOver;
            return false;
        }
        true
    }

    /// Merge the active piece, sweep full rows, score, and respawn
    fn lock_piece(&mut self, drop_distance: u32) {
        let active = self.active;
        self.board
            .merge_piece(active.matrix().cells(), active.x, active.y, active.kind);

        let cleared = self.board.clear_full_rows().len();

        let mut line_clear_score = 0;
        let mut level_up = false;
        if cleared > 0 {
            let result = calculate_score(cleared, self.level, self.lines);
            line_clear_score = result.line_clear_score;
            level_up = result.level > self.level;
            self.score = self.score.saturating_add(result.line_clear_score);
            self.lines = result.total_lines;
            self.level = result.level;
        }

        let next = self.next;
        self.next = self.source.next_piece();
        self.can_hold = true;
        let spawned = self.spawn(next);

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared as u32,
            line_clear_score,
            drop_distance,
            level_up,
            game_over: !spawned,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = match self.status {
            SessionStatus::Menu => None,
            _ => Some(ActiveSnapshot::from(self.active)),
        };
        out.ghost = self.ghost_position();
        out.hold = self.hold;
        out.next = self.next;
        out.can_hold = self.can_hold;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
