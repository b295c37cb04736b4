//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, when the viewport is wide enough:
//!
//! ```text
//!  NEON TETRIS     ┌──────────────────────┐   NEXT
//!  HOLD (C)        │                      │   ...
//!  ...             │       10 x 20        │   CONTROLS
//!  SCORE / LEVEL   │                      │   ...
//!  / LINES         └──────────────────────┘
//! ```
//!
//! Narrow viewports get the board alone.

use crate::core::{canonical_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, SessionStatus, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const LEFT_PANEL_W: u16 = 14;
const RIGHT_PANEL_W: u16 = 18;
const PANEL_GAP: u16 = 3;

const BACKDROP: Rgb = Rgb::new(2, 6, 23);
const WELL: Rgb = Rgb::new(15, 23, 42);
const FRAME: Rgb = Rgb::new(30, 41, 59);
const ACCENT: Rgb = Rgb::new(34, 211, 238);
const MUTED: Rgb = Rgb::new(100, 116, 139);
const TEXT: Rgb = Rgb::new(226, 232, 240);

const CONTROLS: [(&str, &str); 9] = [
    ("Move", "← →"),
    ("Rotate", "↑"),
    ("Soft Drop", "↓"),
    ("Hard Drop", "Space"),
    ("Hold", "C"),
    ("Pause", "P/Esc"),
    ("Start", "Enter"),
    ("Reset", "R"),
    ("Quit", "Q/^C"),
];

/// Neon colour for a piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(34, 211, 238),
        PieceKind::J => Rgb::new(59, 130, 246),
        PieceKind::L => Rgb::new(249, 115, 22),
        PieceKind::O => Rgb::new(250, 204, 21),
        PieceKind::S => Rgb::new(34, 197, 94),
        PieceKind::T => Rgb::new(168, 85, 247),
        PieceKind::Z => Rgb::new(239, 68, 68),
    }
}

/// One line of an overlay card.
enum OverlayLine<'a> {
    Text(&'a str, CellStyle),
    Labeled(&'a str, u32, CellStyle),
    Blank,
}

impl OverlayLine<'_> {
    fn width(&self) -> u16 {
        match self {
            OverlayLine::Text(s, _) => s.chars().count() as u16,
            OverlayLine::Labeled(s, n, _) => s.chars().count() as u16 + digit_count(*n),
            OverlayLine::Blank => 0,
        }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Board placement computed once per frame.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    panels: bool,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation-free once the framebuffer has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BACKDROP).cell(' '));

        let frame = self.layout(viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(MUTED, WELL),
        );
        draw_border(fb, frame, CellStyle::new(FRAME, BACKDROP).bold());

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match PieceKind::from_cell_id(snap.board[y as usize][x as usize]) {
                    Some(kind) => self.draw_block(fb, frame, x as i8, y as i8, kind),
                    None => self.fill_cell(
                        fb,
                        frame,
                        x as i8,
                        y as i8,
                        '·',
                        CellStyle::new(FRAME, WELL).dim(),
                    ),
                }
            }
        }

        if let Some(active) = snap.active {
            // Ghost only lands on empty cells.
            let ghost_style = CellStyle::new(piece_color(active.kind), WELL).dim();
            for (x, y) in snap.ghost_cells() {
                if self.is_empty_board_cell(snap, x, y) {
                    self.fill_cell(fb, frame, x, y, '░', ghost_style);
                }
            }

            if matches!(snap.status, SessionStatus::Playing | SessionStatus::Paused) {
                for (x, y) in active.cells() {
                    self.draw_block(fb, frame, x, y, active.kind);
                }
            }
        }

        if frame.panels {
            self.draw_left_panel(fb, snap, frame);
            self.draw_right_panel(fb, snap, frame);
        }

        match snap.status {
            SessionStatus::Playing => {}
            SessionStatus::Menu => self.draw_overlay(
                fb,
                frame,
                WELL,
                &[
                    OverlayLine::Text("NEON", CellStyle::new(ACCENT, WELL).bold()),
                    OverlayLine::Text("TETRIS", CellStyle::new(piece_color(PieceKind::T), WELL).bold()),
                    OverlayLine::Blank,
                    OverlayLine::Text("Press Enter", CellStyle::new(MUTED, WELL)),
                    OverlayLine::Text("to Start", CellStyle::new(MUTED, WELL)),
                ],
            ),
            SessionStatus::Paused => self.draw_overlay(
                fb,
                frame,
                WELL,
                &[
                    OverlayLine::Text("PAUSED", CellStyle::new(TEXT, WELL).bold()),
                    OverlayLine::Blank,
                    OverlayLine::Text("P to resume", CellStyle::new(MUTED, WELL)),
                ],
            ),
            SessionStatus::GameOver => {
                let bg = Rgb::new(127, 29, 29);
                self.draw_overlay(
                    fb,
                    frame,
                    bg,
                    &[
                        OverlayLine::Text("GAME OVER", CellStyle::new(TEXT, bg).bold()),
                        OverlayLine::Labeled("Score: ", snap.score, CellStyle::new(TEXT, bg)),
                        OverlayLine::Blank,
                        OverlayLine::Text("Enter: try again", CellStyle::new(TEXT, bg)),
                    ],
                )
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_w = LEFT_PANEL_W + PANEL_GAP + w + PANEL_GAP + RIGHT_PANEL_W;
        let panels = viewport.width >= total_w;

        let x = if panels {
            (viewport.width - total_w) / 2 + LEFT_PANEL_W + PANEL_GAP
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };

        Frame { x, y, w, h, panels }
    }

    fn is_empty_board_cell(&self, snap: &GameSnapshot, x: i8, y: i8) -> bool {
        x >= 0
            && y >= 0
            && (x as u8) < BOARD_WIDTH
            && (y as u8) < BOARD_HEIGHT
            && snap.board[y as usize][x as usize] == 0
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), WELL).bold();
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the 10x20 grid are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i8, y: i8, ch: char, style: CellStyle) {
        if x < 0 || y < 0 || x as u8 >= BOARD_WIDTH || y as u8 >= BOARD_HEIGHT {
            return;
        }
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_left_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let x = frame.x - PANEL_GAP - LEFT_PANEL_W;
        let label = CellStyle::new(MUTED, BACKDROP).bold();
        let value = CellStyle::new(TEXT, BACKDROP).bold();

        let mut y = frame.y;
        fb.put_char(x, y, '●', CellStyle::new(ACCENT, BACKDROP));
        fb.put_str(x + 2, y, "NEON TETRIS", value);
        y += 2;

        fb.put_str(x, y, "HOLD (C)", label);
        y += 1;
        if let Some(kind) = snap.hold {
            draw_mini_piece(fb, x, y, kind, !snap.can_hold);
        } else {
            fb.put_str(x, y, "-", CellStyle::new(MUTED, BACKDROP));
        }
        y += 5;

        for (name, v) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        }
    }

    fn draw_right_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let x = frame.x + frame.w + PANEL_GAP;
        let label = CellStyle::new(MUTED, BACKDROP).bold();

        let mut y = frame.y;
        fb.put_str(x, y, "NEXT", label);
        y += 1;
        draw_mini_piece(fb, x, y, snap.next, false);
        y += 6;

        fb.put_str(x, y, "CONTROLS", label);
        y += 1;
        let help = CellStyle::new(MUTED, BACKDROP);
        for (name, key) in CONTROLS {
            fb.put_str(x, y, name, help);
            let key_w = key.chars().count() as u16;
            fb.put_str(x + RIGHT_PANEL_W.saturating_sub(key_w), y, key, help);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, frame: Frame, bg: Rgb, lines: &[OverlayLine<'_>]) {
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(TEXT, bg),
        );

        let top = frame.y + frame.h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let y = top + i as u16;
            let x = frame.x + frame.w.saturating_sub(line.width()) / 2;
            match line {
                OverlayLine::Text(s, style) => {
                    fb.put_str(x, y, s, *style);
                }
                OverlayLine::Labeled(s, n, style) => {
                    let end = fb.put_str(x, y, s, *style);
                    fb.put_u32(end, y, *n, *style);
                }
                OverlayLine::Blank => {}
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h, .. } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Spawn-orientation preview, two columns per cell.
fn draw_mini_piece(fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
    let mut style = CellStyle::new(piece_color(kind), BACKDROP).bold();
    if dim {
        style = style.dim();
    }
    for (dx, dy) in canonical_shape(kind).cells() {
        fb.fill_rect(x + dx as u16 * 2, y + dy as u16, 2, 1, '█', style);
    }
}

fn digit_count(n: u32) -> u16 {
    n.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
