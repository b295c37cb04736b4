use neon_tetris::core::{GameState, SequenceSource};
use neon_tetris::term::{piece_color, AnchorY, GameView, Viewport};
use neon_tetris::types::{GameAction, PieceKind, SessionStatus};

fn playing_snapshot() -> neon_tetris::core::GameSnapshot {
    let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::T));
    state.apply_action(GameAction::Start);
    state.snapshot()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = playing_snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1 the board is 20x20, plus border => 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '╭');
    assert_eq!(fb.get(21, 0).unwrap().ch, '╮');
    assert_eq!(fb.get(0, 21).unwrap().ch, '╰');
    assert_eq!(fb.get(21, 21).unwrap().ch, '╯');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = playing_snapshot();
    snap.board[19][0] = PieceKind::I.cell_id();
    snap.active = None;
    snap.ghost = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    let cell = fb.get(x0, y0).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, piece_color(PieceKind::I));
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_and_ghost() {
    let snap = playing_snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 22));

    // T at anchor (3, 0): top row covers board columns 3..=5.
    let px = 1 + 3 * 2;
    assert_eq!(fb.get(px, 1).unwrap().ch, '█');
    assert_eq!(fb.get(px, 1).unwrap().style.fg, piece_color(PieceKind::T));

    // Ghost rests on the floor: its stem is on row 19.
    let (gx, gy) = snap.ghost.unwrap();
    assert_eq!(gy, 18);
    let stem_x = 1 + (gx as u16 + 1) * 2;
    assert_eq!(fb.get(stem_x, 1 + 19).unwrap().ch, '░');
}

#[test]
fn term_view_paused_overlay_hides_ghost() {
    let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::T));
    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::Pause);
    let snap = state.snapshot();
    assert!(snap.ghost.is_none());

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(fb.contains_text("PAUSED"));
}

#[test]
fn term_view_game_over_shows_final_score() {
    let mut snap = playing_snapshot();
    snap.status = SessionStatus::GameOver;
    snap.ghost = None;
    snap.score = 4321;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("Score: 4321"));
}

#[test]
fn term_view_side_panels_show_stats_hold_and_next() {
    let mut state = GameState::with_source(SequenceSource::repeat(PieceKind::T));
    state.apply_action(GameAction::Start);
    state.apply_action(GameAction::Hold);
    let snap = state.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    for label in ["NEON TETRIS", "HOLD (C)", "SCORE", "LEVEL", "LINES", "NEXT", "CONTROLS"] {
        assert!(fb.contains_text(label), "missing {label}");
    }
}

#[test]
fn term_view_render_into_reuses_buffer() {
    let snap = playing_snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(80, 24));
    let before = fb.clone();

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!(fb, before);

    view.render_into(&snap, Viewport::new(30, 24), &mut fb);
    assert_eq!(fb.width(), 30);
}

#[test]
fn term_view_controls_list_every_mapped_key() {
    let snap = playing_snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    for label in ["Start", "Enter", "Reset", "P/Esc", "Q/^C"] {
        assert!(fb.contains_text(label), "missing {label}");
    }
}
