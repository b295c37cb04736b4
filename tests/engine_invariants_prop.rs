//! Property/invariant tests for the game engine.
//!
//! Random command sequences from random seeds must never break:
//! - no full row survives a command (every lock sweeps)
//! - score and lines only grow within an episode
//! - level always equals lines / 10 + 1
//! - the active piece never overlaps a locked cell while playing
//! - rejected commands leave the state untouched

use proptest::prelude::*;

use neon_tetris::core::{collides, GameState};
use neon_tetris::types::{GameAction, SessionStatus, BOARD_HEIGHT};

const ACTIONS: [GameAction; 10] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::Rotate,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::Hold,
    GameAction::Tick,
    GameAction::TogglePause,
    GameAction::Start,
    GameAction::Tick,
];

fn assert_invariants(state: &GameState) {
    let board = state.board();
    for y in 0..BOARD_HEIGHT as usize {
        assert!(!board.is_row_full(y), "row {} left full", y);
    }
    assert_eq!(state.level(), state.lines() / 10 + 1);

    if state.status() == SessionStatus::Playing {
        let active = state.active();
        assert!(!collides(board, &active.matrix(), active.position(), (0, 0)));
    }
}

proptest! {
    #[test]
    fn random_rollouts_keep_invariants(
        seed in any::<u32>(),
        picks in prop::collection::vec(0usize..ACTIONS.len(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.apply_action(GameAction::Start);

        let mut episode = state.episode_id();
        let mut score = state.score();
        let mut lines = state.lines();

        for pick in picks {
            let action = ACTIONS[pick];
            let before = state.snapshot();
            let accepted = state.apply_action(action);

            if !accepted {
                prop_assert_eq!(state.snapshot(), before);
            }
            if state.episode_id() == episode {
                prop_assert!(state.score() >= score);
                prop_assert!(state.lines() >= lines);
            }
            assert_invariants(&state);

            episode = state.episode_id();
            score = state.score();
            lines = state.lines();
        }
    }

    #[test]
    fn hard_drop_lands_on_the_ghost(seed in any::<u32>(), shifts in -5i8..5, turns in 0u8..4) {
        let mut state = GameState::new(seed);
        state.apply_action(GameAction::Start);
        for _ in 0..turns {
            state.apply_action(GameAction::Rotate);
        }
        let dir = if shifts < 0 { GameAction::MoveLeft } else { GameAction::MoveRight };
        for _ in 0..shifts.unsigned_abs() {
            state.apply_action(dir);
        }

        let active = state.active();
        let (gx, gy) = state.ghost_position().unwrap();
        prop_assert_eq!(gx, active.x);
        prop_assert!(gy >= active.y);

        state.apply_action(GameAction::HardDrop);
        prop_assert_eq!(state.score(), (gy - active.y) as u32 * 2);
        for (dx, dy) in active.matrix().cells() {
            prop_assert!(state.board().is_occupied(gx + dx, gy + dy));
        }
    }
}
