//! Game state machine
//!
//! The reducer at the heart of the game: one pure, total transition
//! function over discrete events. Stale or duplicate inputs (a hit on an
//! already-removed key, a redundant loss signal) degrade to no-ops rather
//! than errors; raising mid-frame is never an option for the host loop.

use glam::Vec2;

use super::scoring::{evaluate_streak, hit_points};
use super::state::{Block, BlockFrame, GameState};
use crate::config::{ClearPolicy, GameConfig};

/// Discrete event fed by the engine adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player launched the ball (adapter gates on `ball_active == false`)
    Launch,
    /// Ball left the bottom of the play area. The adapter may raise this on
    /// consecutive evaluation cycles for the same loss; see [`GameStateMachine::apply`].
    BallLost,
    /// Ball struck the block with this key
    BlockHit { key: u32 },
    /// Adapter observed an empty board
    BoardCleared,
}

/// Owns the rules configuration and produces state transitions.
///
/// The machine holds no game state itself; the current [`GameState`]
/// snapshot is owned by the caller and replaced wholesale on every
/// [`apply`](Self::apply).
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    config: GameConfig,
}

impl GameStateMachine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Canonical starting state: the full block grid, ball on the paddle,
    /// counters at their defaults.
    pub fn initial_state(&self) -> GameState {
        GameState {
            ball_active: false,
            lives: self.config.initial_lives,
            score: 0,
            bonus_multiplier: 1,
            current_streak: 0,
            last_streak_mark: 0,
            blocks: self.canonical_blocks(),
        }
    }

    /// The fixed starting grid, row-major. Keys are the row-major linear
    /// index, so they are unique and stable across resets.
    fn canonical_blocks(&self) -> Vec<Block> {
        let columns = self.config.columns;
        (0..self.config.block_count())
            .map(|key| {
                let row = key / columns;
                let col = key % columns;
                Block {
                    key,
                    pos: Vec2::new(
                        col as f32 * self.config.column_width,
                        row as f32 * self.config.row_spacing,
                    ),
                    frame: BlockFrame::for_row(row),
                }
            })
            .collect()
    }

    /// Advance the state by one event. Pure and total: every input maps to
    /// a successor state, invalid inputs map to the input state unchanged.
    pub fn apply(&self, state: &GameState, event: GameEvent) -> GameState {
        match event {
            GameEvent::Launch => {
                let mut next = state.clone();
                next.ball_active = true;
                next
            }

            // Ball loss is two-phase, latched on `ball_active`: the first
            // signal only deactivates the ball (the host has not finished
            // repositioning it yet and may signal again next cycle); the
            // second signal takes the life and resets the streak state.
            GameEvent::BallLost => {
                let mut next = state.clone();
                if state.ball_active {
                    next.ball_active = false;
                } else {
                    match state.lives.checked_sub(1) {
                        Some(lives) => {
                            next.lives = lives;
                            next.bonus_multiplier = 1;
                            next.current_streak = 0;
                            next.last_streak_mark = 0;
                        }
                        // Lives can never go negative; a loss past zero
                        // starts the run over.
                        None => return self.initial_state(),
                    }
                }
                next
            }

            GameEvent::BlockHit { key } => {
                if !state.contains_block(key) {
                    // Stale hit for an already-removed block; scoring it
                    // again would double-count.
                    return state.clone();
                }
                let mut next = state.clone();
                next.blocks.retain(|b| b.key != key);
                next.current_streak = state.current_streak + 1;
                // Points use the multiplier as it stood before this hit's
                // streak evaluation.
                next.score = state
                    .score
                    .saturating_add(hit_points(self.config.block_score, state.bonus_multiplier));
                let outcome = evaluate_streak(
                    next.current_streak,
                    state.last_streak_mark,
                    state.bonus_multiplier,
                );
                next.bonus_multiplier = outcome.bonus_multiplier;
                next.last_streak_mark = outcome.last_streak_mark;
                next
            }

            GameEvent::BoardCleared => match self.config.clear_policy {
                ClearPolicy::FullReset => self.initial_state(),
                ClearPolicy::KeepProgress => {
                    let mut next = state.clone();
                    next.ball_active = false;
                    next.blocks = self.canonical_blocks();
                    next
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{COLUMN_WIDTH, ROW_SPACING};

    fn machine() -> GameStateMachine {
        GameStateMachine::new(GameConfig::default())
    }

    #[test]
    fn test_initial_layout() {
        let state = machine().initial_state();
        assert!(!state.ball_active);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.bonus_multiplier, 1);
        assert_eq!(state.blocks.len(), 60);

        // Keys are the row-major indices 0..60, each exactly once
        let mut keys: Vec<u32> = state.blocks.iter().map(|b| b.key).collect();
        keys.sort_unstable();
        assert_eq!(keys, (0..60).collect::<Vec<_>>());

        // Row 0 sits at y=0 with the first palette frame; row 1 below it
        let b0 = state.block(0).unwrap();
        assert_eq!(b0.pos, Vec2::new(0.0, 0.0));
        assert_eq!(b0.frame, BlockFrame::Blue);
        let b13 = state.block(13).unwrap();
        assert_eq!(b13.pos, Vec2::new(3.0 * COLUMN_WIDTH, ROW_SPACING));
        assert_eq!(b13.frame, BlockFrame::Red);
        // Every block in a row shares that row's frame
        for b in &state.blocks {
            assert_eq!(b.frame, BlockFrame::for_row(b.key / 10));
        }
    }

    #[test]
    fn test_launch_activates_ball() {
        let m = machine();
        let state = m.apply(&m.initial_state(), GameEvent::Launch);
        assert!(state.ball_active);
        assert_eq!(state.blocks.len(), 60);
    }

    #[test]
    fn test_ball_loss_is_two_phase() {
        let m = machine();
        let launched = m.apply(&m.initial_state(), GameEvent::Launch);

        // First signal only drops the latch
        let first = m.apply(&launched, GameEvent::BallLost);
        assert!(!first.ball_active);
        assert_eq!(first.lives, 3);

        // Second signal takes the life and resets streak state
        let second = m.apply(&first, GameEvent::BallLost);
        assert_eq!(second.lives, 2);
        assert_eq!(second.bonus_multiplier, 1);
        assert_eq!(second.current_streak, 0);
        assert_eq!(second.last_streak_mark, 0);
    }

    #[test]
    fn test_ball_loss_resets_streak_but_not_score() {
        let m = machine();
        let mut state = m.apply(&m.initial_state(), GameEvent::Launch);
        for key in 0..5 {
            state = m.apply(&state, GameEvent::BlockHit { key });
        }
        assert_eq!(state.bonus_multiplier, 2);
        let score = state.score;

        state = m.apply(&state, GameEvent::BallLost);
        state = m.apply(&state, GameEvent::BallLost);
        assert_eq!(state.score, score);
        assert_eq!(state.bonus_multiplier, 1);
        assert_eq!(state.current_streak, 0);
    }

    #[test]
    fn test_loss_past_zero_lives_restarts_run() {
        let m = machine();
        let mut state = m.initial_state();
        state.lives = 0;
        state.score = 999;
        state.ball_active = false;

        let next = m.apply(&state, GameEvent::BallLost);
        assert_eq!(next, m.initial_state());
    }

    #[test]
    fn test_hit_removes_exactly_one_block() {
        let m = machine();
        let state = m.initial_state();
        let next = m.apply(&state, GameEvent::BlockHit { key: 17 });

        assert_eq!(next.blocks.len(), 59);
        assert!(!next.contains_block(17));
        // All other blocks untouched
        for b in &state.blocks {
            if b.key != 17 {
                assert_eq!(next.block(b.key), Some(b));
            }
        }
    }

    #[test]
    fn test_hit_on_unknown_key_is_a_no_op() {
        let m = machine();
        let state = m.initial_state();
        assert_eq!(m.apply(&state, GameEvent::BlockHit { key: 999 }), state);

        // A duplicate hit must not double-score
        let once = m.apply(&state, GameEvent::BlockHit { key: 5 });
        let twice = m.apply(&once, GameEvent::BlockHit { key: 5 });
        assert_eq!(twice, once);
    }

    #[test]
    fn test_six_hit_score_and_bonus_sequence() {
        let m = machine();
        let mut state = m.apply(&m.initial_state(), GameEvent::Launch);

        let expected = [(50, 1), (100, 1), (150, 1), (200, 2), (300, 2), (400, 2)];
        for (key, &(score, bonus)) in expected.iter().enumerate() {
            state = m.apply(&state, GameEvent::BlockHit { key: key as u32 });
            assert_eq!((state.score, state.bonus_multiplier), (score, bonus));
        }
        assert_eq!(state.current_streak, 6);
        assert_eq!(state.last_streak_mark, 4);
    }

    #[test]
    fn test_board_cleared_full_reset() {
        let m = machine();
        let mut state = m.apply(&m.initial_state(), GameEvent::Launch);
        for key in 0..60 {
            state = m.apply(&state, GameEvent::BlockHit { key });
        }
        assert!(state.board_cleared());
        assert!(state.score > 0);

        let reset = m.apply(&state, GameEvent::BoardCleared);
        assert_eq!(reset, m.initial_state());
    }

    #[test]
    fn test_board_cleared_keep_progress() {
        let m = GameStateMachine::new(GameConfig::endless());
        let mut state = m.apply(&m.initial_state(), GameEvent::Launch);
        for key in 0..60 {
            state = m.apply(&state, GameEvent::BlockHit { key });
        }
        let score = state.score;
        let bonus = state.bonus_multiplier;

        let next = m.apply(&state, GameEvent::BoardCleared);
        assert_eq!(next.blocks, m.initial_state().blocks);
        assert!(!next.ball_active);
        assert_eq!(next.score, score);
        assert_eq!(next.bonus_multiplier, bonus);
        assert_eq!(next.lives, 3);
    }

    #[test]
    fn test_custom_grid_geometry() {
        let config = GameConfig {
            rows: 2,
            columns: 3,
            column_width: 10.0,
            row_spacing: 5.0,
            ..GameConfig::default()
        };
        let state = GameStateMachine::new(config).initial_state();
        assert_eq!(state.blocks.len(), 6);
        let last = state.block(5).unwrap();
        assert_eq!(last.pos, Vec2::new(20.0, 5.0));
        assert_eq!(last.frame, BlockFrame::Red);
    }
}
