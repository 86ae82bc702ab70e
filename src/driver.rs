//! Engine-adapter glue
//!
//! The host engine detects physical events and calls these hooks; the
//! driver gates them, forwards them to the state machine, and keeps the
//! current snapshot for the host to render from. The rules core itself is
//! silent; transition logging happens here.

use log::{debug, info};

use crate::config::GameConfig;
use crate::rules::{GameEvent, GameState, GameStateMachine};

/// Why a full reset happened, so the host can re-pose ball and paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// Every block was destroyed
    BoardCleared,
    /// The last life was spent
    LivesExhausted,
}

/// HUD fields the host draws as text each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub lives: u32,
    pub score: u64,
    pub bonus_multiplier: u32,
    pub current_streak: u32,
}

impl HudSnapshot {
    pub fn lives_text(&self) -> String {
        format!("LIVES: {}", self.lives)
    }

    pub fn score_text(&self) -> String {
        format!("SCORE: {}", self.score)
    }

    pub fn bonus_text(&self) -> String {
        format!("BONUS: x{}", self.bonus_multiplier)
    }

    pub fn streak_text(&self) -> String {
        format!("STREAK: {}", self.current_streak)
    }
}

/// Drives a [`GameStateMachine`] from host-engine callbacks.
///
/// Owns the machine and the current state snapshot. All hooks are meant to
/// be called from the host's single update thread; events are processed to
/// completion before the hook returns.
#[derive(Debug, Clone)]
pub struct GameDriver {
    machine: GameStateMachine,
    state: GameState,
}

impl GameDriver {
    pub fn new(config: GameConfig) -> Self {
        let machine = GameStateMachine::new(config);
        let state = machine.initial_state();
        Self { machine, state }
    }

    /// Current snapshot, read by the host each frame for sprite placement
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.machine.config()
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            lives: self.state.lives,
            score: self.state.score,
            bonus_multiplier: self.state.bonus_multiplier,
            current_streak: self.state.current_streak,
        }
    }

    /// Pointer/button-press hook. Forwards `Launch` only while the ball is
    /// waiting on the paddle; returns whether a launch happened so the
    /// host can apply the launch velocity.
    pub fn on_pointer_down(&mut self) -> bool {
        if self.state.ball_active {
            return false;
        }
        debug!("launch");
        self.state = self.machine.apply(&self.state, GameEvent::Launch);
        true
    }

    /// Ball-past-bottom-bound hook. The host may call this on consecutive
    /// evaluation cycles for one loss; the core's two-phase latch absorbs
    /// the duplicate.
    pub fn on_ball_exit(&mut self) {
        let was_active = self.state.ball_active;
        self.state = self.machine.apply(&self.state, GameEvent::BallLost);
        if was_active {
            debug!("ball lost, lives {}", self.state.lives);
        } else {
            debug!("life spent, lives {}", self.state.lives);
        }
    }

    /// Ball/block-collision hook. Returns whether the block was actually
    /// removed; the host destroys the sprite only then.
    pub fn on_block_collision(&mut self, key: u32) -> bool {
        if !self.state.contains_block(key) {
            debug!("stale hit on key {key}");
            return false;
        }
        self.state = self.machine.apply(&self.state, GameEvent::BlockHit { key });
        debug!(
            "block {key} destroyed, score {} bonus x{} streak {}",
            self.state.score, self.state.bonus_multiplier, self.state.current_streak
        );
        true
    }

    /// Per-frame hook. Polls for the two run-ending conditions: an empty
    /// board (win) and spent lives (game over). Returns the cause when a
    /// reset happened so the host can re-pose ball and paddle.
    pub fn on_frame(&mut self) -> Option<ResetCause> {
        if self.state.board_cleared() {
            info!("board cleared, score {}", self.state.score);
            self.state = self.machine.apply(&self.state, GameEvent::BoardCleared);
            return Some(ResetCause::BoardCleared);
        }
        if self.state.lives == 0 {
            info!("out of lives, final score {}", self.state.score);
            self.state = self.machine.initial_state();
            return Some(ResetCause::LivesExhausted);
        }
        None
    }
}
