//! Deterministic rules module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete events only, one at a time
//! - State replaced wholesale on every transition, never shared
//! - Stable block order (row-major by key)
//! - No rendering or platform dependencies

pub mod machine;
pub mod scoring;
pub mod state;

pub use machine::{GameEvent, GameStateMachine};
pub use scoring::{evaluate_streak, hit_points, streak_threshold, StreakOutcome};
pub use state::{Block, BlockFrame, GameState};
