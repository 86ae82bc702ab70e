//! Smashout - rules core for a brick-breaking arcade game
//!
//! Core modules:
//! - `rules`: Deterministic game rules (state machine, scoring)
//! - `config`: Data-driven rules configuration
//! - `driver`: Engine-adapter glue (launch gating, per-frame polling, HUD)
//!
//! The crate owns no rendering, physics integration, or input handling.
//! A host engine detects physical events (ball out of bounds, ball/block
//! collisions, launch input), feeds them through [`driver::GameDriver`],
//! and reads the resulting [`rules::GameState`] snapshot each frame to
//! place sprites and draw the HUD.

pub mod config;
pub mod driver;
pub mod rules;

pub use config::{ClearPolicy, GameConfig};
pub use driver::{GameDriver, HudSnapshot, ResetCause};
pub use rules::{Block, BlockFrame, GameEvent, GameState, GameStateMachine};

/// Game configuration constants
pub mod consts {
    /// Block grid defaults
    pub const GRID_ROWS: u32 = 6;
    pub const GRID_COLUMNS: u32 = 10;
    /// Horizontal distance between block columns (block sprite width, px)
    pub const COLUMN_WIDTH: f32 = 64.0;
    /// Vertical distance between block rows (px)
    pub const ROW_SPACING: f32 = 32.0;

    /// Scoring defaults
    pub const INITIAL_LIVES: u32 = 3;
    pub const BLOCK_SCORE: u64 = 50;
    /// Minimum streak length before the bonus multiplier can advance
    pub const STREAK_BONUS_FLOOR: u32 = 4;

    /// Engine-adapter defaults. The grid is laid out in local coordinates;
    /// the host offsets it into the world by this origin.
    pub const GRID_ORIGIN_X: f32 = 116.0;
    pub const GRID_ORIGIN_Y: f32 = 200.0;
    /// Paddle start pose
    pub const PADDLE_START_X: f32 = 400.0;
    pub const PADDLE_START_Y: f32 = 700.0;
    /// Vertical gap between paddle center and a ball snapped to it
    pub const BALL_PADDLE_GAP: f32 = 48.0;
    /// Launch velocity applied by the host when a launch is accepted
    pub const BALL_LAUNCH_VX: f32 = -75.0;
    pub const BALL_LAUNCH_VY: f32 = -600.0;
    /// A ball below this world y has left the play area
    pub const WORLD_BOTTOM: f32 = 800.0;
}
