//! Rules configuration
//!
//! Tunable knobs for the state machine: lives, per-block score, grid
//! geometry, and what a cleared board does to the run. The host owns
//! storage; JSON round-trip helpers are provided for persistence.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What happens when the last block is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClearPolicy {
    /// Rebuild the grid and zero lives/score/bonus back to their defaults
    #[default]
    FullReset,
    /// Rebuild the grid but keep lives/score/bonus (endless mode)
    KeepProgress,
}

impl ClearPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClearPolicy::FullReset => "FullReset",
            ClearPolicy::KeepProgress => "KeepProgress",
        }
    }
}

/// Game rules configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Lives at the start of a run
    pub initial_lives: u32,
    /// Points awarded per block before the bonus multiplier
    pub block_score: u64,
    /// Block grid rows
    pub rows: u32,
    /// Block grid columns
    pub columns: u32,
    /// Horizontal spacing between columns (px)
    pub column_width: f32,
    /// Vertical spacing between rows (px)
    pub row_spacing: f32,
    /// Board-cleared behavior
    pub clear_policy: ClearPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_lives: INITIAL_LIVES,
            block_score: BLOCK_SCORE,
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            column_width: COLUMN_WIDTH,
            row_spacing: ROW_SPACING,
            clear_policy: ClearPolicy::FullReset,
        }
    }
}

impl GameConfig {
    /// Endless-mode preset: cleared boards refill without ending the run
    pub fn endless() -> Self {
        Self {
            clear_policy: ClearPolicy::KeepProgress,
            ..Self::default()
        }
    }

    /// Total blocks in the canonical grid
    pub fn block_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Serialize for host-side persistence
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Restore from host-side persistence
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
