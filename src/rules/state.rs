//! Game state and block types
//!
//! The whole mutable game state lives in one serializable aggregate that
//! the state machine replaces wholesale on every transition.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Sprite frame for a block, one per grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockFrame {
    Blue,
    Red,
    Green,
    Yellow,
    Silver,
    Purple,
}

/// Row palette, top row first
const ROW_FRAMES: [BlockFrame; 6] = [
    BlockFrame::Blue,
    BlockFrame::Red,
    BlockFrame::Green,
    BlockFrame::Yellow,
    BlockFrame::Silver,
    BlockFrame::Purple,
];

impl BlockFrame {
    /// Frame used by every block in the given row. Rows past the palette
    /// wrap around so oversized grids stay well-defined.
    pub fn for_row(row: u32) -> Self {
        ROW_FRAMES[(row as usize) % ROW_FRAMES.len()]
    }

    /// Atlas frame name used by the host's sprite sheet
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockFrame::Blue => "blue1",
            BlockFrame::Red => "red1",
            BlockFrame::Green => "green1",
            BlockFrame::Yellow => "yellow1",
            BlockFrame::Silver => "silver1",
            BlockFrame::Purple => "purple1",
        }
    }
}

/// A destructible block
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique identity for the block's entire lifetime; once removed the
    /// key never reappears outside a grid reset
    pub key: u32,
    /// Grid-local position (the host offsets into world space)
    pub pos: Vec2,
    /// Sprite frame, shared by the block's row
    pub frame: BlockFrame,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// True once the ball has been launched and not yet lost. Doubles as
    /// the debounce latch for the two-phase ball-loss contract.
    pub ball_active: bool,
    /// Remaining attempts
    pub lives: u32,
    /// Cumulative points
    pub score: u64,
    /// Per-block score multiplier, >= 1, reset on ball loss
    pub bonus_multiplier: u32,
    /// Consecutive hits since the last bonus advance or ball loss
    pub current_streak: u32,
    /// Streak length at the moment of the last bonus advance; baseline
    /// for the next advance threshold
    pub last_streak_mark: u32,
    /// Remaining blocks, row-major by key
    pub blocks: Vec<Block>,
}

impl GameState {
    /// Look up a block by key
    pub fn block(&self, key: u32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.key == key)
    }

    pub fn contains_block(&self, key: u32) -> bool {
        self.block(key).is_some()
    }

    /// True when every block has been destroyed
    pub fn board_cleared(&self) -> bool {
        self.blocks.is_empty()
    }
}
