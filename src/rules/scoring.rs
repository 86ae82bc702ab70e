//! Streak scoring
//!
//! Per-block points scale with the bonus multiplier; the multiplier itself
//! advances when a sustained hit streak crosses an accelerating threshold.
//! Each advance raises the bar relative to both the new baseline streak and
//! the now-higher multiplier, so one long streak cannot run the multiplier
//! away.

use crate::consts::STREAK_BONUS_FLOOR;

/// Result of evaluating the streak rule after a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreakOutcome {
    /// Multiplier after evaluation
    pub bonus_multiplier: u32,
    /// Baseline streak mark after evaluation
    pub last_streak_mark: u32,
    /// Whether this hit advanced the multiplier
    pub advanced: bool,
}

/// Points for a single block hit. The multiplier is always sampled before
/// the same hit's streak evaluation.
pub fn hit_points(block_score: u64, bonus_multiplier: u32) -> u64 {
    block_score.saturating_mul(bonus_multiplier as u64)
}

/// Streak length required for the next multiplier advance:
/// `round((mark + 4) / 2) * multiplier`, rounding half away from zero.
/// For non-negative integers that is `(mark + 5) / 2` in integer division.
pub fn streak_threshold(last_streak_mark: u32, bonus_multiplier: u32) -> u32 {
    ((last_streak_mark + STREAK_BONUS_FLOOR + 1) / 2).saturating_mul(bonus_multiplier)
}

/// Evaluate the streak rule for a hit that brought the streak to
/// `current_streak`. Advances the multiplier when the streak has reached
/// the floor and crossed the threshold.
pub fn evaluate_streak(
    current_streak: u32,
    last_streak_mark: u32,
    bonus_multiplier: u32,
) -> StreakOutcome {
    let eligible = current_streak >= STREAK_BONUS_FLOOR;
    if eligible && streak_threshold(last_streak_mark, bonus_multiplier) <= current_streak {
        StreakOutcome {
            bonus_multiplier: bonus_multiplier + 1,
            last_streak_mark: current_streak,
            advanced: true,
        }
    } else {
        StreakOutcome {
            bonus_multiplier,
            last_streak_mark,
            advanced: false,
        }
    }
}
