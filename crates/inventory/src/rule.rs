//! Per-day quality rules and the quality bounds.

use serde::{Deserialize, Serialize};

/// Lowest quality a non-legendary item may hold after an update.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item may hold after an update.
pub const MAX_QUALITY: i32 = 50;

/// Clamp `quality` into `[lower, upper]` inclusive.
///
/// Every quality mutation path ends here; no rule clamps on its own.
pub fn clamp_quality(quality: i32, lower: i32, upper: i32) -> i32 {
    quality.max(lower).min(upper)
}

/// A single day's quality change for a non-legendary item.
///
/// Rules read `sell_in` as it stood at the start of the day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityRule {
    /// Loses value: 1 per day, 2 once expired.
    Degrade,
    /// Gains value: 1 per day, 2 once expired.
    Appreciate,
    /// Gains 1/2/3 as the event nears, worthless once it has passed.
    Countdown,
}

impl QualityRule {
    /// Apply the rule once and clamp the result.
    pub fn apply(self, sell_in: i32, quality: i32) -> i32 {
        let expired = sell_in <= 0;
        let next = match self {
            QualityRule::Degrade => quality.saturating_sub(if expired { 2 } else { 1 }),
            QualityRule::Appreciate => quality.saturating_add(if expired { 2 } else { 1 }),
            QualityRule::Countdown => match sell_in {
                i32::MIN..=0 => 0,
                1..=5 => quality.saturating_add(3),
                6..=10 => quality.saturating_add(2),
                _ => quality.saturating_add(1),
            },
        };
        clamp_quality(next, MIN_QUALITY, MAX_QUALITY)
    }

    /// Apply the rule `times` times in succession against the same `sell_in`,
    /// clamping after each application.
    pub fn apply_times(self, times: u32, sell_in: i32, quality: i32) -> i32 {
        (0..times).fold(quality, |q, _| self.apply(sell_in, q))
    }
}
