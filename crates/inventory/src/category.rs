//! Item classification by name.

use serde::{Deserialize, Serialize};

use crate::rule::QualityRule;

const LEGENDARY_MARKER: &str = "Sulfuras";
const CONJURED_MARKER: &str = "Conjured";
const AGED_MARKER: &str = "Aged Brie";
const EVENT_PASSES_MARKER: &str = "Backstage passes";

/// Category of an item, resolved from its name.
///
/// Precedence: `Legendary > Conjured > Aged > EventPasses > Normal`.
/// Matching is by substring, not equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Never ages; quality and sell-in stay as constructed.
    Legendary,
    /// Ages twice per day under its underlying rule.
    Conjured(QualityRule),
    Aged,
    EventPasses,
    Normal,
}

impl Category {
    pub fn classify(name: &str) -> Self {
        if name.contains(LEGENDARY_MARKER) {
            Category::Legendary
        } else if name.contains(CONJURED_MARKER) {
            Category::Conjured(Self::underlying_rule(name))
        } else {
            match Self::underlying_rule(name) {
                QualityRule::Appreciate => Category::Aged,
                QualityRule::Countdown => Category::EventPasses,
                QualityRule::Degrade => Category::Normal,
            }
        }
    }

    /// Rule applied when the conjured/legendary markers are disregarded.
    fn underlying_rule(name: &str) -> QualityRule {
        if name.contains(AGED_MARKER) {
            QualityRule::Appreciate
        } else if name.contains(EVENT_PASSES_MARKER) {
            QualityRule::Countdown
        } else {
            QualityRule::Degrade
        }
    }

    /// The rule and how many times it runs per day, or `None` for items that never age.
    pub fn quality_schedule(self) -> Option<(QualityRule, u32)> {
        match self {
            Category::Legendary => None,
            Category::Conjured(rule) => Some((rule, 2)),
            Category::Aged => Some((QualityRule::Appreciate, 1)),
            Category::EventPasses => Some((QualityRule::Countdown, 1)),
            Category::Normal => Some((QualityRule::Degrade, 1)),
        }
    }

    pub fn ages(self) -> bool {
        !matches!(self, Category::Legendary)
    }
}
