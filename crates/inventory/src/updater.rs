//! Daily ageing pass over an item collection.
//!
//! The pass is synchronous and takes `&mut`, so callers that share an
//! inventory across threads must serialize calls themselves.

use emporium_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::item::Item;

/// Advance every item by one day, in place.
///
/// All qualities are updated before any sell-in is decremented: quality rules
/// read the start-of-day `sell_in`. Empty collections are a no-op.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        update_quality(item);
    }
    for item in items.iter_mut() {
        update_sell_in(item);
    }
    tracing::trace!(items = items.len(), "advanced inventory one day");
}

fn update_quality(item: &mut Item) {
    let category = Category::classify(&item.name);
    let Some((rule, times)) = category.quality_schedule() else {
        return;
    };

    let before = item.quality;
    item.quality = rule.apply_times(times, item.sell_in, item.quality);
    tracing::debug!(
        name = %item.name,
        ?category,
        sell_in = item.sell_in,
        before,
        after = item.quality,
        "quality updated"
    );
}

fn update_sell_in(item: &mut Item) {
    if Category::classify(&item.name).ages() {
        item.sell_in = item.sell_in.saturating_sub(1);
    }
}

/// An owned, ordered item collection aged one day at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a JSON array of items (`{"name", "sell_in", "quality"}`).
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("inventory fixture: {e}")))?;
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn advance_one_day(&mut self) {
        advance_one_day(&mut self.items);
    }

    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_one_day();
        }
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
