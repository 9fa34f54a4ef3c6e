//! Inventory ageing domain module.
//!
//! This crate contains the daily quality/sell-in rules for inventory items,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod category;
pub mod fixture;
pub mod item;
pub mod report;
pub mod rule;
pub mod updater;

pub use category::Category;
pub use fixture::standard_fixture;
pub use item::Item;
pub use report::{render_day, render_days};
pub use rule::{MAX_QUALITY, MIN_QUALITY, QualityRule, clamp_quality};
pub use updater::{Inventory, advance_one_day};
