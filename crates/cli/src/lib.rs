//! Console host for the inventory: prints a day-by-day report and waits
//! for one line of input before returning.

pub mod config;

use std::io::{BufRead, Write};

use anyhow::Context;
use emporium_inventory::{Inventory, Item, render_days, standard_fixture};

pub use config::Settings;

const GREETING: &str = "OMGHAI!";

/// Load the items named by `settings`, or the standard fixture.
pub fn load_items(settings: &Settings) -> anyhow::Result<Vec<Item>> {
    let Some(path) = &settings.items_path else {
        return Ok(standard_fixture());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading items from {}", path.display()))?;
    let inventory = Inventory::from_json(&json)
        .with_context(|| format!("parsing items from {}", path.display()))?;
    tracing::info!(path = %path.display(), items = inventory.items().len(), "loaded items");
    Ok(inventory.into_items())
}

/// Write the greeting and the report for `items`, then consume one line of `input`.
pub fn run(
    settings: &Settings,
    mut items: Vec<Item>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::info!(days = settings.days, items = items.len(), "rendering inventory report");

    writeln!(output, "{GREETING}")?;
    output.write_all(render_days(&mut items, settings.days).as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("waiting for input")?;
    Ok(())
}
