//! Plain-text day report, one block per simulated day.

use core::fmt::Write;

use crate::item::Item;
use crate::updater::advance_one_day;

const HEADER: &str = "name, sellIn, quality";

/// Render one day's block: banner, header, one row per item, blank line.
pub fn render_day(day: u32, items: &[Item]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "-------- day {day} --------");
    let _ = writeln!(out, "{HEADER}");
    for item in items {
        let _ = writeln!(out, "{item}");
    }
    out.push('\n');
    out
}

/// Render days `0..=days`, ageing `items` by one day after each block.
pub fn render_days(items: &mut [Item], days: u32) -> String {
    let mut out = String::new();
    for day in 0..=days {
        out.push_str(&render_day(day, items));
        advance_one_day(items);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::standard_fixture;

    #[test]
    fn day_block_layout() {
        let items = vec![Item::new("foo", 10, 10), Item::new("Aged Brie", 2, 0)];
        assert_eq!(
            render_day(0, &items),
            "-------- day 0 --------\nname, sellIn, quality\nfoo, 10, 10\nAged Brie, 2, 0\n\n"
        );
    }

    #[test]
    fn renders_each_day_then_ages() {
        let mut items = vec![Item::new("foo", 1, 5)];
        let report = render_days(&mut items, 1);

        assert_eq!(
            report,
            "-------- day 0 --------\nname, sellIn, quality\nfoo, 1, 5\n\n\
             -------- day 1 --------\nname, sellIn, quality\nfoo, 0, 4\n\n"
        );
        assert_eq!(items, vec![Item::new("foo", -1, 2)]);
    }

    #[test]
    fn standard_fixture_day_one() {
        let mut items = standard_fixture();
        advance_one_day(&mut items);

        let report = render_day(1, &items);
        let expected = "\
-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

";
        assert_eq!(report, expected);
    }
}
