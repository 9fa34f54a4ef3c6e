//! End-to-end report for the standard inventory over thirty days.

use emporium_cli::{Settings, run};
use emporium_inventory::{Item, standard_fixture};

fn report(settings: &Settings, items: Vec<Item>) -> String {
    let mut input: &[u8] = b"a\n";
    let mut output = Vec::new();
    run(settings, items, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn thirty_days_of_the_standard_inventory() {
    let output = report(&Settings::default(), standard_fixture());

    assert!(output.starts_with("OMGHAI!\n-------- day 0 --------\n"));
    assert_eq!(output.matches("name, sellIn, quality").count(), 31);

    let last_day = "\
-------- day 30 --------
name, sellIn, quality
+5 Dexterity Vest, -20, 0
Aged Brie, -28, 50
Elixir of the Mongoose, -25, 0
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, -15, 0
Backstage passes to a TAFKAL80ETC concert, -20, 0
Backstage passes to a TAFKAL80ETC concert, -25, 0
Conjured Mana Cake, -27, 0

";
    assert!(output.ends_with(last_day), "unexpected final block:\n{output}");
}

#[test]
fn passes_peak_before_the_concert() {
    let output = report(&Settings::default(), standard_fixture());

    // Day 10: the first pass has 5 days left and has gained 1*5 + 2*5.
    assert!(output.contains(
        "-------- day 10 --------\nname, sellIn, quality\n\
         +5 Dexterity Vest, 0, 10\n"
    ));
    assert!(output.contains("Backstage passes to a TAFKAL80ETC concert, 5, 35\n"));
    assert!(output.contains("Backstage passes to a TAFKAL80ETC concert, 0, 50\n"));
}

#[test]
fn custom_items_and_day_count() {
    let settings = Settings {
        days: 2,
        ..Settings::default()
    };
    let output = report(
        &settings,
        vec![
            Item::new("Conjured Robe", 1, 10),
            Item::new("Normal Robe", 1, 10),
        ],
    );

    assert_eq!(
        output,
        "OMGHAI!\n\
         -------- day 0 --------\nname, sellIn, quality\nConjured Robe, 1, 10\nNormal Robe, 1, 10\n\n\
         -------- day 1 --------\nname, sellIn, quality\nConjured Robe, 0, 8\nNormal Robe, 0, 9\n\n\
         -------- day 2 --------\nname, sellIn, quality\nConjured Robe, -1, 4\nNormal Robe, -1, 7\n\n"
    );
}
