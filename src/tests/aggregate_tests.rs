use crate::domain::{aggregate, AggregatedUnit, RawListing, UnitKey};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};

fn sample() -> Vec<RawListing> {
    vec![
        RawListing::new("Yellowstone", "National Park", "MT"),
        RawListing::new("Zion", "National Park", "UT"),
        RawListing::new("Bryce Canyon", "National Park", "UT"),
        RawListing::new("Yellowstone", "National Park", "WY"),
    ]
}

// Jurisdiction order follows input order, so compare as sets.
fn normalized(units: &BTreeMap<UnitKey, AggregatedUnit>) -> BTreeMap<String, BTreeSet<String>> {
    units
        .iter()
        .map(|(k, u)| (k.to_string(), u.jurisdictions.iter().cloned().collect()))
        .collect()
}

#[test]
fn multi_state_unit_collapses_to_one_entry() {
    let units = aggregate(sample());

    assert_eq!(units.len(), 3);

    let yellowstone = &units[&UnitKey::new("Yellowstone", "National Park")];
    assert_eq!(yellowstone.jurisdictions, vec!["MT", "WY"]);
    assert_eq!(yellowstone.unit_type, "National Park");
    assert_eq!(yellowstone.coordinates, None);
}

#[test]
fn key_is_name_then_type() {
    let units = aggregate(vec![RawListing::new("Zion", "National Park", "UT")]);

    let keys: Vec<&str> = units.keys().map(UnitKey::as_str).collect();
    assert_eq!(keys, vec!["Zion National Park"]);
}

#[test]
fn same_name_different_type_stays_separate() {
    let units = aggregate(vec![
        RawListing::new("Great Sand Dunes", "National Park", "CO"),
        RawListing::new("Great Sand Dunes", "National Preserve", "CO"),
    ]);

    assert_eq!(units.len(), 2);
}

#[test]
fn input_order_does_not_change_result() {
    let forward = aggregate(sample());

    let mut reversed_input = sample();
    reversed_input.reverse();
    let reversed = aggregate(reversed_input);

    let mut rotated_input = sample();
    rotated_input.rotate_left(2);
    let rotated = aggregate(rotated_input);

    assert_eq!(normalized(&forward), normalized(&reversed));
    assert_eq!(normalized(&forward), normalized(&rotated));
}

#[test]
fn every_observed_jurisdiction_is_kept() {
    let listings = sample();
    let units = aggregate(listings.clone());

    for listing in &listings {
        let unit = &units[&listing.key()];
        assert!(unit.jurisdictions.contains(&listing.jurisdiction));
    }
}

#[test]
fn repeated_jurisdiction_is_not_deduplicated() {
    let units = aggregate(vec![
        RawListing::new("Zion", "National Park", "UT"),
        RawListing::new("Zion", "National Park", "UT"),
    ]);

    assert_eq!(
        units[&UnitKey::new("Zion", "National Park")].jurisdictions,
        vec!["UT", "UT"]
    );
}

#[test]
fn empty_input_gives_empty_map() {
    assert!(aggregate(Vec::new()).is_empty());
}
