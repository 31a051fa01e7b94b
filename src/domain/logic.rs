// src/domain/logic.rs

use crate::domain::unit::{AggregatedUnit, RawListing, UnitKey};
use std::collections::BTreeMap;

/// Folds per-jurisdiction listings into one entry per unit.
///
/// Units spanning several states (Yellowstone shows up on the ID, MT and WY
/// pages) collapse onto a single key and collect every jurisdiction they were
/// seen under, in encounter order. The type is last-write-wins since it is
/// part of the key anyway.
///
/// The map is keyed by `UnitKey`, so iteration is lexicographic and the same
/// input always gives the same output regardless of listing order.
pub fn aggregate<I>(listings: I) -> BTreeMap<UnitKey, AggregatedUnit>
where
    I: IntoIterator<Item = RawListing>,
{
    let mut units: BTreeMap<UnitKey, AggregatedUnit> = BTreeMap::new();

    for listing in listings {
        let key = listing.key();
        let unit = units
            .entry(key.clone())
            .or_insert_with(|| AggregatedUnit::new(key, listing.unit_type.as_str()));

        unit.unit_type = listing.unit_type;
        unit.jurisdictions.push(listing.jurisdiction);
    }

    units
}
