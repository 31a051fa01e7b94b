// src/domain/unit.rs
use std::fmt;

/// One heading pair off a jurisdiction's listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub unit_name: String,
    pub unit_type: String,
    pub jurisdiction: String,
}

impl RawListing {
    pub fn new(
        unit_name: impl Into<String>,
        unit_type: impl Into<String>,
        jurisdiction: impl Into<String>,
    ) -> Self {
        Self {
            unit_name: unit_name.into(),
            unit_type: unit_type.into(),
            jurisdiction: jurisdiction.into(),
        }
    }

    pub fn key(&self) -> UnitKey {
        UnitKey::new(&self.unit_name, &self.unit_type)
    }
}

/// Dedup identity of a unit: `"<name> <type>"`, e.g. `Zion National Park`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitKey(String);

impl UnitKey {
    pub fn new(unit_name: &str, unit_type: &str) -> Self {
        Self(format!("{unit_name} {unit_type}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GeocodeResult {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl GeocodeResult {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Sentinel for a lookup that came back without results.
    pub fn absent() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedUnit {
    pub key: UnitKey,
    pub unit_type: String,
    // In the order the jurisdictions were scraped; not deduplicated.
    pub jurisdictions: Vec<String>,
    // `None` until enrichment has run.
    pub coordinates: Option<GeocodeResult>,
}

impl AggregatedUnit {
    pub fn new(key: UnitKey, unit_type: impl Into<String>) -> Self {
        Self {
            key,
            unit_type: unit_type.into(),
            jurisdictions: Vec::new(),
            coordinates: None,
        }
    }
}
