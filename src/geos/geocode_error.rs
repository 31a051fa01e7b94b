use thiserror::Error;

/// Hard geocoding failures. An empty result set is not one of these, see `Lookup::Missing`.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocoding API returned HTTP {status} for {unit}")]
    Api { unit: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),
}
