// errors.rs
use crate::config::ConfigError;
use crate::exports::ExportError;
use crate::geos::GeocodeError;
use crate::scraper::ScraperError;
use thiserror::Error;

/// Every error that ends a run. Soft geocode misses are not in here,
/// they travel as `LookupFailure` values instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Listing fetch failed: {0}")]
    Scraper(#[from] ScraperError),

    #[error("Geocoding failed: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}
