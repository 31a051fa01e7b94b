// pipeline.rs
use crate::config::Config;
use crate::domain::{aggregate, RawListing};
use crate::errors::AppError;
use crate::exports::{write_failure_report, write_units};
use crate::geos::{enrich, Geocode};
use crate::scraper::ListingSource;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub units_written: usize,
    pub lookup_failures: usize,
}

/// Scrape -> aggregate -> geocode -> write, strictly in sequence.
pub fn run<S, G>(source: &S, geocoder: &G, config: &Config) -> Result<Summary, AppError>
where
    S: ListingSource + ?Sized,
    G: Geocode + ?Sized,
{
    let listings = scrape_all(source, &config.jurisdictions)?;
    info!(listings = listings.len(), "scrape complete");

    let units = aggregate(listings);
    info!(units = units.len(), "unique units");

    let enriched = enrich(units.into_values(), geocoder)?;

    let units_written = write_units(&config.output, &enriched.units, &config.provenance)?;

    if let Some(path) = &config.errors_json {
        write_failure_report(path, &enriched.failures)?;
        info!(path = %path.display(), "failure report written");
    }

    Ok(Summary {
        units_written,
        lookup_failures: enriched.failures.len(),
    })
}

pub fn scrape_all<S>(source: &S, jurisdictions: &[String]) -> Result<Vec<RawListing>, AppError>
where
    S: ListingSource + ?Sized,
{
    let mut listings = Vec::new();
    for code in jurisdictions {
        info!("Processing {code}...");
        listings.extend(source.fetch_listings(code)?);
    }
    Ok(listings)
}
