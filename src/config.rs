// config.rs
use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub const DEFAULT_LISTING_BASE_URL: &str = "https://www.nps.gov/";
pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATES: [&str; 59] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TX", "UT", "VT", "TN", "VA", "WA", "WV", "WI", "WY", //
    "AS", "DC", "FM", "GU", "MH", "MP", "PW", "PR", "VI",
];

// Territories whose listing pages carry no park units.
const PLACES_WITHOUT_NPS_SITES: [&str; 3] = ["FM", "MH", "PW"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("No jurisdictions left to scrape")]
    NoJurisdictions,
}

/// Scrape NPS units by state, geocode them and write a pipe-delimited UTF-16 file.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Path of the pipe-delimited output file
    #[arg(short, long, env = "NPS_OUTPUT", default_value = "nps_units_geocodes.txt")]
    pub output: PathBuf,

    /// Google Maps geocoding API key
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Comma separated jurisdiction codes to scrape instead of the full list
    #[arg(long, value_delimiter = ',')]
    pub states: Option<Vec<String>>,

    #[arg(long, default_value = DEFAULT_LISTING_BASE_URL)]
    pub listing_base_url: String,

    #[arg(long, default_value = DEFAULT_GEOCODE_ENDPOINT)]
    pub geocode_endpoint: String,

    /// Also write the failed geocode lookups as JSON
    #[arg(long)]
    pub errors_json: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: PathBuf,
    pub api_key: String,
    pub jurisdictions: Vec<String>,
    pub listing_base_url: Url,
    pub geocode_endpoint: Url,
    pub errors_json: Option<PathBuf>,
    pub provenance: String,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let jurisdictions = match args.states {
            Some(codes) => normalize_codes(codes),
            None => default_jurisdictions(),
        };

        if jurisdictions.is_empty() {
            return Err(ConfigError::NoJurisdictions);
        }

        let mut listing_base_url = parse_url("listing-base-url", &args.listing_base_url)?;
        // `Url::join` replaces the last segment unless the path is a directory.
        if !listing_base_url.path().ends_with('/') {
            let path = format!("{}/", listing_base_url.path());
            listing_base_url.set_path(&path);
        }

        Ok(Self {
            output: args.output,
            api_key: args.api_key,
            jurisdictions,
            listing_base_url,
            geocode_endpoint: parse_url("geocode-endpoint", &args.geocode_endpoint)?,
            errors_json: args.errors_json,
            provenance: provenance(),
        })
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        field,
        reason: format!("{raw}: {e}"),
    })
}

/// All states and territories minus the ones without sites, sorted.
pub fn default_jurisdictions() -> Vec<String> {
    let codes = STATES
        .iter()
        .filter(|code| !PLACES_WITHOUT_NPS_SITES.contains(*code))
        .map(|code| code.to_string())
        .collect();
    normalize_codes(codes)
}

pub fn normalize_codes(codes: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = codes
        .into_iter()
        .map(|c| c.trim().to_ascii_uppercase())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort();
    out.dedup();
    out
}

/// Path of the running program, written as the last line of the output file.
pub fn provenance() -> String {
    std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| env!("CARGO_PKG_NAME").to_string())
}
