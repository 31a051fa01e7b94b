use crate::config::{Args, Config};
use crate::geos::GoogleGeocoder;
use crate::scraper::NpsScraper;
use clap::Parser;
use tracing::error;

mod config;
mod domain;
mod errors;
mod exports;
mod geos;
mod pipeline;
mod scraper;

#[cfg(test)]
mod tests;

fn main() {
    // A missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    if let Err(e) = init_tracing(args.quiet, args.verbose) {
        eprintln!("{e}");
    }

    if let Err(e) = run(args) {
        error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), errors::AppError> {
    let config = Config::from_args(args)?;

    let scraper = NpsScraper::new(config.listing_base_url.clone())?;
    let geocoder = GoogleGeocoder::new(config.geocode_endpoint.clone(), config.api_key.clone())?;

    let summary = pipeline::run(&scraper, &geocoder, &config)?;

    println!("COMPLETE");
    println!("NPS units written to file = {}", summary.units_written);
    println!("GPS lookup errors = {}", summary.lookup_failures);
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), String> {
    let level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("NPS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize tracing subscriber: {e}"))
}
