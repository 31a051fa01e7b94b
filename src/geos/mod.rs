mod enrich;
mod geocode_error;
pub mod geocoder;
mod models;

pub use enrich::enrich;
pub use geocode_error::GeocodeError;
pub use geocoder::{Geocode, GoogleGeocoder, Lookup, LookupFailure};
