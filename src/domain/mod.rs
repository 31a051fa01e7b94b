pub mod logic;
pub mod unit;

pub use logic::aggregate;
pub use unit::{AggregatedUnit, GeocodeResult, RawListing, UnitKey};
