use crate::domain::{AggregatedUnit, GeocodeResult};
use crate::geos::{Geocode, GeocodeError, Lookup, LookupFailure};
use tracing::{info, warn};

const PROGRESS_EVERY: usize = 10;

/// Units with coordinates attached, plus the lookups that came back empty.
#[derive(Debug, Default)]
pub struct Enriched {
    pub units: Vec<AggregatedUnit>,
    pub failures: Vec<LookupFailure>,
}

/// Geocodes each unit once, one call at a time.
///
/// A missing result leaves the unit with absent coordinates and one entry in
/// `failures`; an API error stops the whole run.
pub fn enrich<I, G>(units: I, geocoder: &G) -> Result<Enriched, GeocodeError>
where
    I: IntoIterator<Item = AggregatedUnit>,
    I::IntoIter: ExactSizeIterator,
    G: Geocode + ?Sized,
{
    let units = units.into_iter();
    let total = units.len();
    let mut out = Enriched {
        units: Vec::with_capacity(total),
        failures: Vec::new(),
    };

    for (i, mut unit) in units.enumerate() {
        if i % PROGRESS_EVERY == 0 {
            info!("Geocoding calls. {i} of {total}...");
        }

        let coordinates = match geocoder.lookup(unit.key.as_str())? {
            Lookup::Found(coords) => coords,
            Lookup::Missing(failure) => {
                warn!(
                    unit = %failure.unit,
                    url = %failure.url,
                    response = %failure.response,
                    "GPS lookup error"
                );
                out.failures.push(failure);
                GeocodeResult::absent()
            }
        };

        unit.coordinates = Some(coordinates);
        out.units.push(unit);
    }

    Ok(out)
}
