// geocoder.rs
use crate::domain::GeocodeResult;
use crate::geos::models::GeocodeResponse;
use crate::geos::GeocodeError;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

pub const REDACTED: &str = "REDACTED";

/// Resolves a unit's display name to coordinates.
pub trait Geocode {
    fn lookup(&self, unit: &str) -> Result<Lookup, GeocodeError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(GeocodeResult),
    /// HTTP 200 but nothing usable in the body.
    Missing(LookupFailure),
}

/// Diagnostics for a lookup that returned no location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupFailure {
    pub unit: String,
    /// Request URL with the API key blanked out.
    pub url: String,
    pub response: Value,
}

pub struct GoogleGeocoder {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(endpoint: Url, api_key: String) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// `<endpoint>?<existing query>&address=...&key=...`
    ///
    /// Any query already on the endpoint is kept in front. `Url` only
    /// percent-encodes what would otherwise break the URL itself (`#`,
    /// quotes, `<`, `>`).
    pub fn request_url(&self, unit: &str, key: &str) -> Url {
        let params = format!("{}&key={}", build_address_query(unit), key);
        let query = match self.endpoint.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{params}"),
            _ => params,
        };

        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        url
    }
}

impl Geocode for GoogleGeocoder {
    fn lookup(&self, unit: &str) -> Result<Lookup, GeocodeError> {
        let url = self.request_url(unit, &self.api_key);
        let shown_url = self.request_url(unit, REDACTED).to_string();
        debug!(url = %shown_url, "geocoding");

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        interpret_response(unit, &shown_url, status, &body)
    }
}

/// Turns a unit name into the `address=` query parameter.
///
/// Splits on commas, then on spaces, and joins every piece with `+`:
/// `Zion National Park` becomes `address=Zion+National+Park`. Other
/// characters (`'`, `&`, `#`) go through untouched.
pub fn build_address_query(unit: &str) -> String {
    let parts: Vec<&str> = unit.split(',').flat_map(|chunk| chunk.split(' ')).collect();
    format!("address={}", parts.join("+"))
}

/// Classifies a geocoding response.
///
/// Anything but HTTP 200 is an error. A 200 whose body has no
/// `results[0].geometry.location` (zero results, unexpected shape, not JSON)
/// becomes `Lookup::Missing` with the raw body kept for diagnostics.
pub fn interpret_response(
    unit: &str,
    url: &str,
    status: u16,
    body: &str,
) -> Result<Lookup, GeocodeError> {
    if status != 200 {
        return Err(GeocodeError::Api {
            unit: unit.to_string(),
            status,
        });
    }

    let raw: Value = serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()));

    let location = serde_json::from_value::<GeocodeResponse>(raw.clone())
        .ok()
        .and_then(|r| r.results.into_iter().next())
        .map(|hit| hit.geometry.location);

    match location {
        Some(loc) => Ok(Lookup::Found(GeocodeResult::new(loc.lat, loc.lng))),
        None => Ok(Lookup::Missing(LookupFailure {
            unit: unit.to_string(),
            url: url.to_string(),
            response: raw,
        })),
    }
}
