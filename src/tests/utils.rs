use crate::config::Config;
use crate::domain::RawListing;
use crate::geos::geocoder::interpret_response;
use crate::geos::{Geocode, GeocodeError, Lookup};
use crate::scraper::scraper::parse_listings;
use crate::scraper::{ListingSource, ScraperError};
use serde_json::json;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Listing page in the shape nps.gov serves: type in an h2, name in the
/// following h3, plus classed headings that are not units.
pub fn listing_page(units: &[(&str, &str)]) -> String {
    let mut body = String::from(
        r#"<html><body>
        <h2 class="sr-only">Site Navigation</h2>
        <h3 class="Utility-nav">Explore</h3>
        <ul id="list_parks">"#,
    );
    for (name, unit_type) in units {
        body.push_str(&format!(
            r#"
            <li class="clearfix">
                <h2>{unit_type}</h2>
                <h3><a href="/park/index.htm">{name}</a></h3>
                <p>Some description.</p>
            </li>"#
        ));
    }
    body.push_str(
        r#"
        </ul>
        <h2 class="footer-title">Contact</h2>
        </body></html>"#,
    );
    body
}

/// Serves canned HTML per jurisdiction through the real parser.
#[derive(Default)]
pub struct FixtureSource {
    pages: HashMap<String, String>,
    broken: Vec<String>,
}

impl FixtureSource {
    pub fn page(mut self, code: &str, units: &[(&str, &str)]) -> Self {
        self.pages.insert(code.to_string(), listing_page(units));
        self
    }

    pub fn broken(mut self, code: &str) -> Self {
        self.broken.push(code.to_string());
        self
    }
}

impl ListingSource for FixtureSource {
    fn fetch_listings(&self, jurisdiction: &str) -> Result<Vec<RawListing>, ScraperError> {
        if self.broken.iter().any(|c| c == jurisdiction) {
            return Err(ScraperError::Status {
                url: format!("https://www.nps.gov/state/{jurisdiction}/index.htm"),
                status: 503,
            });
        }
        let html = self
            .pages
            .get(jurisdiction)
            .cloned()
            .unwrap_or_else(|| listing_page(&[]));
        parse_listings(&html, jurisdiction)
    }
}

/// Answers from a fixed table; unknown units get a ZERO_RESULTS body.
#[derive(Default)]
pub struct FixtureGeocoder {
    coords: HashMap<String, (f64, f64)>,
    status: Option<u16>,
    pub calls: RefCell<Vec<String>>,
}

impl FixtureGeocoder {
    pub fn with(mut self, unit: &str, lat: f64, lng: f64) -> Self {
        self.coords.insert(unit.to_string(), (lat, lng));
        self
    }

    pub fn failing_with(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl Geocode for FixtureGeocoder {
    fn lookup(&self, unit: &str) -> Result<Lookup, GeocodeError> {
        self.calls.borrow_mut().push(unit.to_string());

        let body = match self.coords.get(unit) {
            Some((lat, lng)) => json!({
                "results": [{ "geometry": { "location": { "lat": lat, "lng": lng } } }],
                "status": "OK"
            }),
            None => json!({ "results": [], "status": "ZERO_RESULTS" }),
        };

        interpret_response(
            unit,
            "https://geocode.test/json?address=x&key=REDACTED",
            self.status.unwrap_or(200),
            &body.to_string(),
        )
    }
}

pub fn test_config(dir: &Path, jurisdictions: &[&str]) -> Config {
    Config {
        output: dir.join("units.txt"),
        api_key: "test-key".to_string(),
        jurisdictions: jurisdictions.iter().map(|c| c.to_string()).collect(),
        listing_base_url: Url::parse("https://www.nps.gov/").unwrap(),
        geocode_endpoint: Url::parse("https://geocode.test/json").unwrap(),
        errors_json: None,
        provenance: "/usr/local/bin/nps_units".to_string(),
    }
}

/// Decodes a UTF-16 LE file (BOM required) into its lines.
pub fn read_utf16_lines(path: &PathBuf) -> Vec<String> {
    let bytes = std::fs::read(path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xFE], "missing UTF-16 LE BOM");

    let units: Vec<u16> = bytes[2..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16(&units).unwrap();
    text.lines().map(str::to_string).collect()
}
