// scraper.rs
use crate::domain::RawListing;
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

// Park headings carry no class attribute; the page's other h2/h3s all do.
const TYPE_SELECTOR: &str = "h2:not([class])";
const NAME_SELECTOR: &str = "h3:not([class])";

/// Where the pipeline gets its per-jurisdiction listings from.
pub trait ListingSource {
    fn fetch_listings(&self, jurisdiction: &str) -> Result<Vec<RawListing>, ScraperError>;
}

pub struct NpsScraper {
    client: Client,
    base_url: Url,
}

impl NpsScraper {
    /// `base_url` must end in `/`, e.g. `https://www.nps.gov/`.
    pub fn new(base_url: Url) -> Result<Self, ScraperError> {
        // No explicit timeout: the client defaults apply.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn listing_url(&self, jurisdiction: &str) -> Result<Url, ScraperError> {
        let path = format!("state/{}/index.htm", jurisdiction.to_ascii_lowercase());
        Ok(self.base_url.join(&path)?)
    }

    pub fn fetch_html(&self, url: &Url) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| ScraperError::Network(e.to_string()))
    }
}

impl ListingSource for NpsScraper {
    fn fetch_listings(&self, jurisdiction: &str) -> Result<Vec<RawListing>, ScraperError> {
        let url = self.listing_url(jurisdiction)?;
        debug!(%url, "fetching listing page");

        let html = self.fetch_html(&url)?;
        parse_listings(&html, jurisdiction)
    }
}

/// Pairs the unit-type `h2`s with the unit-name `h3`s by position.
///
/// The page lists each unit as an `h2` (type) followed by an `h3` (name), so
/// the n-th type belongs to the n-th name. Nothing on the page ties them
/// together otherwise: if the counts differ the extra headings are dropped and
/// the mismatch is logged.
pub fn parse_listings(html: &str, jurisdiction: &str) -> Result<Vec<RawListing>, ScraperError> {
    let document = Html::parse_document(html);
    let type_selector =
        Selector::parse(TYPE_SELECTOR).map_err(|e| ScraperError::HtmlParse(e.to_string()))?;
    let name_selector =
        Selector::parse(NAME_SELECTOR).map_err(|e| ScraperError::HtmlParse(e.to_string()))?;

    let types: Vec<String> = document.select(&type_selector).map(heading_text).collect();
    let names: Vec<String> = document.select(&name_selector).map(heading_text).collect();

    if types.len() != names.len() {
        warn!(
            jurisdiction,
            types = types.len(),
            names = names.len(),
            "heading counts differ, pairing may be off"
        );
    }

    let listings = names
        .into_iter()
        .zip(types)
        .map(|(name, unit_type)| RawListing::new(name, unit_type, jurisdiction))
        .collect();

    Ok(listings)
}

fn heading_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
