pub mod scraper;
mod scraper_error;

pub use self::scraper::{ListingSource, NpsScraper};
pub use self::scraper_error::ScraperError;
