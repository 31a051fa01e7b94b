use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    #[error("Bad listing URL: {0}")]
    Url(#[from] url::ParseError),
}
