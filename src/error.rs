use thiserror::Error;

/// Errors that can occur while extracting a recipe from a URL
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP transport failure, non-success status, or timeout while fetching the page
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Every extraction strategy came back empty
    #[error("Could not extract any content from URL")]
    NoContentError,

    /// Error building the browser header set
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
