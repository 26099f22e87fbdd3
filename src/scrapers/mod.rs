use async_trait::async_trait;

use crate::model::JsonObject;

mod service;

pub use self::service::ScraperService;

/// Contract for the site-specific scraping strategy tried before any
/// HTML-based extraction.
///
/// Implementations absorb their own failures: a scraper that errors, times
/// out, or has nothing for the URL returns `None` and the pipeline moves on
/// to the next strategy.
#[async_trait]
pub trait SiteScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Option<JsonObject>;
}
