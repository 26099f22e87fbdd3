pub mod builder;
pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod extractors;
pub mod fetcher;
pub mod model;
pub mod pipeline;
pub mod scrapers;

use std::time::Duration;

pub use builder::{RecipeScraper, RecipeScraperBuilder};
pub use config::ScrapeConfig;
pub use error::ScrapeError;
pub use model::{JsonObject, RecipeResult};
pub use scrapers::{ScraperService, SiteScraper};

use crate::fetcher::PageFetcher;

/// Scrape recipe data from a URL using settings from configuration.
///
/// Reads `ScrapeConfig` (config file plus `RECIPE_SCRAPER__`-prefixed
/// environment variables) and runs the extraction pipeline: scraper service
/// when configured, then embedded structured data, then cleaned page text.
pub async fn scrape_recipe(url: &str) -> Result<RecipeResult, ScrapeError> {
    let config = ScrapeConfig::load()?;
    let fetcher = PageFetcher::new(Some(Duration::from_secs(config.timeout)))?;
    let service = config.scraper_service_url.map(ScraperService::new);

    pipeline::run(
        url,
        service.as_ref().map(|s| s as &dyn SiteScraper),
        &fetcher,
    )
    .await
}

/// Scrape recipe data from a URL with an explicit fetch timeout.
///
/// Skips configuration loading entirely; no scraper service is consulted.
pub async fn scrape_recipe_with_timeout(
    url: &str,
    timeout: Option<Duration>,
) -> Result<RecipeResult, ScrapeError> {
    let fetcher = PageFetcher::new(timeout)?;
    pipeline::run(url, None, &fetcher).await
}
