use std::time::Duration;

use crate::fetcher::PageFetcher;
use crate::model::RecipeResult;
use crate::pipeline;
use crate::scrapers::{ScraperService, SiteScraper};
use crate::ScrapeError;

/// Builder for configuring and executing recipe scrapes
#[derive(Debug, Default)]
pub struct RecipeScraperBuilder {
    timeout: Option<Duration>,
    scraper_service: Option<String>,
}

impl RecipeScraperBuilder {
    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Point at a deployed site-specific scraper service
    ///
    /// When set, the service is asked first and HTML extraction only runs
    /// when the service declines the URL.
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder()
    ///     .scraper_service("http://localhost:8100/scrape");
    /// ```
    pub fn scraper_service(mut self, endpoint: impl Into<String>) -> Self {
        self.scraper_service = Some(endpoint.into());
        self
    }

    /// Execute the scrape against a URL
    ///
    /// # Errors
    /// Returns `ScrapeError` if:
    /// - The page fetch fails, times out, or answers with a non-2xx status
    /// - No strategy produces any content
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scraper::RecipeScraper;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let result = RecipeScraper::builder()
    ///     .scrape("https://example.com/recipe")
    ///     .await?;
    /// println!("{}", result.source());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape(self, url: &str) -> Result<RecipeResult, ScrapeError> {
        let fetcher = PageFetcher::new(self.timeout)?;
        let service = self.scraper_service.map(ScraperService::new);

        pipeline::run(
            url,
            service.as_ref().map(|s| s as &dyn SiteScraper),
            &fetcher,
        )
        .await
    }
}

/// Main entry point for the builder API
pub struct RecipeScraper;

impl RecipeScraper {
    /// Creates a new builder for scraping recipes
    ///
    /// # Example
    /// ```
    /// use recipe_scraper::RecipeScraper;
    ///
    /// let builder = RecipeScraper::builder();
    /// ```
    pub fn builder() -> RecipeScraperBuilder {
        RecipeScraperBuilder::default()
    }
}
