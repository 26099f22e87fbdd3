use log::debug;

use crate::document::Document;
use crate::error::ScrapeError;
use crate::extractors::{enhance, json_ld};
use crate::fetcher::PageFetcher;
use crate::model::RecipeResult;
use crate::scrapers::SiteScraper;

/// Extract recipe data from a URL.
///
/// Strategies are tried in a fixed order and the first one to produce
/// non-empty output wins:
/// 1. The site-specific scraper, when one is configured. A decline or an
///    empty result falls through silently.
/// 2. Embedded JSON-LD blocks in the fetched page, with missing ingredient
///    and instruction fields backfilled from page markup. A fetch failure
///    here ends the whole pipeline.
/// 3. The page's cleaned visible text.
///
/// Fails with [`ScrapeError::NoContentError`] when all three strategies come
/// back empty.
pub async fn run(
    url: &str,
    scraper: Option<&dyn SiteScraper>,
    fetcher: &PageFetcher,
) -> Result<RecipeResult, ScrapeError> {
    if let Some(scraper) = scraper {
        if let Some(data) = scraper.scrape(url).await {
            if !data.is_empty() {
                debug!("Site scraper produced a result for {url}");
                return Ok(RecipeResult::Library {
                    url: url.to_string(),
                    data,
                });
            }
        }
    }

    let body = fetcher.fetch(url).await?;
    let document = Document::parse(&body);

    if let Some(candidate) = json_ld::extract(&document) {
        debug!("Found embedded recipe data for {url}");
        let data = enhance::enhance(&document, candidate);
        return Ok(RecipeResult::Structured {
            url: url.to_string(),
            data,
        });
    }

    let text = document.visible_text();
    if text.is_empty() {
        return Err(ScrapeError::NoContentError);
    }

    debug!("Falling back to cleaned page text for {url}");
    Ok(RecipeResult::Text {
        url: url.to_string(),
        data: text,
    })
}
