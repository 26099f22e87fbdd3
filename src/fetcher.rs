use reqwest::header::{
    HeaderMap, ACCEPT, ACCEPT_LANGUAGE, CONNECTION, DNT, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;

use crate::error::ScrapeError;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for fetching recipe pages with a browser-like header set.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScrapeError> {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(browser_headers()?)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the page body. Transport errors, timeouts and non-2xx statuses
    /// all surface as a fetch failure.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}

fn browser_headers() -> Result<HeaderMap, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36".parse()?,
    );
    headers.insert(
        ACCEPT,
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".parse()?,
    );
    headers.insert(ACCEPT_LANGUAGE, "en-US,en;q=0.5".parse()?);
    headers.insert(DNT, "1".parse()?);
    headers.insert(CONNECTION, "keep-alive".parse()?);
    headers.insert(UPGRADE_INSECURE_REQUESTS, "1".parse()?);
    Ok(headers)
}
