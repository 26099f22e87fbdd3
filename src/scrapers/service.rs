use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Serialize;
use std::error::Error;

use crate::model::JsonObject;
use crate::scrapers::SiteScraper;

#[derive(Serialize)]
struct ScrapeRequest {
    url: String,
}

/// Client for a deployed scraper service that knows individual recipe sites.
///
/// The service takes `{"url": ...}` and answers with the scraped recipe as a
/// JSON object. Transport errors, non-2xx statuses and bodies that are not
/// JSON objects all count as the service declining the URL.
pub struct ScraperService {
    endpoint: String,
    client: Client,
}

impl ScraperService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    async fn request(&self, url: &str) -> Result<JsonObject, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ScrapeRequest {
                url: url.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!(
                "Scraper service responded with status: {}",
                response.status()
            )
            .into());
        }

        let data: JsonObject = response.json().await?;
        Ok(data)
    }
}

#[async_trait]
impl SiteScraper for ScraperService {
    async fn scrape(&self, url: &str) -> Option<JsonObject> {
        match self.request(url).await {
            Ok(data) => Some(data),
            Err(err) => {
                debug!("Scraper service declined {url}: {err}");
                None
            }
        }
    }
}
