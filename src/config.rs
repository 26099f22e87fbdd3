use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::fetcher::DEFAULT_TIMEOUT;

/// Runtime configuration for recipe scraping
#[derive(Debug, Deserialize, Clone)]
pub struct ScrapeConfig {
    /// Timeout for page fetches, in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Endpoint of the site-specific scraper service, when one is deployed
    #[serde(default)]
    pub scraper_service_url: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            scraper_service_url: None,
        }
    }
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl ScrapeConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__SCRAPER_SERVICE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_SCRAPER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
