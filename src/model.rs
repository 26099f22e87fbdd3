use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object as parsed from an embedded structured-data block.
pub type JsonObject = Map<String, Value>;

/// Terminal output of the extraction pipeline: one result per call, tagged
/// with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source")]
pub enum RecipeResult {
    /// Produced by the site-specific scraper service
    #[serde(rename = "recipe-scrapers")]
    Library { url: String, data: JsonObject },

    /// Extracted from an embedded JSON-LD block, enhanced with page markup
    #[serde(rename = "json-ld")]
    Structured { url: String, data: JsonObject },

    /// Cleaned visible page text, for downstream processing
    #[serde(rename = "html")]
    Text { url: String, data: String },
}

impl RecipeResult {
    /// The source tag this result serializes under.
    pub fn source(&self) -> &'static str {
        match self {
            RecipeResult::Library { .. } => "recipe-scrapers",
            RecipeResult::Structured { .. } => "json-ld",
            RecipeResult::Text { .. } => "html",
        }
    }

    /// The URL the recipe was extracted from.
    pub fn url(&self) -> &str {
        match self {
            RecipeResult::Library { url, .. }
            | RecipeResult::Structured { url, .. }
            | RecipeResult::Text { url, .. } => url,
        }
    }
}
