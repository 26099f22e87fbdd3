use log::debug;
use serde_json::{json, Value};

use crate::document::Document;
use crate::model::JsonObject;

const INGREDIENTS_REGION: &str = "ingredients";
const STEPS_REGION: &str = "steps";

/// Backfill missing ingredient and instruction fields from conventional
/// page markup regions.
///
/// Only `recipeIngredient` and `recipeInstructions` are ever written; every
/// other key of the candidate passes through untouched. When the page has no
/// usable region the original field values are kept as-is.
pub fn enhance(document: &Document, mut candidate: JsonObject) -> JsonObject {
    if candidate.is_empty() {
        return candidate;
    }

    if needs_ingredients(&candidate) {
        let items = document.list_items(INGREDIENTS_REGION);
        if !items.is_empty() {
            debug!("Backfilling {} ingredients from page markup", items.len());
            candidate.insert(
                "recipeIngredient".to_string(),
                Value::Array(items.into_iter().map(Value::String).collect()),
            );
        }
    }

    if needs_instructions(&candidate) {
        let steps: Vec<Value> = document
            .list_items(STEPS_REGION)
            .into_iter()
            .map(|text| json!({"@type": "HowToStep", "text": text}))
            .collect();
        if !steps.is_empty() {
            debug!("Backfilling {} instruction steps from page markup", steps.len());
            candidate.insert("recipeInstructions".to_string(), Value::Array(steps));
        }
    }

    candidate
}

/// A lone string also triggers enrichment: it means the ingredient list was
/// collapsed into one unparsed value. A non-empty list is trusted as-is.
fn needs_ingredients(candidate: &JsonObject) -> bool {
    match candidate.get("recipeIngredient") {
        None => true,
        Some(Value::String(_)) => true,
        Some(value) => is_empty_value(value),
    }
}

fn needs_instructions(candidate: &JsonObject) -> bool {
    match candidate.get("recipeInstructions") {
        None => true,
        Some(value) => is_empty_value(value),
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
