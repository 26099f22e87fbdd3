use log::debug;
use serde_json::Value;

use crate::classifier::is_recipe;
use crate::document::Document;
use crate::model::JsonObject;

/// Scan the document's JSON-LD blocks and return the first object that looks
/// like a recipe.
///
/// Blocks that fail to parse are skipped and the scan continues with the
/// next block. Candidates are inspected in document order and the first
/// accepted one wins, whether it sits at the top level, inside an array, or
/// inside an `@graph` array.
pub fn extract(document: &Document) -> Option<JsonObject> {
    for block in document.linked_data_blocks() {
        let json = match serde_json::from_str::<Value>(&sanitize_json(&block)) {
            Ok(json) => json,
            Err(err) => {
                debug!("Skipping JSON-LD block that failed to parse: {err}");
                continue;
            }
        };

        match json {
            Value::Array(items) => {
                if let Some(candidate) = first_recipe_object(&items) {
                    return Some(candidate);
                }
            }
            Value::Object(object) => {
                if is_recipe(&object) {
                    return Some(object);
                }
                if let Some(Value::Array(graph)) = object.get("@graph") {
                    if let Some(candidate) = first_recipe_object(graph) {
                        return Some(candidate);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

fn first_recipe_object(items: &[Value]) -> Option<JsonObject> {
    items.iter().find_map(|item| match item {
        Value::Object(object) if is_recipe(object) => Some(object.clone()),
        _ => None,
    })
}

/// Clean up the quirks real pages ship inside ld+json scripts before parsing.
fn sanitize_json(json_str: &str) -> String {
    let mut cleaned = json_str.trim().to_string();

    // Some pages prefix the JSON with stray markup or CDATA noise
    if !cleaned.starts_with('{') && !cleaned.starts_with('[') {
        if let Some(start) = cleaned.find('{') {
            cleaned = cleaned[start..].to_string();
        }
    }

    // Trailing commas before a closing brace/bracket
    cleaned = cleaned.replace(",]", "]").replace(",}", "}");

    // HTML comments wrapped around the payload
    cleaned = cleaned.replace("<!--", "").replace("-->", "");

    cleaned
}
