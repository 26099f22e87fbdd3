use serde_json::Value;

use crate::model::JsonObject;

/// Keys that mark an object as recipe data even without a usable `@type`.
const RECIPE_FIELDS: &[&str] = &["recipeIngredient", "ingredients", "recipeInstructions"];

/// Heuristic check that a JSON object describes a recipe.
///
/// The `@type` match is a substring match on the lowercased value, not an
/// exact comparison, so compound or array-valued types like
/// `["Recipe", "NewsArticle"]` are accepted. Objects without a recipe-like
/// type still pass if they carry any well-known recipe field, whatever the
/// field's value looks like.
pub fn is_recipe(candidate: &JsonObject) -> bool {
    let item_type = match candidate.get("@type") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    if item_type == "Recipe"
        || item_type == "FoodRecipe"
        || item_type.to_lowercase().contains("recipe")
    {
        return true;
    }

    RECIPE_FIELDS
        .iter()
        .any(|field| candidate.contains_key(*field))
}
