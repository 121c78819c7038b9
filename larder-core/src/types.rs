use serde::{Deserialize, Serialize};

/// A recipe suggestion returned by the model.
///
/// Field names on the wire are camelCase (`prepTime`, `cookTime`) to match the
/// response schema handed to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: RecipeIngredients,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
}

/// Ingredient breakdown: what the user already has vs. what they still need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredients {
    /// Items from the user's list that the recipe uses.
    pub used: Vec<String>,
    /// Extra items (usually pantry staples) not in the user's list.
    pub additional: Vec<String>,
}

/// Top-level object the model must return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEnvelope {
    pub recipes: Vec<Recipe>,
}
