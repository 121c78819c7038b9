//! Plain-text rendering of ingredients, recipes and request state.

use larder_core::{IngredientStore, Recipe, RequestState};

/// Render one recipe as a text card.
///
/// Ingredients the user already has are listed first and marked.
pub fn render_recipe_card(recipe: &Recipe) -> String {
    let mut lines = vec![
        recipe.title.clone(),
        "=".repeat(recipe.title.chars().count()),
        recipe.description.clone(),
        format!("Prep: {} | Cook: {}", recipe.prep_time, recipe.cook_time),
        String::new(),
        "Ingredients".to_string(),
    ];

    lines.extend(
        recipe
            .ingredients
            .used
            .iter()
            .map(|item| format!("  - {item} (you have)")),
    );
    lines.extend(
        recipe
            .ingredients
            .additional
            .iter()
            .map(|item| format!("  - {item}")),
    );

    lines.push(String::new());
    lines.push("Instructions".to_string());
    lines.extend(
        recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| format!("  {}. {step}", i + 1)),
    );

    lines.join("\n")
}

/// Render the ingredient list with 1-based positions.
pub fn render_ingredients(ingredients: &IngredientStore) -> String {
    if ingredients.is_empty() {
        return "No ingredients yet. Try `add <name>` or `examples`.".to_string();
    }

    ingredients
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>3}. {name}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render whatever the request state currently shows.
pub fn render_state(state: &RequestState, has_ingredients: bool) -> String {
    match state {
        RequestState::Idle if has_ingredients => {
            "Type `generate` to discover what you can cook!".to_string()
        }
        RequestState::Idle => String::new(),
        RequestState::Loading => "Generating...".to_string(),
        RequestState::Failure(message) => format!("Oops! {message}"),
        RequestState::Success(recipes) if recipes.is_empty() => {
            "The model didn't suggest any recipes. Try different ingredients.".to_string()
        }
        RequestState::Success(recipes) => {
            let cards: Vec<String> = recipes.iter().map(render_recipe_card).collect();
            format!("Your Recipe Suggestions\n\n{}", cards.join("\n\n"))
        }
    }
}
