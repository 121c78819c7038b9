//! Recipe ideas prompt: suggest dishes from the user's on-hand ingredients.

use serde_json::{json, Value};

/// Prompt name used in logs.
pub const RECIPE_IDEAS_PROMPT_NAME: &str = "recipe_ideas";

/// Sampling temperature for recipe generation.
pub const RECIPE_IDEAS_TEMPERATURE: f32 = 0.7;

pub const RECIPE_IDEAS_SYSTEM_INSTRUCTION: &str = "You are an expert chef who creates delicious and easy-to-follow recipes based on a list of available ingredients. Always be creative and suggest appealing dishes.";

/// Render the user prompt for the given ingredients.
pub fn render_recipe_ideas_prompt(ingredients: &[String]) -> String {
    format!(
        "I have the following ingredients: {ingredients}. Please generate 3 creative and delicious recipe ideas using these ingredients. You can suggest additional common pantry items if needed.",
        ingredients = ingredients.join(", ")
    )
}

/// Schema for a single recipe, in the provider's OpenAPI-subset format.
fn recipe_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The catchy name of the recipe."
            },
            "description": {
                "type": "STRING",
                "description": "A brief, appetizing description of the dish."
            },
            "ingredients": {
                "type": "OBJECT",
                "properties": {
                    "used": {
                        "type": "ARRAY",
                        "description": "Ingredients from the user's provided list that are used in this recipe.",
                        "items": { "type": "STRING" }
                    },
                    "additional": {
                        "type": "ARRAY",
                        "description": "Additional ingredients required for the recipe that were not in the user's list.",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["used", "additional"]
            },
            "instructions": {
                "type": "ARRAY",
                "description": "Step-by-step cooking instructions.",
                "items": { "type": "STRING" }
            },
            "prepTime": {
                "type": "STRING",
                "description": "Estimated preparation time, e.g., '15 minutes'."
            },
            "cookTime": {
                "type": "STRING",
                "description": "Estimated cooking time, e.g., '30 minutes'."
            }
        },
        "required": ["title", "description", "ingredients", "instructions", "prepTime", "cookTime"]
    })
}

/// Response schema the model output must conform to: `{ "recipes": [Recipe] }`.
pub fn recipe_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipes": {
                "type": "ARRAY",
                "description": "A list of 2-3 creative recipes.",
                "items": recipe_schema()
            }
        },
        "required": ["recipes"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt() {
        let prompt = render_recipe_ideas_prompt(&[
            "Tomatoes".to_string(),
            "Chicken Breast".to_string(),
            "Garlic".to_string(),
        ]);

        assert!(prompt.starts_with("I have the following ingredients: Tomatoes, Chicken Breast, Garlic."));
        assert!(prompt.contains("recipe ideas"));
        assert!(prompt.contains("pantry"));
    }

    #[test]
    fn test_schema_requires_every_recipe_field() {
        let schema = recipe_response_schema();
        assert_eq!(schema["required"], json!(["recipes"]));

        let recipe = &schema["properties"]["recipes"]["items"];
        let required: Vec<&str> = recipe["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(
            required,
            ["title", "description", "ingredients", "instructions", "prepTime", "cookTime"]
        );

        for field in &required {
            assert!(recipe["properties"].get(*field).is_some(), "{field} missing");
        }
        assert_eq!(
            recipe["properties"]["ingredients"]["required"],
            json!(["used", "additional"])
        );
    }
}
