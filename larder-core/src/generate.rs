//! Recipe generation: ingredients in, validated recipes out.

use crate::error::GenerateError;
use crate::llm::{GenerationRequest, LlmError, TextGenerationProvider};
use crate::prompts::recipe_ideas::{
    recipe_response_schema, render_recipe_ideas_prompt, RECIPE_IDEAS_PROMPT_NAME,
    RECIPE_IDEAS_SYSTEM_INSTRUCTION, RECIPE_IDEAS_TEMPERATURE,
};
use crate::types::{Recipe, RecipeEnvelope};

/// Build the provider request for a list of ingredients.
pub fn build_recipe_request(ingredients: &[String]) -> GenerationRequest {
    GenerationRequest {
        prompt: render_recipe_ideas_prompt(ingredients),
        system_instruction: RECIPE_IDEAS_SYSTEM_INSTRUCTION.to_string(),
        response_schema: recipe_response_schema(),
        temperature: RECIPE_IDEAS_TEMPERATURE,
    }
}

/// Parse the model's raw text into recipes.
///
/// Surrounding whitespace is ignored. The payload must be a JSON object with a
/// `recipes` array whose entries carry every recipe field.
pub fn parse_recipes(raw: &str) -> Result<Vec<Recipe>, LlmError> {
    let envelope: RecipeEnvelope = serde_json::from_str(raw.trim())
        .map_err(|e| LlmError::ParseError(format!("Failed to parse recipe response: {}", e)))?;
    Ok(envelope.recipes)
}

/// Ask the provider for recipe ideas using the given ingredients.
///
/// An empty ingredient list returns no recipes without calling the provider.
/// Every provider or parse failure collapses into [`GenerateError::Failed`];
/// the cause is logged here and not returned.
pub async fn generate_recipes(
    provider: &dyn TextGenerationProvider,
    ingredients: &[String],
) -> Result<Vec<Recipe>, GenerateError> {
    if ingredients.is_empty() {
        return Ok(vec![]);
    }

    let request = build_recipe_request(ingredients);

    tracing::debug!(
        prompt_name = RECIPE_IDEAS_PROMPT_NAME,
        provider = provider.provider_name(),
        model = provider.model_name(),
        ingredient_count = ingredients.len(),
        "Requesting recipe ideas"
    );

    let result = provider
        .generate(&request)
        .await
        .and_then(|raw| parse_recipes(&raw));

    match result {
        Ok(recipes) => {
            tracing::debug!(recipe_count = recipes.len(), "Received recipe ideas");
            Ok(recipes)
        }
        Err(e) => {
            tracing::error!(
                provider = provider.provider_name(),
                error = %e,
                "Error generating recipes"
            );
            Err(GenerateError::Failed)
        }
    }
}
