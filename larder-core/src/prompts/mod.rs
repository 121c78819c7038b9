//! AI prompt templates.

pub mod recipe_ideas;

pub use recipe_ideas::{
    recipe_response_schema, render_recipe_ideas_prompt, RECIPE_IDEAS_PROMPT_NAME,
    RECIPE_IDEAS_SYSTEM_INSTRUCTION, RECIPE_IDEAS_TEMPERATURE,
};
