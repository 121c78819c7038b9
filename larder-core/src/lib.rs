pub mod config;
pub mod error;
pub mod generate;
pub mod ingredients;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod types;

pub use config::{AiConfig, ConfigError, ProviderKind};
pub use error::{GenerateError, GENERATION_FAILED_MESSAGE, NO_INGREDIENTS_MESSAGE};
pub use generate::{build_recipe_request, generate_recipes, parse_recipes};
pub use ingredients::{IngredientStore, DEFAULT_INGREDIENTS, EXAMPLE_INGREDIENTS};
pub use llm::{
    create_provider, FakeProvider, GeminiProvider, GenerationRequest, LlmError,
    TextGenerationProvider,
};
pub use session::{GenerationTicket, RequestState, Session};
pub use types::{Recipe, RecipeEnvelope, RecipeIngredients};
