//! Text generation provider abstraction.
//!
//! A provider takes a prompt, a system instruction, a response schema and a
//! temperature, and returns the model's raw text. Parsing that text into
//! recipes happens in [`crate::generate`], so any provider that honours the
//! schema can be swapped in.

mod fake;
mod gemini;

pub use fake::{FakeProvider, SAMPLE_RECIPES_JSON};
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::{AiConfig, ProviderKind};

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Prompt was blocked: {0}")]
    Blocked(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// A single schema-constrained generation call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
    /// Shape the JSON output must follow.
    pub response_schema: serde_json::Value,
    pub temperature: f32,
}

/// Trait for text generation providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for the API call and returning the model's text response.
#[async_trait]
pub trait TextGenerationProvider: Send + Sync + fmt::Debug {
    /// Run one generation and return the raw text payload.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Build the provider selected by `config`.
pub fn create_provider(config: &AiConfig) -> Result<Box<dyn TextGenerationProvider>, LlmError> {
    match config.provider {
        ProviderKind::Fake => Ok(Box::new(FakeProvider::with_sample_recipes())),
        ProviderKind::Gemini => {
            if config.api_key.is_empty() {
                return Err(LlmError::NotConfigured("API_KEY not set".to_string()));
            }
            Ok(Box::new(
                GeminiProvider::new(config.api_key.clone(), config.model.clone())
                    .with_base_url(config.base_url.clone()),
            ))
        }
    }
}
