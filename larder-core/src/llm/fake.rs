//! Fake provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests and offline demos to run without network access or API keys.

use super::{GenerationRequest, LlmError, TextGenerationProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Two schema-conforming recipes built around the default ingredient list.
pub const SAMPLE_RECIPES_JSON: &str = r#"{
  "recipes": [
    {
      "title": "Garlic Chicken with Blistered Tomatoes",
      "description": "Golden seared chicken breast finished in a pan sauce of burst tomatoes and sweet garlic.",
      "ingredients": {
        "used": ["Chicken Breast", "Tomatoes", "Garlic"],
        "additional": ["Olive oil", "Salt", "Black pepper", "Fresh basil"]
      },
      "instructions": [
        "Season the chicken breasts on both sides with salt and pepper.",
        "Sear the chicken in olive oil over medium-high heat until golden, about 6 minutes per side, then set aside.",
        "Add sliced garlic and halved tomatoes to the pan and cook until the tomatoes burst.",
        "Return the chicken to the pan, spoon the sauce over, and finish with torn basil."
      ],
      "prepTime": "10 minutes",
      "cookTime": "20 minutes"
    },
    {
      "title": "Roasted Tomato and Garlic Soup",
      "description": "A silky, smoky soup made by roasting tomatoes and a whole head of garlic.",
      "ingredients": {
        "used": ["Tomatoes", "Garlic"],
        "additional": ["Olive oil", "Vegetable stock", "Salt"]
      },
      "instructions": [
        "Roast halved tomatoes and the garlic head at 200C for 35 minutes.",
        "Squeeze the garlic cloves into a pot with the tomatoes and stock.",
        "Simmer for 10 minutes, then blend until smooth and season to taste."
      ],
      "prepTime": "10 minutes",
      "cookTime": "45 minutes"
    }
  ]
}"#;

/// A fake provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered substring.
/// If no match is found, returns the default response or an error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Ordered (prompt substring, response) pairs; first match wins.
    responses: Vec<(String, String)>,
    /// Default response if no match found
    default_response: Option<String>,
    /// When set, every call fails with this message.
    failure: Option<String>,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Create a FakeProvider that answers every prompt with [`SAMPLE_RECIPES_JSON`].
    pub fn with_sample_recipes() -> Self {
        Self::new().with_default_response(SAMPLE_RECIPES_JSON)
    }

    /// Create a FakeProvider whose every call fails.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of `generate` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TextGenerationProvider for FakeProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(request.clone());

        if let Some(message) = &self.failure {
            return Err(LlmError::RequestFailed(message.clone()));
        }

        // Find first matching pattern (case-insensitive)
        let prompt_lower = request.prompt.to_lowercase();
        if let Some((_, response)) = self
            .responses
            .iter()
            .find(|(pattern, _)| prompt_lower.contains(&pattern.to_lowercase()))
        {
            return Ok(response.clone());
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                request.prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
