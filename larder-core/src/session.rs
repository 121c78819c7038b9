//! Session state: the ingredient list plus the current generation request.
//!
//! A [`Session`] is the single owned state container behind the UI. Every user
//! action is a method on it, and every change to [`RequestState`] goes through
//! the transitions below:
//!
//! ```text
//! Idle / Success / Failure --generate, ingredients--> Loading
//! Idle / Success / Failure --generate, no ingredients--> Failure
//! Loading --resolved--> Success
//! Loading --rejected--> Failure
//! Loading --generate--> Loading (ignored)
//! ```

use crate::error::{GenerateError, NO_INGREDIENTS_MESSAGE};
use crate::generate::generate_recipes;
use crate::ingredients::IngredientStore;
use crate::llm::TextGenerationProvider;
use crate::types::Recipe;

/// Where the current generation attempt stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<Recipe>),
    Failure(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    /// Recipes from the last successful attempt; empty otherwise.
    pub fn recipes(&self) -> &[Recipe] {
        match self {
            RequestState::Success(recipes) => recipes,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// Handle for one in-flight generation.
///
/// Carries the ingredient snapshot the request was built from. Results are
/// only applied if the ticket is still the session's current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    id: u64,
    ingredients: Vec<String>,
}

impl GenerationTicket {
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

#[derive(Debug, Default)]
pub struct Session {
    ingredients: IngredientStore,
    state: RequestState,
    /// Id of the ticket whose result may still be applied.
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl Session {
    pub fn new(ingredients: IngredientStore) -> Self {
        Self {
            ingredients,
            ..Self::default()
        }
    }

    pub fn ingredients(&self) -> &IngredientStore {
        &self.ingredients
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// See [`IngredientStore::add`].
    pub fn add_ingredient(&mut self, name: &str) -> bool {
        self.ingredients.add(name)
    }

    /// See [`IngredientStore::remove`].
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        self.ingredients.remove(index)
    }

    /// Whether the generate action is enabled.
    pub fn can_generate(&self) -> bool {
        !self.state.is_loading() && !self.ingredients.is_empty()
    }

    /// Start a generation attempt.
    ///
    /// Returns `None` without touching state if one is already in flight. With
    /// no ingredients the session moves straight to `Failure` and returns
    /// `None`. Otherwise previous recipes or errors are cleared, the state
    /// becomes `Loading`, and the returned ticket must be passed back to
    /// [`Session::finish_generation`].
    pub fn begin_generation(&mut self) -> Option<GenerationTicket> {
        if self.state.is_loading() {
            tracing::debug!("Generation already in flight, ignoring trigger");
            return None;
        }

        if self.ingredients.is_empty() {
            self.state = RequestState::Failure(NO_INGREDIENTS_MESSAGE.to_string());
            return None;
        }

        let id = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(id);
        self.state = RequestState::Loading;

        Some(GenerationTicket {
            id,
            ingredients: self.ingredients.as_slice().to_vec(),
        })
    }

    /// Apply the outcome of a generation attempt.
    ///
    /// Returns false if the ticket is stale (the session was reset or a newer
    /// attempt started), in which case the result is dropped.
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<Recipe>, GenerateError>,
    ) -> bool {
        if self.in_flight != Some(ticket.id) {
            tracing::warn!(ticket = ticket.id, "Discarding result for stale generation");
            return false;
        }

        self.in_flight = None;
        self.state = match result {
            Ok(recipes) => RequestState::Success(recipes),
            Err(e) => RequestState::Failure(e.to_string()),
        };
        true
    }

    /// Run a full generation attempt against `provider`.
    pub async fn generate(&mut self, provider: &dyn TextGenerationProvider) -> &RequestState {
        if let Some(ticket) = self.begin_generation() {
            let result = generate_recipes(provider, ticket.ingredients()).await;
            self.finish_generation(ticket, result);
        }
        &self.state
    }

    /// Return to `Idle`, forgetting recipes, errors and any in-flight attempt.
    pub fn reset(&mut self) {
        self.in_flight = None;
        self.state = RequestState::Idle;
    }
}
