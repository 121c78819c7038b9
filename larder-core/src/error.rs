use thiserror::Error;

/// Message shown to the user when a generation attempt fails for any upstream reason.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate recipes. The model might be unable to process the request.";

/// Message shown when generation is triggered with no ingredients.
pub const NO_INGREDIENTS_MESSAGE: &str = "Please add at least one ingredient.";

/// User-facing failure of a recipe generation attempt.
///
/// The upstream cause is logged where it happens and deliberately not carried here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Failed,
}
