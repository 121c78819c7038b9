//! End-to-end session tests against a fake provider.
//!
//! These drive a [`Session`] the way the CLI does: edit the ingredient list,
//! trigger generation, and inspect the resulting request state.

use larder_core::{
    FakeProvider, GenerateError, IngredientStore, RequestState, Session,
    GENERATION_FAILED_MESSAGE, NO_INGREDIENTS_MESSAGE,
};

const TWO_RECIPES: &str = include_str!("fixtures/two_recipes.json");

#[tokio::test]
async fn test_idle_loading_success_with_two_recipes() {
    let provider = FakeProvider::with_response("Tomatoes, Chicken Breast, Garlic", TWO_RECIPES);
    let mut session = Session::new(IngredientStore::with_defaults());
    assert_eq!(session.state(), &RequestState::Idle);

    let ticket = session.begin_generation().expect("generation should start");
    assert_eq!(session.state(), &RequestState::Loading);

    let result = larder_core::generate_recipes(&provider, ticket.ingredients()).await;
    assert!(session.finish_generation(ticket, result));

    let recipes = session.state().recipes();
    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Tuscan Garlic Chicken Skillet");
    assert_eq!(recipes[1].prep_time, "15 minutes");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_trigger_while_in_flight_does_not_call_provider() {
    let provider = FakeProvider::with_sample_recipes();
    let mut session = Session::new(IngredientStore::with_defaults());

    let ticket = session.begin_generation().unwrap();
    assert!(!session.can_generate());

    // A second trigger while loading is ignored entirely.
    session.generate(&provider).await;
    assert_eq!(provider.call_count(), 0);
    assert!(session.state().is_loading());

    let result = larder_core::generate_recipes(&provider, ticket.ingredients()).await;
    session.finish_generation(ticket, result);
    assert_eq!(provider.call_count(), 1);
    assert!(session.can_generate());
}

#[tokio::test]
async fn test_malformed_response_clears_previous_recipes() {
    let mut session = Session::new(IngredientStore::with_defaults());

    session.generate(&FakeProvider::with_sample_recipes()).await;
    assert_eq!(session.state().recipes().len(), 2);

    let malformed = FakeProvider::new().with_default_response("```json\n{\"recipes\": [}\n```");
    session.generate(&malformed).await;

    assert_eq!(
        session.state(),
        &RequestState::Failure(GENERATION_FAILED_MESSAGE.to_string())
    );
    assert!(session.state().recipes().is_empty());
}

#[tokio::test]
async fn test_empty_list_never_reaches_provider() {
    let provider = FakeProvider::with_sample_recipes();
    let mut session = Session::new(IngredientStore::new());

    session.add_ingredient("   ");
    session.generate(&provider).await;

    assert_eq!(session.state().error(), Some(NO_INGREDIENTS_MESSAGE));
    assert_eq!(provider.call_count(), 0);
    assert!(larder_core::generate_recipes(&provider, &[])
        .await
        .unwrap()
        .is_empty());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn test_recover_after_failure() {
    let mut session = Session::new(IngredientStore::with_defaults());

    session.generate(&FakeProvider::failing("connection reset")).await;
    assert_eq!(
        session.state().error(),
        Some(GenerateError::Failed.to_string().as_str())
    );

    session.generate(&FakeProvider::with_sample_recipes()).await;
    assert!(session.state().error().is_none());
    assert_eq!(session.state().recipes().len(), 2);
}

#[tokio::test]
async fn test_edits_change_next_prompt() {
    let provider = FakeProvider::with_sample_recipes();
    let mut session = Session::new(IngredientStore::with_defaults());

    assert!(!session.add_ingredient("garlic"));
    assert!(session.add_ingredient("Bell Pepper"));
    session.remove_ingredient(1);
    session.generate(&provider).await;

    let request = provider.last_request().unwrap();
    assert!(request
        .prompt
        .contains("I have the following ingredients: Tomatoes, Garlic, Bell Pepper."));
}
