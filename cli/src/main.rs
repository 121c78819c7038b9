mod interactive;
mod view;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use larder_core::prompts::{
    recipe_response_schema, render_recipe_ideas_prompt, RECIPE_IDEAS_SYSTEM_INSTRUCTION,
};
use larder_core::{
    create_provider, AiConfig, IngredientStore, RecipeEnvelope, RequestState, Session,
    TextGenerationProvider,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::view::render_state;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Turn the ingredients you have into AI recipe ideas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate recipe ideas for a list of ingredients
    Generate {
        /// Ingredients on hand (default: Tomatoes, Chicken Breast, Garlic)
        ingredients: Vec<String>,
        /// Print recipes as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
    /// Edit an ingredient list and generate recipes interactively
    Interactive {
        /// Start with an empty list instead of the defaults
        #[arg(long)]
        empty: bool,
    },
    /// Print the system instruction and prompt that would be sent
    Prompt {
        /// Ingredients on hand (default: Tomatoes, Chicken Breast, Garlic)
        ingredients: Vec<String>,
    },
    /// Print the response schema the model must follow
    Schema,
}

/// Initialize logging to stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn ingredient_store(ingredients: Vec<String>) -> IngredientStore {
    if ingredients.is_empty() {
        IngredientStore::with_defaults()
    } else {
        ingredients.into_iter().collect()
    }
}

/// Load configuration and build the provider; a missing API key ends the program here.
fn provider_from_env() -> Result<Box<dyn TextGenerationProvider>> {
    let config = AiConfig::from_env().context("Failed to load AI configuration")?;
    let provider = create_provider(&config).context("Failed to create AI provider")?;
    tracing::debug!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        "Provider ready"
    );
    Ok(provider)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { ingredients, json } => {
            let provider = provider_from_env()?;
            generate(ingredient_store(ingredients), provider.as_ref(), json).await?;
        }
        Commands::Interactive { empty } => {
            let provider = provider_from_env()?;
            let store = if empty {
                IngredientStore::new()
            } else {
                IngredientStore::with_defaults()
            };
            interactive::run(Session::new(store), provider.as_ref()).await?;
        }
        Commands::Prompt { ingredients } => {
            let store = ingredient_store(ingredients);
            println!("System instruction:\n{}\n", RECIPE_IDEAS_SYSTEM_INSTRUCTION);
            println!("Prompt:\n{}", render_recipe_ideas_prompt(store.as_slice()));
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&recipe_response_schema())?);
        }
    }

    Ok(())
}

async fn generate(
    ingredients: IngredientStore,
    provider: &dyn TextGenerationProvider,
    json: bool,
) -> Result<()> {
    let mut session = Session::new(ingredients);

    match session.generate(provider).await {
        RequestState::Success(recipes) if json => {
            let envelope = RecipeEnvelope {
                recipes: recipes.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        RequestState::Failure(message) => bail!("{message}"),
        state => println!("{}", render_state(state, true)),
    }

    Ok(())
}
