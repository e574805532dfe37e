//! Matkon turns free-text requests into validated Hebrew recipe records.
//!
//! The pipeline prompts a generative backend for a recipe as JSON, repairs
//! the almost-JSON the model actually returns, enforces the unit vocabulary,
//! finds a photo when the model has none, and writes one audit record per
//! attempt. Everything is assembled from parts the embedding application
//! constructs and owns:
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use matkon::{
//!     GeminiClient, ImageResolver, IngredientCatalog, JsonlAuditLog, PipelineConfig,
//!     RecipeGenerator, SpoonacularClient, TextGenerator,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let backend: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_env()?);
//! let images = ImageResolver::new(backend.clone(), SpoonacularClient::from_env()?);
//! let audit = Arc::new(JsonlAuditLog::default());
//! let catalog = IngredientCatalog::new(vec!["עגבניה".to_string(), "בצל".to_string()]);
//!
//! let generator = RecipeGenerator::new(
//!     backend,
//!     images,
//!     audit,
//!     catalog,
//!     PipelineConfig::default(),
//! );
//! let draft = generator.generate(Some("שקשוקה חריפה")).await?;
//! println!("{}", draft.title);
//! # Ok(())
//! # }
//! ```

pub use matkon_audit::{
    hash_input, AuditError, AuditEvent, AuditOutcome, AuditSink, JsonlAuditLog,
    MemoryAuditLog, DEFAULT_AUDIT_PATH,
};
pub use matkon_core::{
    parse_draft, parse_ingredients, repair_json, validate_draft, validate_extracted, vocab,
    DraftError, GenerateError, Ingredient, IngredientCatalog, RecipeDraft, RetryPolicy,
    Retrying, TextGenerator, PLACEHOLDER_IMAGE, PLACEHOLDER_SENTINEL,
};
pub use matkon_pipeline::{
    AttemptError, ImageResolver, IngredientExtractor, PipelineConfig, PipelineError,
    RecipeGenerator,
};
pub use matkon_prompt::{extraction_prompt, recipe_prompt, translation_prompt};
pub use matkon_spoonacular::{SpoonacularClient, SpoonacularError};

#[cfg(feature = "gemini")]
pub use matkon_gemini::GeminiClient;
