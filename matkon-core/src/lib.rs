mod catalog;
mod error;
mod generate;
mod parse;
mod repair;
mod retry;
mod types;
mod validate;
pub mod vocab;

pub use catalog::IngredientCatalog;
pub use error::DraftError;
pub use generate::{GenerateError, TextGenerator};
pub use parse::{parse_draft, parse_ingredients};
pub use repair::repair_json;
pub use retry::{Retrying, RetryPolicy};
pub use types::{Ingredient, RecipeDraft, PLACEHOLDER_IMAGE, PLACEHOLDER_SENTINEL};
pub use validate::{validate_draft, validate_extracted};
