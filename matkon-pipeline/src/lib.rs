//! End-to-end recipe generation pipeline.
//!
//! Wires the backend client, prompt builders, response repair, validation,
//! photo enrichment and audit logging together. All collaborators are passed
//! in by the embedding application; nothing here reaches for globals.

mod config;
mod error;
mod extractor;
mod generator;
mod image;

pub use config::PipelineConfig;
pub use error::{AttemptError, PipelineError};
pub use extractor::IngredientExtractor;
pub use generator::RecipeGenerator;
pub use image::ImageResolver;
