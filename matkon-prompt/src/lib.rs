//! Prompt builders for the generation pipeline.
//!
//! Pure string assembly: every builder is deterministic in its inputs, embeds
//! the fixed vocabularies as explicit rules, and produces the same text no
//! matter how often an attempt is retried.

mod extraction;
mod recipe;
mod translation;

pub use extraction::extraction_prompt;
pub use recipe::recipe_prompt;
pub use translation::translation_prompt;
