use thiserror::Error;

use matkon_core::{DraftError, GenerateError};

/// Why a single end-to-end attempt failed.
#[derive(Debug, Error)]
pub enum AttemptError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Draft(#[from] DraftError),
}

/// Public failure surface of the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Every generation attempt failed; wraps the final attempt's error.
    #[error("generation failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: u32,
        #[source]
        source: AttemptError,
    },

    /// Single-shot operations propagate their one failure directly.
    #[error(transparent)]
    Attempt(#[from] AttemptError),
}
