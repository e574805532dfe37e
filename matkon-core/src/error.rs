use thiserror::Error;

/// Failures turning raw model output into an accepted draft.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The output could not be parsed even after repair and fallback slicing.
    /// Carries the offending text for the audit trail.
    #[error("malformed model output: {reason}")]
    Malformed { raw: String, reason: String },

    /// An ingredient used a unit outside the allowed vocabulary.
    #[error("invalid unit \"{unit}\" for ingredient \"{ingredient}\"")]
    InvalidUnit { unit: String, ingredient: String },
}
