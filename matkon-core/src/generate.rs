use async_trait::async_trait;
use thiserror::Error;

/// Errors from a generative text backend call.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The backend is rate limited or overloaded and worth retrying.
    #[error("backend overloaded (HTTP {status})")]
    Overloaded { status: u16 },

    /// The backend rejected the request for any other reason.
    #[error("backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Request(String),

    /// A well-formed response carried no usable text.
    #[error("backend returned no text")]
    Empty,

    /// Required credentials or settings are missing.
    #[error("backend not configured: {0}")]
    NotConfigured(String),
}

impl GenerateError {
    /// Transient overload (HTTP 429/503) is the only retryable class;
    /// everything else fails the call outright.
    pub fn is_transient(&self) -> bool {
        matches!(self, GenerateError::Overloaded { .. })
    }
}

/// A generative text backend: prompt in, raw text out.
///
/// Implementations must be shareable across tasks; the pipeline holds them
/// behind an `Arc` and calls them concurrently.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    /// Model identifier recorded in audit events.
    fn model_name(&self) -> &str;
}
