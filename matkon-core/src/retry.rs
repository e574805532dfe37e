use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{GenerateError, TextGenerator};

/// Fixed-delay retry budget for transient backend overload.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Total call budget, including the first attempt.
    pub attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_secs(10),
        }
    }
}

/// Wraps a backend so transient-overload failures are retried in place.
///
/// Only [`GenerateError::is_transient`] failures are retried: anything else
/// propagates immediately, and once the budget is spent the last error is
/// returned as-is. The same prompt is sent on every attempt.
pub struct Retrying {
    inner: Arc<dyn TextGenerator>,
    policy: RetryPolicy,
}

impl Retrying {
    pub fn new(inner: Arc<dyn TextGenerator>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl TextGenerator for Retrying {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let attempts = self.policy.attempts.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.inner.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(error) if error.is_transient() && attempt < attempts => {
                    tracing::warn!(
                        attempt,
                        delay_ms = self.policy.delay.as_millis() as u64,
                        error = %error,
                        "backend overloaded, retrying"
                    );
                    tokio::time::sleep(self.policy.delay).await;
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
