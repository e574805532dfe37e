use std::time::Duration;

use matkon_core::RetryPolicy;

/// Tunables for the outer generation loop.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Total end-to-end attempts, including the first.
    pub attempts: u32,
    /// Pause between failed attempts.
    pub attempt_delay: Duration,
    /// Transient-overload retry budget for each backend call inside an
    /// attempt.
    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            attempt_delay: Duration::from_secs(2),
            retry: RetryPolicy::default(),
        }
    }
}
