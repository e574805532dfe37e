use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Outcome payload of one generation attempt.
///
/// Serialized untagged: a success carries the produced value as-is, a failure
/// keeps the `{"error": …}` record shape. `Failure` must stay the first
/// variant so error records deserialize as themselves instead of falling
/// through to the catch-all `Value`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    Failure {
        error: String,
        /// Raw model output, when the failure happened after text came back.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },
    Success(Value),
}

impl AuditOutcome {
    pub fn success(value: Value) -> Self {
        AuditOutcome::Success(value)
    }

    pub fn failure(error: impl Into<String>) -> Self {
        AuditOutcome::Failure {
            error: error.into(),
            raw: None,
        }
    }

    pub fn failure_with_raw(error: impl Into<String>, raw: impl Into<String>) -> Self {
        AuditOutcome::Failure {
            error: error.into(),
            raw: Some(raw.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AuditOutcome::Failure { .. })
    }
}

/// One recorded generation attempt.
///
/// Events are append-only; the pipeline writes them and never reads them
/// back. `input_hash` lets operators correlate runs over the same input
/// without scanning full prompts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub kind: String,
    pub input_hash: String,
    pub input: String,
    pub output: AuditOutcome,
    pub model: String,
    pub latency_ms: u64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl AuditEvent {
    /// Build an event stamped now.
    pub fn new(
        kind: impl Into<String>,
        input: impl Into<String>,
        output: AuditOutcome,
        model: impl Into<String>,
        latency_ms: u64,
    ) -> Self {
        let input = input.into();
        Self {
            kind: kind.into(),
            input_hash: hash_input(&input),
            input,
            output,
            model: model.into(),
            latency_ms,
            created_at: Utc::now(),
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// SHA-256 hex digest of an input text.
pub fn hash_input(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
