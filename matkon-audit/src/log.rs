use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;

use crate::AuditEvent;

/// Default log location, relative to the working directory.
pub const DEFAULT_AUDIT_PATH: &str = "output/ai_events.jsonl";

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("audit write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("audit record could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for audit events.
#[async_trait]
pub trait AuditSink: Send + Sync {
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditError>;
}

/// Append-only JSON-lines audit log.
///
/// Each record becomes one line written with a single `O_APPEND` write, so
/// concurrent pipelines interleave whole records; a read-modify-rewrite of
/// one big JSON array would lose events under the same load.
pub struct JsonlAuditLog {
    path: PathBuf,
}

impl JsonlAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for JsonlAuditLog {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIT_PATH)
    }
}

#[async_trait]
impl AuditSink for JsonlAuditLog {
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut line = serde_json::to_string(event)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// In-process sink for tests and embedders that persist events themselves.
#[derive(Default)]
pub struct MemoryAuditLog {
    events: Mutex<Vec<AuditEvent>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().expect("audit event lock").clone()
    }
}

#[async_trait]
impl AuditSink for MemoryAuditLog {
    async fn record(&self, event: &AuditEvent) -> Result<(), AuditError> {
        self.events
            .lock()
            .expect("audit event lock")
            .push(event.clone());
        Ok(())
    }
}
