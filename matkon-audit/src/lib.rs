//! Append-only audit trail for generation attempts.

mod event;
mod log;

pub use event::{hash_input, AuditEvent, AuditOutcome};
pub use log::{AuditError, AuditSink, JsonlAuditLog, MemoryAuditLog, DEFAULT_AUDIT_PATH};
