//! Result sink port - append-only destination for completed attempts.
//!
//! Writes are best-effort. Callers run them detached from the respondent's
//! request and only log failures.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::assessment::ExportRecord;

/// Port for appending export rows to a persistence backend.
///
/// # Contract
///
/// Implementations must:
/// - Append exactly one row per call, in `ExportRecord::to_row` order
/// - Never retry on their own; the caller decides what a failure means
/// - Bound their own network time where a network is involved
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Append one completed attempt.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the backend did not accept the row.
    async fn append(&self, record: &ExportRecord) -> Result<(), PersistenceError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

/// Failures writing to a persistence backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("persistence backend unavailable: {0}")]
    Unavailable(String),

    #[error("persistence backend rejected the row with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("persistence write timed out after {0:?}")]
    Timeout(Duration),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PersistenceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        PersistenceError::Unavailable(message.into())
    }

    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        PersistenceError::Rejected {
            status,
            body: body.into(),
        }
    }
}
