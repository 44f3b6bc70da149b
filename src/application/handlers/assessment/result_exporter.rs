//! ResultExporter - Detached, best-effort delivery of export rows.
//!
//! The respondent never waits on the backend: `dispatch` spawns the write
//! and returns immediately. Failures are logged and otherwise dropped.

use chrono::{FixedOffset, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::assessment::ExportRecord;
use crate::domain::foundation::Timestamp;
use crate::ports::{PersistenceError, ResultSink};

/// Default bound on one append.
pub const DEFAULT_EXPORT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct ResultExporter {
    sink: Arc<dyn ResultSink>,
    timeout: Duration,
    utc_offset: Option<FixedOffset>,
}

impl ResultExporter {
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self {
            sink,
            timeout: DEFAULT_EXPORT_TIMEOUT,
            utc_offset: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Stamp rows in a fixed zone instead of host local time.
    pub fn with_utc_offset(mut self, offset: Option<FixedOffset>) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Wall-clock time used for the `timestamp` column.
    pub fn recorded_at(&self) -> NaiveDateTime {
        Timestamp::now().wall_clock(self.utc_offset)
    }

    /// Spawns the append and returns without waiting for it.
    ///
    /// The handle resolves to the write's outcome, already logged; callers
    /// on the respondent path drop it.
    pub fn dispatch(&self, record: ExportRecord) -> JoinHandle<Result<(), PersistenceError>> {
        let sink = Arc::clone(&self.sink);
        let timeout = self.timeout;

        tokio::spawn(async move {
            let result = match tokio::time::timeout(timeout, sink.append(&record)).await {
                Ok(result) => result,
                Err(_) => Err(PersistenceError::Timeout(timeout)),
            };

            match &result {
                Ok(()) => tracing::info!(
                    assessment_id = %record.assessment_id,
                    backend = sink.name(),
                    dominant_style = %record.dominant_style,
                    "Assessment result persisted"
                ),
                Err(e) => tracing::warn!(
                    assessment_id = %record.assessment_id,
                    backend = sink.name(),
                    error = %e,
                    "Failed to persist assessment result"
                ),
            }
            result
        })
    }
}
