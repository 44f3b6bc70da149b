//! In-memory result sink for tests and local runs.
//!
//! Holds at most `capacity` rows; once full, the oldest row is dropped to
//! make room for the next one.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::assessment::ExportRecord;
use crate::ports::{PersistenceError, ResultSink};

/// Rows kept when no capacity is configured.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1_000;

/// Captures appended records. Can be switched into a failing mode.
#[derive(Debug, Clone)]
pub struct InMemoryResultSink {
    records: Arc<Mutex<VecDeque<ExportRecord>>>,
    capacity: usize,
    failing: Arc<AtomicBool>,
}

impl Default for InMemoryResultSink {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MEMORY_CAPACITY)
    }
}

impl InMemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink keeping only the newest `capacity` rows (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::new())),
            capacity: capacity.max(1),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A sink whose every append fails with `Unavailable`.
    pub fn failing() -> Self {
        let sink = Self::default();
        sink.set_failing(true);
        sink
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of the retained records, oldest first.
    pub fn records(&self) -> Vec<ExportRecord> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ResultSink for InMemoryResultSink {
    async fn append(&self, record: &ExportRecord) -> Result<(), PersistenceError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(PersistenceError::unavailable("in-memory sink set to fail"));
        }
        let mut records = self
            .records
            .lock()
            .map_err(|_| PersistenceError::unavailable("record buffer poisoned"))?;
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::test_support::sample_record;

    #[tokio::test]
    async fn append_captures_records() {
        let sink = InMemoryResultSink::new();
        sink.append(&sample_record()).await.unwrap();
        sink.append(&sample_record()).await.unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[0].name, "Ada");
    }

    #[tokio::test]
    async fn full_sink_drops_oldest_rows() {
        let sink = InMemoryResultSink::with_capacity(2);
        let rows: Vec<_> = (0..3).map(|_| sample_record()).collect();
        for row in &rows {
            sink.append(row).await.unwrap();
        }

        let kept: Vec<_> = sink.records().into_iter().map(|r| r.assessment_id).collect();
        assert_eq!(kept, vec![rows[1].assessment_id, rows[2].assessment_id]);
    }

    #[tokio::test]
    async fn failing_sink_rejects_and_keeps_nothing() {
        let sink = InMemoryResultSink::failing();
        let result = sink.append(&sample_record()).await;

        assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
        assert!(sink.is_empty());

        sink.set_failing(false);
        sink.append(&sample_record()).await.unwrap();
        assert_eq!(sink.len(), 1);
    }
}
