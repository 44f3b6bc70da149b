//! Hand-written port doubles shared by the assessment handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::domain::assessment::{
    build_export_record, AssessmentCatalog, AssessmentSession, ExportRecord,
};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AssessmentStore, PersistenceError, ResultSink};

pub(crate) struct MockAssessmentStore {
    sessions: Mutex<HashMap<AssessmentId, AssessmentSession>>,
    updates: Mutex<u32>,
    fail_writes: bool,
    fail_updates: bool,
    read_delay: Option<Duration>,
}

impl MockAssessmentStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            updates: Mutex::new(0),
            fail_writes: false,
            fail_updates: false,
            read_delay: None,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::new()
        }
    }

    /// Saves succeed, every `update` fails with a storage error.
    pub(crate) fn failing_updates(self) -> Self {
        Self {
            fail_updates: true,
            ..self
        }
    }

    /// Each `find_by_id` sleeps first, so overlapping commands load the same version.
    pub(crate) fn with_read_delay(self, delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..self
        }
    }

    pub(crate) fn with_session(session: AssessmentSession) -> Self {
        let store = Self::new();
        store.sessions.lock().unwrap().insert(session.id(), session);
        store
    }

    pub(crate) fn stored(&self, id: &AssessmentId) -> Option<AssessmentSession> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    pub(crate) fn update_count(&self) -> u32 {
        *self.updates.lock().unwrap()
    }

    fn write_failure() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "Simulated write failure")
    }
}

#[async_trait]
impl AssessmentStore for MockAssessmentStore {
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(Self::write_failure());
        }
        self.sessions
            .lock()
            .unwrap()
            .insert(session.id(), session.clone());
        Ok(())
    }

    async fn update(
        &self,
        session: &AssessmentSession,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        if self.fail_writes || self.fail_updates {
            return Err(Self::write_failure());
        }
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get(&session.id()) {
            Some(existing) if existing.version() != expected_version => {
                return Err(DomainError::new(
                    ErrorCode::ConcurrencyConflict,
                    "Simulated version mismatch",
                ));
            }
            Some(_) => {}
            None => {
                return Err(DomainError::new(ErrorCode::AssessmentNotFound, "Simulated miss")
                    .with_detail("assessment_id", session.id().to_string()));
            }
        }
        *self.updates.lock().unwrap() += 1;
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentSession>, DomainError> {
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.stored(id))
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.sessions.lock().unwrap().remove(id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.lock().unwrap().len())
    }

    async fn purge_idle(&self, cutoff: &Timestamp) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at().is_after(cutoff));
        Ok(before - sessions.len())
    }
}

/// A sink that takes `delay` to accept each row.
pub(crate) struct SlowSink {
    delay: Duration,
}

impl SlowSink {
    pub(crate) fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ResultSink for SlowSink {
    async fn append(&self, _record: &ExportRecord) -> Result<(), PersistenceError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "slow"
    }
}

/// A session in `Intake` with a complete identity.
pub(crate) fn intake_session() -> AssessmentSession {
    let mut session = AssessmentSession::new(AssessmentId::new(), AssessmentCatalog::standard().len());
    session.update_identity("Ada", "Acme").unwrap();
    session
}

/// A session in `Answering` with the given choice for every question except `skip`.
pub(crate) fn answered_session(choice_index: usize, skip: &[usize]) -> AssessmentSession {
    let mut session = intake_session();
    session.begin().unwrap();
    for i in 0..AssessmentCatalog::standard().len() {
        if !skip.contains(&i) {
            session.select_answer(i, choice_index).unwrap();
        }
    }
    session
}

/// A submitted session, not yet exported.
pub(crate) fn results_session() -> AssessmentSession {
    let mut session = answered_session(0, &[]);
    session.submit(AssessmentCatalog::standard()).unwrap();
    session
}

pub(crate) fn results_record() -> ExportRecord {
    let session = results_session();
    build_export_record(
        &session,
        AssessmentCatalog::standard(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap(),
    )
    .unwrap()
}
