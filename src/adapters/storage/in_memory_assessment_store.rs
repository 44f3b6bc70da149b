//! In-Memory Assessment Store Adapter
//!
//! Keeps active sessions in a process-local map. Sessions do not survive
//! a restart, which matches the single-sitting nature of an assessment.
//!
//! The map is bounded: once `max_sessions` is reached, saving a new
//! session evicts the least recently updated one. Idle sessions are
//! removed by `purge_idle`, driven by the session sweeper.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::AssessmentStore;

/// Default upper bound on concurrently held sessions.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// In-memory storage for assessment sessions
#[derive(Debug, Clone)]
pub struct InMemoryAssessmentStore {
    sessions: Arc<RwLock<HashMap<AssessmentId, AssessmentSession>>>,
    max_sessions: usize,
}

impl Default for InMemoryAssessmentStore {
    fn default() -> Self {
        Self::with_max_sessions(DEFAULT_MAX_SESSIONS)
    }
}

impl InMemoryAssessmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store holding at most `max_sessions` sessions (minimum 1).
    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id()) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Assessment already exists: {}", session.id()),
            ));
        }
        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| *s.updated_at())
                .map(|s| s.id());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                    tracing::warn!(assessment_id = %id, "Session store full, evicted oldest session");
                }
                None => break,
            }
        }
        sessions.insert(session.id(), session.clone());
        Ok(())
    }

    async fn update(
        &self,
        session: &AssessmentSession,
        expected_version: u64,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(&session.id()) {
            Some(existing) if existing.version() != expected_version => Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "expected version {}, found {}",
                    expected_version,
                    existing.version()
                ),
            )
            .with_detail("assessment_id", session.id().to_string())),
            Some(existing) => {
                *existing = session.clone();
                Ok(())
            }
            None => Err(not_found(&session.id())),
        }
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.sessions.read().await.len())
    }

    async fn purge_idle(&self, cutoff: &Timestamp) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.updated_at().is_after(cutoff));
        Ok(before - sessions.len())
    }
}

fn not_found(id: &AssessmentId) -> DomainError {
    DomainError::new(
        ErrorCode::AssessmentNotFound,
        format!("Assessment not found: {}", id),
    )
    .with_detail("assessment_id", id.to_string())
}
