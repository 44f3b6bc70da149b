//! Assessment store port.
//!
//! Holds one `AssessmentSession` per active respondent, keyed by
//! `AssessmentId`. Sessions are independent; implementations need no
//! cross-session coordination, but writes to a single session are
//! guarded by its `version` (compare-and-swap on `update`).

use crate::domain::assessment::AssessmentSession;
use crate::domain::foundation::{AssessmentId, DomainError, Timestamp};
use async_trait::async_trait;

/// Storage port for assessment sessions.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Save a new session.
    ///
    /// # Errors
    ///
    /// - `StorageError` if a session with the same id already exists
    async fn save(&self, session: &AssessmentSession) -> Result<(), DomainError>;

    /// Replace an existing session, provided the stored copy is still at
    /// `expected_version`.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the session doesn't exist
    /// - `ConcurrencyConflict` if the stored version differs from `expected_version`
    async fn update(
        &self,
        session: &AssessmentSession,
        expected_version: u64,
    ) -> Result<(), DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentSession>, DomainError>;

    /// Remove a session.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the session doesn't exist
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;

    /// Number of stored sessions.
    async fn count(&self) -> Result<usize, DomainError>;

    /// Drop every session not updated after `cutoff`. Returns how many were removed.
    async fn purge_idle(&self, cutoff: &Timestamp) -> Result<usize, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn AssessmentStore) {}
    }
}
