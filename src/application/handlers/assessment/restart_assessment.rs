//! RestartAssessmentHandler - Command handler for taking the assessment again.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

#[derive(Debug, Clone)]
pub struct RestartAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Handler that clears answers and results, keeping identity.
pub struct RestartAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl RestartAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RestartAssessmentCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = load_session(self.store.as_ref(), cmd.assessment_id).await?;
        let expected_version = session.version();
        let previous_phase = session.phase();
        session.restart()?;
        self.store.update(&session, expected_version).await?;

        tracing::info!(
            assessment_id = %session.id(),
            from = %previous_phase,
            attempt = session.attempt(),
            "Assessment restarted"
        );
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::assessment::test_support::{
        results_session, MockAssessmentStore,
    };
    use crate::domain::assessment::{AssessmentPhase, ResponseSet};

    #[tokio::test]
    async fn restart_from_results_clears_answers_and_export_flag() {
        let mut session = results_session();
        session.claim_export().unwrap();
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session));

        let restarted = RestartAssessmentHandler::new(store.clone())
            .handle(RestartAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(restarted.phase(), AssessmentPhase::Answering);
        assert_eq!(restarted.responses(), &ResponseSet::unanswered(18));
        assert!(!restarted.result_persisted());
        assert_eq!(restarted.identity().name(), "Ada");
        assert_eq!(store.stored(&id), Some(restarted));
    }

    #[tokio::test]
    async fn restart_from_blank_intake_is_rejected() {
        let session = AssessmentSession::new(AssessmentId::new(), 18);
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session));

        let result = RestartAssessmentHandler::new(store.clone())
            .handle(RestartAssessmentCommand { assessment_id: id })
            .await;

        assert!(matches!(result, Err(AssessmentError::Validation(_))));
        assert_eq!(store.update_count(), 0);
    }
}
