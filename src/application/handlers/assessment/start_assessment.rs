//! StartAssessmentHandler - Command handler for leaving intake.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

#[derive(Debug, Clone)]
pub struct StartAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Handler that moves a session from intake to answering.
pub struct StartAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
}

impl StartAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartAssessmentCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = load_session(self.store.as_ref(), cmd.assessment_id).await?;
        let expected_version = session.version();
        session.begin()?;
        self.store.update(&session, expected_version).await?;

        tracing::info!(assessment_id = %session.id(), "Assessment started");
        Ok(session)
    }
}
