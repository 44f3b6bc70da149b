//! CreateAssessmentHandler - Command handler for opening a new assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentCatalog, AssessmentError, AssessmentSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

/// Command to open a new assessment, optionally pre-filling intake.
#[derive(Debug, Clone, Default)]
pub struct CreateAssessmentCommand {
    pub name: Option<String>,
    pub company: Option<String>,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<AssessmentCatalog>,
}

impl CreateAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<AssessmentCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(
        &self,
        cmd: CreateAssessmentCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = AssessmentSession::new(AssessmentId::new(), self.catalog.len());

        if cmd.name.is_some() || cmd.company.is_some() {
            session.update_identity(
                cmd.name.unwrap_or_default(),
                cmd.company.unwrap_or_default(),
            )?;
        }

        self.store.save(&session).await?;

        tracing::info!(assessment_id = %session.id(), "Assessment created");
        Ok(session)
    }
}
