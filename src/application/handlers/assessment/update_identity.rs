//! UpdateIdentityHandler - Command handler for intake details.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

/// Command to set the respondent's name and company.
#[derive(Debug, Clone)]
pub struct UpdateIdentityCommand {
    pub assessment_id: AssessmentId,
    pub name: String,
    pub company: String,
}

/// Handler for intake updates.
pub struct UpdateIdentityHandler {
    store: Arc<dyn AssessmentStore>,
}

impl UpdateIdentityHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: UpdateIdentityCommand,
    ) -> Result<AssessmentSession, AssessmentError> {
        let mut session = load_session(self.store.as_ref(), cmd.assessment_id).await?;
        let expected_version = session.version();
        session.update_identity(&cmd.name, &cmd.company)?;
        self.store.update(&session, expected_version).await?;
        Ok(session)
    }
}
