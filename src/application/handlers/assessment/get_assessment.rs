//! GetAssessmentHandler - Query handler for a session and, once scored, its report.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{
    AssessmentCatalog, AssessmentError, AssessmentSession, ResultsReport,
};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

#[derive(Debug, Clone)]
pub struct AssessmentDetails {
    pub session: AssessmentSession,
    /// Present once the session is in `Results`.
    pub report: Option<ResultsReport>,
}

pub struct GetAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<AssessmentCatalog>,
}

impl GetAssessmentHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<AssessmentCatalog>) -> Self {
        Self { store, catalog }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<AssessmentDetails, AssessmentError> {
        let session = load_session(self.store.as_ref(), query.assessment_id).await?;
        let report = session
            .outcome()
            .map(|outcome| ResultsReport::build(outcome, &self.catalog));
        Ok(AssessmentDetails { session, report })
    }
}
