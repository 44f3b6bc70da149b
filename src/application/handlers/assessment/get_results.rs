//! GetResultsHandler - Query handler for the results report.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentCatalog, AssessmentError, ResultsReport};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub assessment_id: AssessmentId,
}

pub struct GetResultsHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<AssessmentCatalog>,
}

impl GetResultsHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, catalog: Arc<AssessmentCatalog>) -> Self {
        Self { store, catalog }
    }

    /// # Errors
    ///
    /// - `NotFound` for an unknown id
    /// - `InvalidState` unless the session is in `Results`
    pub async fn handle(&self, query: GetResultsQuery) -> Result<ResultsReport, AssessmentError> {
        let session = load_session(self.store.as_ref(), query.assessment_id).await?;
        let outcome = session.outcome().ok_or_else(|| {
            AssessmentError::invalid_state(format!(
                "results are not available while in {} phase",
                session.phase()
            ))
        })?;
        Ok(ResultsReport::build(outcome, &self.catalog))
    }
}
