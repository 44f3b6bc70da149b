//! Assessment command and query handlers.

mod create_assessment;
mod get_assessment;
mod get_catalog;
mod get_results;
mod record_answer;
mod restart_assessment;
mod result_exporter;
mod session_sweeper;
mod start_assessment;
mod submit_assessment;
mod update_identity;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_assessment::{CreateAssessmentCommand, CreateAssessmentHandler};
pub use get_assessment::{AssessmentDetails, GetAssessmentHandler, GetAssessmentQuery};
pub use get_catalog::{CatalogView, GetCatalogHandler, GetCatalogQuery};
pub use get_results::{GetResultsHandler, GetResultsQuery};
pub use record_answer::{RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult};
pub use restart_assessment::{RestartAssessmentCommand, RestartAssessmentHandler};
pub use result_exporter::{ResultExporter, DEFAULT_EXPORT_TIMEOUT};
pub use session_sweeper::{SessionSweeper, SessionSweeperConfig};
pub use start_assessment::{StartAssessmentCommand, StartAssessmentHandler};
pub use submit_assessment::{SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult};
pub use update_identity::{UpdateIdentityCommand, UpdateIdentityHandler};

use crate::domain::assessment::{AssessmentError, AssessmentSession};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

/// Loads a session or fails with `NotFound`.
pub(crate) async fn load_session(
    store: &dyn AssessmentStore,
    id: AssessmentId,
) -> Result<AssessmentSession, AssessmentError> {
    store
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AssessmentError::not_found(id))
}
