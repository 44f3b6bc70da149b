//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessmentDetails, CatalogView, CreateAssessmentCommand, CreateAssessmentHandler,
    GetAssessmentHandler, GetAssessmentQuery, GetCatalogHandler, GetCatalogQuery,
    GetResultsHandler, GetResultsQuery, RecordAnswerCommand, RecordAnswerHandler,
    RecordAnswerResult, RestartAssessmentCommand, RestartAssessmentHandler, ResultExporter,
    SessionSweeper, SessionSweeperConfig,
    StartAssessmentCommand, StartAssessmentHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler, SubmitAssessmentResult, UpdateIdentityCommand,
    UpdateIdentityHandler, DEFAULT_EXPORT_TIMEOUT,
};
