//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Commands
    CreateAssessmentCommand, CreateAssessmentHandler,
    RecordAnswerCommand, RecordAnswerHandler, RecordAnswerResult,
    RestartAssessmentCommand, RestartAssessmentHandler,
    StartAssessmentCommand, StartAssessmentHandler,
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
    UpdateIdentityCommand, UpdateIdentityHandler,
    // Queries
    AssessmentDetails, GetAssessmentHandler, GetAssessmentQuery,
    CatalogView, GetCatalogHandler, GetCatalogQuery,
    GetResultsHandler, GetResultsQuery,
    // Services
    ResultExporter, SessionSweeper, SessionSweeperConfig,
};
