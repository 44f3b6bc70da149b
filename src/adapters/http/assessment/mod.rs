//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AnswerResponse, AssessmentResponse, CreateAssessmentRequest, ErrorResponse,
    RecordAnswerRequest, UpdateIdentityRequest,
};
pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
