//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    create_assessment, get_assessment, get_catalog, get_results, record_answer,
    restart_assessment, start_assessment, submit_assessment, update_identity, AssessmentHandlers,
};

/// Creates the assessment router. Mount it under `/api`.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/assessments", post(create_assessment))
        .route("/assessments/:id", get(get_assessment))
        .route("/assessments/:id/identity", put(update_identity))
        .route("/assessments/:id/start", post(start_assessment))
        .route("/assessments/:id/answers", put(record_answer))
        .route("/assessments/:id/submit", post(submit_assessment))
        .route("/assessments/:id/results", get(get_results))
        .route("/assessments/:id/restart", post(restart_assessment))
        .with_state(handlers)
}
