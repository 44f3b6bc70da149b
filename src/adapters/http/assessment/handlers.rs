//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    GetCatalogHandler, GetCatalogQuery, GetResultsHandler, GetResultsQuery, RecordAnswerCommand,
    RecordAnswerHandler, RestartAssessmentCommand, RestartAssessmentHandler, ResultExporter,
    StartAssessmentCommand, StartAssessmentHandler, SubmitAssessmentCommand,
    SubmitAssessmentHandler, UpdateIdentityCommand, UpdateIdentityHandler,
};
use crate::domain::assessment::{AssessmentCatalog, AssessmentError};
use crate::domain::foundation::{AssessmentId, ValidationError};
use crate::ports::AssessmentStore;

use super::dto::{
    AnswerResponse, AssessmentResponse, CreateAssessmentRequest, ErrorResponse,
    RecordAnswerRequest, UpdateIdentityRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    create_handler: Arc<CreateAssessmentHandler>,
    identity_handler: Arc<UpdateIdentityHandler>,
    start_handler: Arc<StartAssessmentHandler>,
    answer_handler: Arc<RecordAnswerHandler>,
    submit_handler: Arc<SubmitAssessmentHandler>,
    restart_handler: Arc<RestartAssessmentHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    results_handler: Arc<GetResultsHandler>,
    catalog_handler: Arc<GetCatalogHandler>,
}

impl AssessmentHandlers {
    /// Wires every command and query handler against the same store and catalog.
    pub fn new(
        store: Arc<dyn AssessmentStore>,
        catalog: Arc<AssessmentCatalog>,
        exporter: ResultExporter,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateAssessmentHandler::new(store.clone(), catalog.clone())),
            identity_handler: Arc::new(UpdateIdentityHandler::new(store.clone())),
            start_handler: Arc::new(StartAssessmentHandler::new(store.clone())),
            answer_handler: Arc::new(RecordAnswerHandler::new(store.clone())),
            submit_handler: Arc::new(SubmitAssessmentHandler::new(
                store.clone(),
                catalog.clone(),
                exporter,
            )),
            restart_handler: Arc::new(RestartAssessmentHandler::new(store.clone())),
            get_handler: Arc::new(GetAssessmentHandler::new(store.clone(), catalog.clone())),
            results_handler: Arc::new(GetResultsHandler::new(store, catalog.clone())),
            catalog_handler: Arc::new(GetCatalogHandler::new(catalog)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/catalog - Questions and choices in presentation order
pub async fn get_catalog(State(handlers): State<AssessmentHandlers>) -> Response {
    let view = handlers.catalog_handler.handle(GetCatalogQuery);
    (StatusCode::OK, Json(view)).into_response()
}

/// POST /api/assessments - Open a new assessment in intake
pub async fn create_assessment(
    State(handlers): State<AssessmentHandlers>,
    body: Option<Json<CreateAssessmentRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = CreateAssessmentCommand {
        name: req.name,
        company: req.company,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(session) => (StatusCode::CREATED, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id - Current session state
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetAssessmentQuery { assessment_id }).await {
        Ok(details) => {
            let response = AssessmentResponse::new(&details.session, details.report);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /api/assessments/:id/identity - Edit name and company during intake
pub async fn update_identity(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<UpdateIdentityRequest>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateIdentityCommand {
        assessment_id,
        name: req.name,
        company: req.company,
    };

    match handlers.identity_handler.handle(cmd).await {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:id/start - Leave intake and begin answering
pub async fn start_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .start_handler
        .handle(StartAssessmentCommand { assessment_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /api/assessments/:id/answers - Select one choice for one question
pub async fn record_answer(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<RecordAnswerRequest>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RecordAnswerCommand {
        assessment_id,
        question_index: req.question_index,
        choice_index: req.choice_index,
    };

    match handlers.answer_handler.handle(cmd).await {
        Ok(result) => {
            let response = AnswerResponse {
                assessment_id: assessment_id.to_string(),
                question_number: req.question_index + 1,
                letter: result.letter,
                answered: result.session.responses().answered_count(),
                total_questions: result.session.responses().len(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:id/submit - Score the answers and export the result
///
/// The export runs in the background; the response never waits on it.
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .submit_handler
        .handle(SubmitAssessmentCommand { assessment_id })
        .await
    {
        Ok(result) => {
            let response = AssessmentResponse::new(&result.session, Some(result.report));
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id/results - Results report for a scored session
pub async fn get_results(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .results_handler
        .handle(GetResultsQuery { assessment_id })
        .await
    {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /api/assessments/:id/restart - Clear answers and answer again
pub async fn restart_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .restart_handler
        .handle(RestartAssessmentCommand { assessment_id })
        .await
    {
        Ok(session) => (StatusCode::OK, Json(AssessmentResponse::from(&session))).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

fn parse_assessment_id(raw: &str) -> Result<AssessmentId, Response> {
    raw.parse::<AssessmentId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid assessment ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: AssessmentError) -> Response {
    let status = match &error {
        AssessmentError::NotFound(_) => StatusCode::NOT_FOUND,
        AssessmentError::Validation(ValidationError::IncompleteResponses { .. }) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AssessmentError::Validation(_) => StatusCode::BAD_REQUEST,
        AssessmentError::InvalidState(_)
        | AssessmentError::AlreadyExported
        | AssessmentError::Conflict(_) => StatusCode::CONFLICT,
        AssessmentError::Integrity(_) | AssessmentError::Infrastructure(_) => {
            tracing::error!(error = %error, "assessment request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = match &error {
        AssessmentError::Infrastructure(_) => ErrorResponse::internal("Internal server error"),
        _ => ErrorResponse::from(&error),
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, ErrorCode};

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_assessment_error(AssessmentError::not_found(AssessmentId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn incomplete_responses_map_to_422() {
        let error = AssessmentError::from(ValidationError::incomplete(vec![1, 2]));
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn field_validation_maps_to_400() {
        let error = AssessmentError::from(ValidationError::out_of_range("choice_index", 0, 3, 4));
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn wrong_phase_maps_to_409() {
        let response = handle_assessment_error(AssessmentError::invalid_state("not in results"));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = handle_assessment_error(AssessmentError::AlreadyExported);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn concurrent_update_maps_to_409() {
        let response = handle_assessment_error(AssessmentError::conflict("expected version 4"));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_not_found_error_maps_to_404() {
        let id = AssessmentId::new();
        let error = AssessmentError::from(
            DomainError::new(ErrorCode::AssessmentNotFound, "gone")
                .with_detail("assessment_id", id.to_string()),
        );
        let response = handle_assessment_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn integrity_and_infrastructure_map_to_500() {
        let response = handle_assessment_error(AssessmentError::Integrity("bad table".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_assessment_error(AssessmentError::Infrastructure("disk".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let response = parse_assessment_id("nope").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(parse_assessment_id(&AssessmentId::new().to_string()).is_ok());
    }
}
