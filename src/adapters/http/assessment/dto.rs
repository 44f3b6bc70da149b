//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{
    AssessmentError, AssessmentPhase, AssessmentSession, ChoiceLetter, ResultsReport,
};
use crate::domain::foundation::ValidationError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Optional intake details supplied when opening an assessment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssessmentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIdentityRequest {
    pub name: String,
    pub company: String,
}

/// One selection. Both indices are 0-based.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_index: usize,
    pub choice_index: usize,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub phase: AssessmentPhase,
    pub name: String,
    pub company: String,
    pub can_start: bool,
    pub total_questions: usize,
    pub answered: usize,
    pub responses: Vec<Option<ChoiceLetter>>,
    /// 1-based numbers of unanswered questions.
    pub unanswered: Vec<usize>,
    pub result_persisted: bool,
    pub attempt: u32,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ResultsReport>,
}

impl AssessmentResponse {
    pub fn new(session: &AssessmentSession, results: Option<ResultsReport>) -> Self {
        Self {
            id: session.id().to_string(),
            phase: session.phase(),
            name: session.identity().name().to_string(),
            company: session.identity().company().to_string(),
            can_start: session.phase() == AssessmentPhase::Intake && session.identity().is_complete(),
            total_questions: session.responses().len(),
            answered: session.responses().answered_count(),
            responses: session.responses().letters().to_vec(),
            unanswered: session.responses().missing_numbers(),
            result_persisted: session.result_persisted(),
            attempt: session.attempt(),
            created_at: session.created_at().as_datetime().to_rfc3339(),
            updated_at: session.updated_at().as_datetime().to_rfc3339(),
            results,
        }
    }
}

impl From<&AssessmentSession> for AssessmentResponse {
    fn from(session: &AssessmentSession) -> Self {
        Self::new(session, None)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub assessment_id: String,
    pub question_number: usize,
    pub letter: ChoiceLetter,
    pub answered: usize,
    pub total_questions: usize,
}

/// Error body shared by every assessment endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&AssessmentError> for ErrorResponse {
    fn from(error: &AssessmentError) -> Self {
        let details = match error {
            AssessmentError::Validation(ValidationError::IncompleteResponses { missing }) => {
                Some(serde_json::json!({ "missing": missing }))
            }
            AssessmentError::Validation(err) => Some(serde_json::json!({ "field": err.field() })),
            _ => None,
        };
        Self {
            code: error.code().to_string(),
            message: error.message(),
            details,
        }
    }
}
