//! Assessment-specific error types.

use super::catalog::CatalogError;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ValidationError};

/// Errors surfaced by assessment commands and queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// No session with this id.
    NotFound(AssessmentId),
    /// Input failed a domain rule.
    Validation(ValidationError),
    /// Operation not allowed in the current phase.
    InvalidState(String),
    /// The result row was already handed to the persistence backend.
    AlreadyExported,
    /// Another request changed the session after it was loaded.
    Conflict(String),
    /// The catalog could not resolve a selection.
    Integrity(String),
    /// Storage or other infrastructure failure.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: AssessmentId) -> Self {
        AssessmentError::NotFound(id)
    }
    pub fn validation(err: ValidationError) -> Self {
        AssessmentError::Validation(err)
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AssessmentError::InvalidState(message.into())
    }
    pub fn already_exported() -> Self {
        AssessmentError::AlreadyExported
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        AssessmentError::Conflict(message.into())
    }
    pub fn integrity(message: impl Into<String>) -> Self {
        AssessmentError::Integrity(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Validation(err) => match err {
                ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
                ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
                ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
                ValidationError::IncompleteResponses { .. } => ErrorCode::IncompleteResponses,
            },
            AssessmentError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            AssessmentError::AlreadyExported => ErrorCode::AlreadyExported,
            AssessmentError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            AssessmentError::Integrity(_) => ErrorCode::CatalogLookupFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment not found: {}", id),
            AssessmentError::Validation(err) => err.to_string(),
            AssessmentError::InvalidState(msg) => format!("Invalid state: {}", msg),
            AssessmentError::AlreadyExported => "Results have already been recorded".to_string(),
            AssessmentError::Conflict(msg) => format!("Concurrent update: {}", msg),
            AssessmentError::Integrity(msg) => format!("Catalog integrity error: {}", msg),
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::Validation(err)
    }
}

impl From<CatalogError> for AssessmentError {
    fn from(err: CatalogError) -> Self {
        AssessmentError::Integrity(err.to_string())
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AssessmentNotFound => match err
                .details
                .get("assessment_id")
                .and_then(|id| id.parse::<AssessmentId>().ok())
            {
                Some(id) => AssessmentError::NotFound(id),
                None => AssessmentError::Infrastructure(err.to_string()),
            },
            ErrorCode::ConcurrencyConflict => AssessmentError::Conflict(err.message),
            ErrorCode::InvalidStateTransition => AssessmentError::InvalidState(err.message),
            ErrorCode::AlreadyExported => AssessmentError::AlreadyExported,
            ErrorCode::CatalogLookupFailed => AssessmentError::Integrity(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => {
                let field = err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                AssessmentError::Validation(ValidationError::invalid_format(field, err.message))
            }
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}
