//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the state machine trait
//! that form the vocabulary of the assessment domain.

mod errors;
mod ids;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::AssessmentId;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
