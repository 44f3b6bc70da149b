//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `assessment` - Question catalog, scoring, session lifecycle and result export

pub mod assessment;
pub mod foundation;
