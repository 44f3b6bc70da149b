//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentStore` - Per-respondent session storage
//! - `ResultSink` - Append-only destination for completed results

mod assessment_store;
mod result_sink;

pub use assessment_store::AssessmentStore;
pub use result_sink::{PersistenceError, ResultSink};
