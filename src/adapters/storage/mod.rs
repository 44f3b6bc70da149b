//! Session storage adapters.

mod in_memory_assessment_store;

pub use in_memory_assessment_store::InMemoryAssessmentStore;
