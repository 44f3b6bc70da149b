//! Assessment module - catalog, scoring, session lifecycle and export.
//!
//! # Module Organization
//!
//! - `style` - The four behavioral styles and their descriptors
//! - `catalog` - Question battery, scoring table and descriptor lookup
//! - `responses` - Respondent identity and answer slots
//! - `scoring` - Pure tally and dominant-style computation
//! - `phase` - Intake / Answering / Results state machine
//! - `session` - The `AssessmentSession` aggregate
//! - `export` - Flat export row for the persistence backend
//! - `report` - Results rendering payload

mod battery;
mod catalog;
mod errors;
mod export;
mod phase;
mod report;
mod responses;
mod scoring;
mod session;
mod style;

pub use catalog::{
    AnnotationConflict, AssessmentCatalog, CatalogError, ChoiceLetter, Question, ScoringTable,
    CHOICES_PER_QUESTION,
};
pub use errors::AssessmentError;
pub use export::{build_export_record, ExportRecord, EXPORT_TIMESTAMP_FORMAT};
pub use phase::AssessmentPhase;
pub use report::{ChartSlice, ResultMode, ResultsReport, StylePanel};
pub use responses::{Identity, ResponseSet, MISSING_IDENTITY};
pub use scoring::{compute_tally, resolve_dominant, DominantStyles, ScoreTally};
pub use session::{AssessmentOutcome, AssessmentSession};
pub use style::{Style, StyleDescriptor};
