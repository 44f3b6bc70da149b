//! Result export formatting.
//!
//! Turns a session in `Results` into the flat row appended to the
//! persistence backend, one row per completed attempt.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

use super::catalog::{AssessmentCatalog, ChoiceLetter};
use super::errors::AssessmentError;
use super::phase::AssessmentPhase;
use super::session::AssessmentSession;
use super::style::Style;
use crate::domain::foundation::{AssessmentId, Percentage};

/// Format of the `timestamp` column.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One completed attempt, ready for an append-only log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub assessment_id: AssessmentId,
    pub timestamp: String,
    pub name: String,
    pub company: String,
    pub dominant_style: String,
    pub scores: BTreeMap<Style, Percentage>,
    pub responses: Vec<Option<ChoiceLetter>>,
}

impl ExportRecord {
    /// Column names for a battery of `question_count` questions.
    pub fn header(question_count: usize) -> Vec<String> {
        let mut columns: Vec<String> = ["timestamp", "name", "company", "dominant_style"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        columns.extend(Style::ALL.iter().map(|s| format!("pct_{}", s.label())));
        columns.extend((1..=question_count).map(|n| format!("response_{}", n)));
        columns
    }

    /// Cell values in header order. Unanswered slots are empty strings.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = vec![
            self.timestamp.clone(),
            self.name.clone(),
            self.company.clone(),
            self.dominant_style.clone(),
        ];
        row.extend(Style::ALL.iter().map(|style| {
            self.scores
                .get(style)
                .copied()
                .unwrap_or_default()
                .to_string()
        }));
        row.extend(
            self.responses
                .iter()
                .map(|slot| slot.map(|letter| letter.to_string()).unwrap_or_default()),
        );
        row
    }
}

/// Builds the export row for a session in `Results`.
///
/// Percentages are each style's count over the catalog's question count.
///
/// # Errors
///
/// - `InvalidState` unless the session is in `Results`
pub fn build_export_record(
    session: &AssessmentSession,
    catalog: &AssessmentCatalog,
    recorded_at: NaiveDateTime,
) -> Result<ExportRecord, AssessmentError> {
    let outcome = match (session.phase(), session.outcome()) {
        (AssessmentPhase::Results, Some(outcome)) => outcome,
        (phase, _) => {
            return Err(AssessmentError::invalid_state(format!(
                "cannot export results while in {} phase",
                phase
            )))
        }
    };

    let total = catalog.len() as u32;
    let scores = outcome
        .tally
        .iter()
        .map(|(style, count)| (style, Percentage::of(count, total)))
        .collect();

    Ok(ExportRecord {
        assessment_id: session.id(),
        timestamp: recorded_at.format(EXPORT_TIMESTAMP_FORMAT).to_string(),
        name: session.identity().export_name().to_string(),
        company: session.identity().export_company().to_string(),
        dominant_style: outcome.dominant.label(),
        scores,
        responses: session.responses().letters().to_vec(),
    })
}
