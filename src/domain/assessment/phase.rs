//! Assessment flow phases.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a respondent currently is in the assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    /// Collecting name and company.
    #[default]
    Intake,
    /// Answering the question battery.
    Answering,
    /// Viewing the computed results.
    Results,
}

impl AssessmentPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentPhase::Intake => "intake",
            AssessmentPhase::Answering => "answering",
            AssessmentPhase::Results => "results",
        }
    }
}

impl fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl StateMachine for AssessmentPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AssessmentPhase::*;
        matches!(
            (self, target),
            (Intake, Answering)
                | (Answering, Answering)
                | (Answering, Results)
                | (Results, Answering)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AssessmentPhase::*;
        match self {
            Intake => vec![Answering],
            Answering => vec![Answering, Results],
            Results => vec![Answering],
        }
    }
}
