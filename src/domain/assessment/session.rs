//! Assessment session aggregate.
//!
//! A session carries one respondent from intake through answering to
//! results, and back to answering on restart.
//!
//! # Invariants
//!
//! - `responses.len()` equals the catalog question count fixed at creation
//! - `outcome` is present exactly when `phase` is `Results`
//! - `result_persisted` is only ever set while in `Results`, at most once per attempt
//! - Identity survives restart; responses, outcome and the export flag do not
//! - `version` increases by one on every accepted mutation

use serde::Serialize;

use super::catalog::{AssessmentCatalog, ChoiceLetter};
use super::errors::AssessmentError;
use super::phase::AssessmentPhase;
use super::responses::{Identity, ResponseSet};
use super::scoring::{compute_tally, resolve_dominant, DominantStyles, ScoreTally};
use crate::domain::foundation::{AssessmentId, StateMachine, Timestamp, ValidationError};

/// Scores kept from a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentOutcome {
    pub tally: ScoreTally,
    pub dominant: DominantStyles,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSession {
    id: AssessmentId,
    identity: Identity,
    responses: ResponseSet,
    phase: AssessmentPhase,
    result_persisted: bool,
    outcome: Option<AssessmentOutcome>,
    /// Starts at 1 and increases on every restart.
    attempt: u32,
    /// Optimistic-locking counter, bumped by every mutation.
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl AssessmentSession {
    /// Creates a session in `Intake` with `question_count` unanswered slots.
    pub fn new(id: AssessmentId, question_count: usize) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            identity: Identity::default(),
            responses: ResponseSet::unanswered(question_count),
            phase: AssessmentPhase::Intake,
            result_persisted: false,
            outcome: None,
            attempt: 1,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from storage (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: AssessmentId,
        identity: Identity,
        responses: ResponseSet,
        phase: AssessmentPhase,
        result_persisted: bool,
        outcome: Option<AssessmentOutcome>,
        attempt: u32,
        version: u64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            identity,
            responses,
            phase,
            result_persisted,
            outcome,
            attempt,
            version,
            created_at,
            updated_at,
        }
    }

    // === Accessors ===

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn result_persisted(&self) -> bool {
        self.result_persisted
    }

    pub fn outcome(&self) -> Option<&AssessmentOutcome> {
        self.outcome.as_ref()
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Revision seen by the store; compared on every update.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // === Commands ===

    /// Replaces the respondent's name and company.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside `Intake`
    pub fn update_identity(
        &mut self,
        name: impl AsRef<str>,
        company: impl AsRef<str>,
    ) -> Result<(), AssessmentError> {
        self.ensure_phase(AssessmentPhase::Intake, "update identity")?;
        self.identity = Identity::new(name, company);
        self.touch();
        Ok(())
    }

    /// Moves from intake to answering.
    ///
    /// # Errors
    ///
    /// - `Validation(EmptyField)` if name or company is empty
    /// - `InvalidState` outside `Intake`
    pub fn begin(&mut self) -> Result<(), AssessmentError> {
        self.ensure_phase(AssessmentPhase::Intake, "begin")?;
        self.identity.validate()?;
        self.phase = self.phase.transition_to(AssessmentPhase::Answering)?;
        self.touch();
        Ok(())
    }

    /// Records the choice for one question, replacing any earlier selection.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside `Answering`
    /// - `Validation(OutOfRange)` for a bad question or choice index
    pub fn select_answer(
        &mut self,
        question_index: usize,
        choice_index: usize,
    ) -> Result<ChoiceLetter, AssessmentError> {
        self.ensure_phase(AssessmentPhase::Answering, "select an answer")?;
        let letter = self.responses.select(question_index, choice_index)?;
        self.touch();
        Ok(letter)
    }

    /// Scores the responses and moves to results.
    ///
    /// On any error the session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside `Answering`
    /// - `Validation(IncompleteResponses)` listing unanswered question numbers
    /// - `Integrity` if the catalog cannot score a selection
    pub fn submit(&mut self, catalog: &AssessmentCatalog) -> Result<&AssessmentOutcome, AssessmentError> {
        self.ensure_phase(AssessmentPhase::Answering, "submit")?;
        if self.responses.len() != catalog.len() {
            return Err(AssessmentError::integrity(format!(
                "session holds {} answer slots but the catalog has {} questions",
                self.responses.len(),
                catalog.len()
            )));
        }
        if !self.responses.is_complete() {
            return Err(ValidationError::incomplete(self.responses.missing_numbers()).into());
        }

        let tally = compute_tally(&self.responses, catalog)?;
        let dominant = resolve_dominant(&tally);
        let phase = self.phase.transition_to(AssessmentPhase::Results)?;

        self.phase = phase;
        self.touch();
        Ok(self.outcome.insert(AssessmentOutcome { tally, dominant }))
    }

    /// Clears answers and results and returns to answering. Identity is kept.
    ///
    /// Allowed from every phase; from `Answering` it is a clean re-take.
    ///
    /// # Errors
    ///
    /// - `Validation(EmptyField)` when restarting from `Intake` without a complete identity
    pub fn restart(&mut self) -> Result<(), AssessmentError> {
        if self.phase == AssessmentPhase::Intake {
            self.identity.validate()?;
        }
        let phase = self.phase.transition_to(AssessmentPhase::Answering)?;

        self.responses.clear();
        self.outcome = None;
        self.result_persisted = false;
        self.phase = phase;
        self.attempt += 1;
        self.touch();
        Ok(())
    }

    /// Marks the result row as handed to persistence.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside `Results`
    /// - `AlreadyExported` if this attempt was already claimed
    pub fn claim_export(&mut self) -> Result<(), AssessmentError> {
        self.ensure_phase(AssessmentPhase::Results, "export results")?;
        if self.result_persisted {
            return Err(AssessmentError::already_exported());
        }
        self.result_persisted = true;
        self.touch();
        Ok(())
    }

    fn ensure_phase(&self, expected: AssessmentPhase, action: &str) -> Result<(), AssessmentError> {
        if self.phase != expected {
            return Err(AssessmentError::invalid_state(format!(
                "cannot {} while in {} phase",
                action, self.phase
            )));
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Timestamp::now();
    }
}
