//! RecordAnswerHandler - Command handler for a single answer selection.

use std::sync::Arc;

use super::load_session;
use crate::domain::assessment::{AssessmentError, AssessmentSession, ChoiceLetter};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentStore;

/// Command to select a choice for one question. Indices are 0-based.
#[derive(Debug, Clone)]
pub struct RecordAnswerCommand {
    pub assessment_id: AssessmentId,
    pub question_index: usize,
    pub choice_index: usize,
}

#[derive(Debug, Clone)]
pub struct RecordAnswerResult {
    pub session: AssessmentSession,
    pub letter: ChoiceLetter,
}

pub struct RecordAnswerHandler {
    store: Arc<dyn AssessmentStore>,
}

impl RecordAnswerHandler {
    pub fn new(store: Arc<dyn AssessmentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: RecordAnswerCommand,
    ) -> Result<RecordAnswerResult, AssessmentError> {
        let mut session = load_session(self.store.as_ref(), cmd.assessment_id).await?;
        let expected_version = session.version();
        let letter = session.select_answer(cmd.question_index, cmd.choice_index)?;
        self.store.update(&session, expected_version).await?;

        tracing::debug!(
            assessment_id = %session.id(),
            question = cmd.question_index + 1,
            letter = %letter,
            "Answer recorded"
        );
        Ok(RecordAnswerResult { session, letter })
    }
}
