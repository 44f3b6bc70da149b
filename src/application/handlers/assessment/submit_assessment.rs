//! SubmitAssessmentHandler - Scores a completed questionnaire.
//!
//! Flow:
//! 1. Load the session and submit it against the catalog
//! 2. Claim the export flag and save the session against the loaded version
//! 3. Build the export row and hand it to the `ResultExporter`
//! 4. Return the results report without waiting on persistence
//!
//! The export flag is claimed at dispatch, whatever the backend later
//! reports. A failed write is logged and never retried for this attempt.
//!
//! Two overlapping submits of the same session load the same version; only
//! the first save wins, the other gets `Conflict` and exports nothing. If the
//! save fails for any other reason the report is still returned, but the row
//! is not exported since the claim could not be recorded.

use std::sync::Arc;
use tokio::task::JoinHandle;

use super::{load_session, ResultExporter};
use crate::domain::assessment::{
    build_export_record, AssessmentCatalog, AssessmentError, AssessmentSession, ResultsReport,
};
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentStore, PersistenceError};

#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub assessment_id: AssessmentId,
}

#[derive(Debug)]
pub struct SubmitAssessmentResult {
    pub session: AssessmentSession,
    pub report: ResultsReport,
    /// Background export task, absent when the session could not be saved.
    /// Dropping it does not cancel the write.
    pub export: Option<JoinHandle<Result<(), PersistenceError>>>,
}

pub struct SubmitAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    catalog: Arc<AssessmentCatalog>,
    exporter: ResultExporter,
}

impl SubmitAssessmentHandler {
    pub fn new(
        store: Arc<dyn AssessmentStore>,
        catalog: Arc<AssessmentCatalog>,
        exporter: ResultExporter,
    ) -> Self {
        Self {
            store,
            catalog,
            exporter,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        let mut session = load_session(self.store.as_ref(), cmd.assessment_id).await?;
        let expected_version = session.version();

        let report = match session.submit(&self.catalog) {
            Ok(outcome) => ResultsReport::build(outcome, &self.catalog),
            Err(e) => {
                tracing::debug!(assessment_id = %cmd.assessment_id, error = %e, "Submit rejected");
                return Err(e);
            }
        };
        let scored = session.clone();
        session.claim_export()?;

        if let Err(e) = self.store.update(&session, expected_version).await {
            return match AssessmentError::from(e) {
                conflict @ AssessmentError::Conflict(_) => {
                    tracing::warn!(
                        assessment_id = %cmd.assessment_id,
                        "Submit lost a race with another update"
                    );
                    Err(conflict)
                }
                other => {
                    tracing::error!(
                        assessment_id = %cmd.assessment_id,
                        error = %other,
                        "Failed to save submitted session, result not exported"
                    );
                    Ok(SubmitAssessmentResult {
                        session: scored,
                        report,
                        export: None,
                    })
                }
            };
        }

        let record = build_export_record(&session, &self.catalog, self.exporter.recorded_at())?;
        let export = Some(self.exporter.dispatch(record));

        tracing::info!(
            assessment_id = %session.id(),
            attempt = session.attempt(),
            dominant_style = %report.dominant.label(),
            "Assessment submitted"
        );
        Ok(SubmitAssessmentResult {
            session,
            report,
            export,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::InMemoryResultSink;
    use crate::application::handlers::assessment::test_support::{
        answered_session, results_session, MockAssessmentStore, SlowSink,
    };
    use crate::domain::assessment::{AssessmentPhase, ResultMode, Style};
    use crate::domain::foundation::ValidationError;
    use std::time::Duration;

    fn handler(store: Arc<MockAssessmentStore>, exporter: ResultExporter) -> SubmitAssessmentHandler {
        SubmitAssessmentHandler::new(
            store,
            Arc::new(AssessmentCatalog::standard().clone()),
            exporter,
        )
    }

    #[tokio::test]
    async fn complete_submission_returns_report_and_exports_once() {
        let session = answered_session(0, &[]);
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session));
        let sink = InMemoryResultSink::new();

        let result = handler(store.clone(), ResultExporter::new(Arc::new(sink.clone())))
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();
        result.export.unwrap().await.unwrap().unwrap();

        assert_eq!(result.report.mode, ResultMode::Single);
        assert_eq!(result.report.dominant.styles(), &[Style::Analytical]);

        let stored = store.stored(&id).unwrap();
        assert_eq!(stored.phase(), AssessmentPhase::Results);
        assert!(stored.result_persisted());

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].assessment_id, id);
        assert_eq!(records[0].dominant_style, "Analytical");
    }

    #[tokio::test]
    async fn incomplete_submission_lists_missing_and_keeps_answers() {
        let session = answered_session(1, &[1, 17]);
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session.clone()));
        let sink = InMemoryResultSink::new();

        let result = handler(store.clone(), ResultExporter::new(Arc::new(sink.clone())))
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await;

        assert_eq!(
            result.unwrap_err(),
            AssessmentError::Validation(ValidationError::incomplete(vec![2, 18]))
        );
        assert_eq!(store.stored(&id), Some(session));
        assert_eq!(store.update_count(), 0);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn persistence_failure_does_not_change_the_report() {
        let ok_session = answered_session(3, &[]);
        let failing_session = answered_session(3, &[]);

        let ok = handler(
            Arc::new(MockAssessmentStore::with_session(ok_session.clone())),
            ResultExporter::new(Arc::new(InMemoryResultSink::new())),
        )
        .handle(SubmitAssessmentCommand {
            assessment_id: ok_session.id(),
        })
        .await
        .unwrap();

        let failing_store = Arc::new(MockAssessmentStore::with_session(failing_session.clone()));
        let failed = handler(
            failing_store.clone(),
            ResultExporter::new(Arc::new(InMemoryResultSink::failing())),
        )
        .handle(SubmitAssessmentCommand {
            assessment_id: failing_session.id(),
        })
        .await
        .unwrap();

        assert_eq!(ok.report, failed.report);
        assert!(failed.export.unwrap().await.unwrap().is_err());
        assert!(failing_store
            .stored(&failing_session.id())
            .unwrap()
            .result_persisted());
    }

    #[tokio::test]
    async fn slow_backend_does_not_delay_the_report() {
        let session = answered_session(2, &[]);
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session));
        let exporter = ResultExporter::new(Arc::new(SlowSink::new(Duration::from_secs(30))))
            .with_timeout(Duration::from_secs(60));

        let result = tokio::time::timeout(
            Duration::from_secs(1),
            handler(store, exporter).handle(SubmitAssessmentCommand { assessment_id: id }),
        )
        .await
        .expect("submit must not wait on persistence")
        .unwrap();

        assert_eq!(result.report.mode, ResultMode::Blend);
        let export = result.export.unwrap();
        assert!(!export.is_finished());
        export.abort();
    }

    #[tokio::test]
    async fn resubmitting_results_is_invalid_state() {
        let mut session = results_session();
        session.claim_export().unwrap();
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session));
        let sink = InMemoryResultSink::new();

        let result = handler(store, ResultExporter::new(Arc::new(sink.clone())))
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await;

        assert!(matches!(result, Err(AssessmentError::InvalidState(_))));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn overlapping_submits_export_exactly_once() {
        let session = answered_session(0, &[]);
        let id = session.id();
        let store = Arc::new(
            MockAssessmentStore::with_session(session).with_read_delay(Duration::from_millis(20)),
        );
        let sink = InMemoryResultSink::new();
        let submit = handler(store.clone(), ResultExporter::new(Arc::new(sink.clone())));

        let (first, second) = tokio::join!(
            submit.handle(SubmitAssessmentCommand { assessment_id: id }),
            submit.handle(SubmitAssessmentCommand { assessment_id: id }),
        );

        let (winner, loser) = match (first, second) {
            (Ok(winner), Err(loser)) | (Err(loser), Ok(winner)) => (winner, loser),
            other => panic!("expected one winner and one conflict, got {:?}", other),
        };
        assert!(matches!(loser, AssessmentError::Conflict(_)));
        winner.export.unwrap().await.unwrap().unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(store.update_count(), 1);
        assert!(store.stored(&id).unwrap().result_persisted());
    }

    #[tokio::test]
    async fn save_failure_still_returns_report_without_exporting() {
        let session = answered_session(0, &[]);
        let id = session.id();
        let store = Arc::new(MockAssessmentStore::with_session(session.clone()).failing_updates());
        let sink = InMemoryResultSink::new();

        let result = handler(store.clone(), ResultExporter::new(Arc::new(sink.clone())))
            .handle(SubmitAssessmentCommand { assessment_id: id })
            .await
            .unwrap();

        assert_eq!(result.report.mode, ResultMode::Single);
        assert_eq!(result.report.dominant.styles(), &[Style::Analytical]);
        assert!(result.export.is_none());
        assert_eq!(result.session.phase(), AssessmentPhase::Results);
        assert!(!result.session.result_persisted());

        tokio::task::yield_now().await;
        assert!(sink.is_empty());
        assert_eq!(store.stored(&id), Some(session));
    }
}
