//! Integration tests for the assessment HTTP API.
//!
//! Drives the full router (in-memory store, in-memory result sink) through
//! intake, answering, submission, results and restart.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use style_assessment::adapters::http::{api_router, AssessmentHandlers};
use style_assessment::adapters::persistence::InMemoryResultSink;
use style_assessment::adapters::storage::InMemoryAssessmentStore;
use style_assessment::application::ResultExporter;
use style_assessment::config::ServerConfig;
use style_assessment::domain::assessment::AssessmentCatalog;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    sink: InMemoryResultSink,
}

impl TestApp {
    fn new() -> Self {
        Self::with_sink(InMemoryResultSink::new())
    }

    fn with_sink(sink: InMemoryResultSink) -> Self {
        let handlers = AssessmentHandlers::new(
            Arc::new(InMemoryAssessmentStore::new()),
            Arc::new(AssessmentCatalog::standard().clone()),
            ResultExporter::new(Arc::new(sink.clone())),
        );
        Self {
            router: api_router(handlers, &ServerConfig::default()),
            sink,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Creates an assessment with identity filled in and moves it to answering.
    async fn started(&self) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/api/assessments",
                Some(json!({ "name": "Ada Lovelace", "company": "Analytical Engines" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_str().unwrap().to_string();

        let (status, body) = self.send("POST", &format!("/api/assessments/{}/start", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "answering");
        id
    }

    async fn answer_all(&self, id: &str, choice_index: usize, skip: &[usize]) {
        for question_index in (0..18).filter(|i| !skip.contains(i)) {
            let (status, _) = self
                .send(
                    "PUT",
                    &format!("/api/assessments/{}/answers", id),
                    Some(json!({ "question_index": question_index, "choice_index": choice_index })),
                )
                .await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    async fn wait_for_exports(&self, expected: usize) {
        for _ in 0..100 {
            if self.sink.len() >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("expected {} exports, found {}", expected, self.sink.len());
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn catalog_lists_eighteen_questions_with_four_clean_choices() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/api/catalog", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 18);
    assert_eq!(body["choices_per_question"], 4);
    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 18);
    for question in questions {
        let choices = question["choices"].as_array().unwrap();
        assert_eq!(choices.len(), 4);
        assert!(choices.iter().all(|c| !c.as_str().unwrap().ends_with(')')));
    }
}

// =============================================================================
// Full flow
// =============================================================================

#[tokio::test]
async fn all_first_choices_score_analytical_and_export_once() {
    let app = TestApp::new();
    let id = app.started().await;
    app.answer_all(&id, 0, &[]).await;

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "results");
    assert_eq!(body["result_persisted"], true);
    assert_eq!(body["results"]["mode"], "single");
    assert_eq!(body["results"]["dominant"], json!(["Analytical"]));
    assert_eq!(
        body["results"]["tally"],
        json!({ "Driver": 4, "Analytical": 6, "Amiable": 5, "Expressive": 3 })
    );

    app.wait_for_exports(1).await;
    let records = app.sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Ada Lovelace");
    assert_eq!(records[0].dominant_style, "Analytical");
    assert_eq!(records[0].to_row()[5], "33.3%");

    let (status, report) = app.send("GET", &format!("/api/assessments/{}/results", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["headline"], "Your Dominant Style is Analytical Style");
}

#[tokio::test]
async fn overlapping_submits_record_a_single_row() {
    let app = TestApp::new();
    let id = app.started().await;
    app.answer_all(&id, 0, &[]).await;

    let uri = format!("/api/assessments/{}/submit", id);
    let ((first, _), (second, _)) =
        tokio::join!(app.send("POST", &uri, None), app.send("POST", &uri, None));

    let mut statuses = vec![first, second];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);

    app.wait_for_exports(1).await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(app.sink.len(), 1);
}

#[tokio::test]
async fn all_third_choices_produce_a_blend() {
    let app = TestApp::new();
    let id = app.started().await;
    app.answer_all(&id, 2, &[]).await;

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["mode"], "blend");
    assert_eq!(body["results"]["dominant"], json!(["Analytical", "Amiable"]));
    assert_eq!(body["results"]["panels"].as_array().unwrap().len(), 2);

    app.wait_for_exports(1).await;
    assert_eq!(app.sink.records()[0].dominant_style, "Analytical & Amiable");
}

#[tokio::test]
async fn restart_allows_a_second_exported_attempt() {
    let app = TestApp::new();
    let id = app.started().await;
    app.answer_all(&id, 0, &[]).await;
    let (status, _) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/restart", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phase"], "answering");
    assert_eq!(body["attempt"], 2);
    assert_eq!(body["answered"], 0);
    assert_eq!(body["result_persisted"], false);
    assert_eq!(body["name"], "Ada Lovelace");

    app.answer_all(&id, 3, &[]).await;
    let (status, body) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["dominant"], json!(["Expressive"]));

    app.wait_for_exports(2).await;
    let styles: Vec<String> = app.sink.records().into_iter().map(|r| r.dominant_style).collect();
    assert_eq!(styles, vec!["Analytical", "Expressive"]);
}

// =============================================================================
// Rejections
// =============================================================================

#[tokio::test]
async fn incomplete_submission_lists_missing_questions() {
    let app = TestApp::new();
    let id = app.started().await;
    app.answer_all(&id, 1, &[2, 8]).await;

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "INCOMPLETE_RESPONSES");
    assert_eq!(body["details"]["missing"], json!([3, 9]));

    let (_, session) = app.send("GET", &format!("/api/assessments/{}", id), None).await;
    assert_eq!(session["phase"], "answering");
    assert_eq!(session["answered"], 16);
    assert!(app.sink.is_empty());
}

#[tokio::test]
async fn start_requires_name_and_company() {
    let app = TestApp::new();
    let (_, body) = app.send("POST", "/api/assessments", None).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert_eq!(body["can_start"], false);

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/start", id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "name");

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/assessments/{}/identity", id),
            Some(json!({ "name": "  Grace ", "company": "Navy" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Grace");
    assert_eq!(body["can_start"], true);
}

#[tokio::test]
async fn answering_before_start_conflicts() {
    let app = TestApp::new();
    let (_, body) = app.send("POST", "/api/assessments", None).await;
    let id = body["id"].as_str().unwrap();

    let (status, _) = app
        .send(
            "PUT",
            &format!("/api/assessments/{}/answers", id),
            Some(json!({ "question_index": 0, "choice_index": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn out_of_range_choice_is_bad_request() {
    let app = TestApp::new();
    let id = app.started().await;

    let (status, body) = app
        .send(
            "PUT",
            &format!("/api/assessments/{}/answers", id),
            Some(json!({ "question_index": 0, "choice_index": 4 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "choice_index");
}

#[tokio::test]
async fn results_before_submit_conflict() {
    let app = TestApp::new();
    let id = app.started().await;

    let (status, _) = app.send("GET", &format!("/api/assessments/{}/results", id), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let app = TestApp::new();

    let (status, body) = app
        .send("GET", "/api/assessments/6f1c1f5e-9a44-4d55-b3a1-2a8f4f0c7e11", None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "ASSESSMENT_NOT_FOUND");

    let (status, body) = app.send("GET", "/api/assessments/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid assessment ID");
}

// =============================================================================
// Export failures
// =============================================================================

#[tokio::test]
async fn failing_sink_does_not_block_results() {
    let app = TestApp::with_sink(InMemoryResultSink::failing());
    let id = app.started().await;
    app.answer_all(&id, 0, &[]).await;

    let (status, body) = app.send("POST", &format!("/api/assessments/{}/submit", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result_persisted"], true);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(app.sink.is_empty());

    let (status, _) = app.send("GET", &format!("/api/assessments/{}/results", id), None).await;
    assert_eq!(status, StatusCode::OK);
}
