//! HTTP adapters - REST API implementations.
//!
//! `api_router` assembles the assessment endpoints under `/api` together with
//! the tracing, CORS and timeout layers every request passes through.

pub mod assessment;

pub use assessment::{assessment_routes, AssessmentHandlers};

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Environment, ServerConfig};

/// Builds the full application router.
pub fn api_router(handlers: AssessmentHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", assessment_routes(handlers))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

/// Explicit origins when configured. Without any, development is permissive
/// and other environments allow no cross-origin callers.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any);
    }

    if server.environment == Environment::Development {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
