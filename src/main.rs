use std::sync::Arc;

use style_assessment::adapters::http::{api_router, AssessmentHandlers};
use style_assessment::adapters::persistence::build_result_sink;
use style_assessment::adapters::storage::InMemoryAssessmentStore;
use style_assessment::application::{ResultExporter, SessionSweeper, SessionSweeperConfig};
use style_assessment::config::AppConfig;
use style_assessment::domain::assessment::AssessmentCatalog;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let catalog = Arc::new(AssessmentCatalog::standard().clone());

    let sink = build_result_sink(&config.persistence)?;
    let exporter = ResultExporter::new(sink.clone())
        .with_timeout(config.persistence.timeout())
        .with_utc_offset(config.persistence.utc_offset());
    let store = Arc::new(InMemoryAssessmentStore::with_max_sessions(
        config.sessions.max_sessions,
    ));

    let sweeper = SessionSweeper::new(
        store.clone(),
        SessionSweeperConfig::default()
            .with_idle_ttl(config.sessions.idle_ttl())
            .with_sweep_interval(config.sessions.sweep_interval()),
    );
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let handlers = AssessmentHandlers::new(store, catalog.clone(), exporter);
    let app = api_router(handlers, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        result_sink = sink.name(),
        questions = catalog.len(),
        session_ttl_secs = config.sessions.idle_ttl_secs,
        "Style assessment server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper_task.await {
        tracing::warn!(error = %e, "Session sweeper task ended abnormally");
    }
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Production logs are JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
