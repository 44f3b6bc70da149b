//! SessionSweeper - Background service that drops abandoned sessions.
//!
//! Respondents often close the page mid-questionnaire. Any session not
//! updated within `idle_ttl` is removed from the store on the next sweep.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `idle_ttl` | 1h | Sessions untouched this long are removed |
//! | `sweep_interval` | 60s | How often the store is swept |
//!
//! ## Graceful Shutdown
//!
//! The sweeper listens on a watch channel and stops after the signal,
//! without a final sweep.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::AssessmentStore;

/// Configuration for the SessionSweeper service.
#[derive(Debug, Clone)]
pub struct SessionSweeperConfig {
    pub idle_ttl: Duration,
    pub sweep_interval: Duration,
}

impl Default for SessionSweeperConfig {
    fn default() -> Self {
        Self {
            idle_ttl: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl SessionSweeperConfig {
    pub fn with_idle_ttl(mut self, ttl: Duration) -> Self {
        self.idle_ttl = ttl;
        self
    }

    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}

/// Periodically purges idle sessions from an `AssessmentStore`.
pub struct SessionSweeper {
    store: Arc<dyn AssessmentStore>,
    config: SessionSweeperConfig,
}

impl SessionSweeper {
    pub fn new(store: Arc<dyn AssessmentStore>, config: SessionSweeperConfig) -> Self {
        Self { store, config }
    }

    /// Run sweeps until the shutdown signal flips to `true`.
    ///
    /// A failed sweep is logged and retried on the next tick.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.sweep_interval);
        interval.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::debug!("Session sweeper stopped");
                        return;
                    }
                }
                _ = interval.tick() => {
                    if let Err(e) = self.sweep_once().await {
                        tracing::warn!(error = %e, "Session sweep failed");
                    }
                }
            }
        }
    }

    /// Remove every session idle for longer than `idle_ttl`.
    pub async fn sweep_once(&self) -> Result<usize, DomainError> {
        let cutoff = Timestamp::now().earlier_by(self.config.idle_ttl);
        let removed = self.store.purge_idle(&cutoff).await?;
        if removed > 0 {
            tracing::info!(removed, "Purged idle assessment sessions");
        }
        Ok(removed)
    }
}
