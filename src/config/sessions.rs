//! Assessment session retention configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Limits on how long and how many sessions are kept in memory.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Sessions not updated for this many seconds are purged
    #[serde(default = "default_idle_ttl")]
    pub idle_ttl_secs: u64,

    /// Seconds between purge sweeps
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// Sessions held at once; the least recently updated is evicted beyond this
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

impl SessionConfig {
    pub fn idle_ttl(&self) -> Duration {
        Duration::from_secs(self.idle_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.idle_ttl_secs == 0 {
            return Err(ValidationError::InvalidSessionTtl);
        }
        if self.sweep_interval_secs == 0 || self.sweep_interval_secs > self.idle_ttl_secs {
            return Err(ValidationError::InvalidSweepInterval);
        }
        if self.max_sessions == 0 {
            return Err(ValidationError::InvalidSessionCapacity);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_ttl_secs: default_idle_ttl(),
            sweep_interval_secs: default_sweep_interval(),
            max_sessions: default_max_sessions(),
        }
    }
}

fn default_idle_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    60
}

fn default_max_sessions() -> usize {
    10_000
}
