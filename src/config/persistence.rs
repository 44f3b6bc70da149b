//! Result persistence configuration

use chrono::FixedOffset;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where completed results are appended.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceBackend {
    /// Keep rows in process memory.
    #[default]
    Memory,
    /// Append JSON lines to a local file.
    File,
    /// Append to a Google Sheets spreadsheet.
    Sheets,
}

/// Result persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    #[serde(default)]
    pub backend: PersistenceBackend,

    /// Rows retained by the `memory` backend before the oldest is dropped
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,

    /// Output file for the `file` backend
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,

    /// Target spreadsheet for the `sheets` backend
    pub spreadsheet_id: Option<String>,

    /// A1 range rows are appended after
    #[serde(default = "default_range")]
    pub range: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// OAuth bearer token for the Sheets API
    pub access_token: Option<Secret<String>>,

    /// Upper bound on one append, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Fixed zone for export timestamps; host local time when unset
    pub utc_offset_minutes: Option<i32>,
}

impl PersistenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured export zone, or `None` for host local time.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes.checked_mul(60)?))
    }

    fn has_access_token(&self) -> bool {
        self.access_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().is_empty())
    }

    /// Validate persistence configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidPersistenceTimeout);
        }
        if let Some(minutes) = self.utc_offset_minutes {
            if self.utc_offset().is_none() {
                return Err(ValidationError::InvalidUtcOffset(minutes));
            }
        }

        match self.backend {
            PersistenceBackend::Memory => {
                if self.memory_capacity == 0 {
                    return Err(ValidationError::InvalidMemoryCapacity);
                }
            }
            PersistenceBackend::File => {
                if self.file_path.as_os_str().is_empty() {
                    return Err(ValidationError::MissingRequired("PERSISTENCE__FILE_PATH"));
                }
            }
            PersistenceBackend::Sheets => {
                if self.spreadsheet_id.as_ref().map_or(true, |id| id.trim().is_empty()) {
                    return Err(ValidationError::MissingRequired("PERSISTENCE__SPREADSHEET_ID"));
                }
                if !self.has_access_token() {
                    return Err(ValidationError::MissingRequired("PERSISTENCE__ACCESS_TOKEN"));
                }
                if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
                    return Err(ValidationError::InvalidSheetsUrl);
                }
                if *environment == Environment::Production && !self.api_base_url.starts_with("https://") {
                    return Err(ValidationError::SheetsUrlMustBeHttps);
                }
            }
        }
        Ok(())
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::default(),
            memory_capacity: default_memory_capacity(),
            file_path: default_file_path(),
            spreadsheet_id: None,
            range: default_range(),
            api_base_url: default_api_base_url(),
            access_token: None,
            timeout_secs: default_timeout(),
            utc_offset_minutes: None,
        }
    }
}

fn default_memory_capacity() -> usize {
    1_000
}

fn default_file_path() -> PathBuf {
    PathBuf::from("data/results.jsonl")
}

fn default_range() -> String {
    "Sheet1!A:A".to_string()
}

fn default_api_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    5
}
