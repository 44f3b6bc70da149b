//! Google Sheets result sink.
//!
//! Appends each row through the Sheets v4 `values:append` endpoint with
//! `valueInputOption=USER_ENTERED`, so percentages and timestamps are
//! interpreted by the sheet the same way typed values would be.

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::domain::assessment::ExportRecord;
use crate::ports::{PersistenceError, ResultSink};

/// Default Sheets API host.
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com";

/// Configuration for the Sheets sink.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    /// A1 range the row is appended after, e.g. `Sheet1!A:A`.
    pub range: String,
    pub base_url: String,
    access_token: Secret<String>,
    pub timeout: Duration,
}

impl SheetsConfig {
    pub fn new(spreadsheet_id: impl Into<String>, access_token: Secret<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            range: "Sheet1!A:A".to_string(),
            base_url: DEFAULT_SHEETS_BASE_URL.to_string(),
            access_token,
            timeout: Duration::from_secs(5),
        }
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = range.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

#[derive(Debug, Serialize)]
struct AppendRequest<'a> {
    values: [&'a [String]; 1],
}

pub struct SheetsResultSink {
    config: SheetsConfig,
    client: Client,
    append_url: Url,
}

impl SheetsResultSink {
    /// Builds the HTTP client and resolves the append endpoint.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the base URL is invalid or the client cannot be built
    pub fn new(config: SheetsConfig) -> Result<Self, PersistenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PersistenceError::unavailable(format!("HTTP client: {}", e)))?;
        let append_url = Self::append_url(&config)?;

        Ok(Self {
            config,
            client,
            append_url,
        })
    }

    fn append_url(config: &SheetsConfig) -> Result<Url, PersistenceError> {
        let mut url = Url::parse(&config.base_url)
            .map_err(|e| PersistenceError::unavailable(format!("invalid base URL: {}", e)))?;
        let target = format!("{}:append", config.range);
        url.path_segments_mut()
            .map_err(|_| PersistenceError::unavailable("base URL cannot carry a path"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                config.spreadsheet_id.as_str(),
                "values",
                target.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("valueInputOption", "USER_ENTERED");
        Ok(url)
    }
}

#[async_trait]
impl ResultSink for SheetsResultSink {
    async fn append(&self, record: &ExportRecord) -> Result<(), PersistenceError> {
        let row = record.to_row();
        let body = AppendRequest {
            values: [row.as_slice()],
        };

        let response = self
            .client
            .post(self.append_url.clone())
            .bearer_auth(self.config.access_token())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PersistenceError::Timeout(self.config.timeout)
                } else if e.is_connect() {
                    PersistenceError::unavailable(format!("Connection failed: {}", e))
                } else {
                    PersistenceError::unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let error_body = response.text().await.unwrap_or_default();
        Err(PersistenceError::rejected(status.as_u16(), error_body))
    }

    fn name(&self) -> &'static str {
        "sheets"
    }
}
