//! Result sink adapters.
//!
//! - `InMemoryResultSink` - Captures rows in memory (tests, local runs)
//! - `FileResultSink` - Appends JSON lines to a local file
//! - `SheetsResultSink` - Appends rows to a Google Sheets spreadsheet

mod file;
mod in_memory;
mod sheets;

pub use file::FileResultSink;
pub use in_memory::InMemoryResultSink;
pub use sheets::{SheetsConfig, SheetsResultSink, DEFAULT_SHEETS_BASE_URL};

use secrecy::Secret;
use std::sync::Arc;

use crate::config::{PersistenceBackend, PersistenceConfig};
use crate::ports::{PersistenceError, ResultSink};

/// Builds the sink selected by `config.backend`.
///
/// # Errors
///
/// - `Unavailable` if the Sheets backend lacks settings or its client cannot be built
pub fn build_result_sink(config: &PersistenceConfig) -> Result<Arc<dyn ResultSink>, PersistenceError> {
    match config.backend {
        PersistenceBackend::Memory => Ok(Arc::new(InMemoryResultSink::with_capacity(
            config.memory_capacity,
        ))),
        PersistenceBackend::File => Ok(Arc::new(FileResultSink::new(&config.file_path))),
        PersistenceBackend::Sheets => {
            let spreadsheet_id = config
                .spreadsheet_id
                .clone()
                .ok_or_else(|| PersistenceError::unavailable("spreadsheet_id is not configured"))?;
            let token = config
                .access_token
                .clone()
                .unwrap_or_else(|| Secret::new(String::new()));
            let sheets = SheetsConfig::new(spreadsheet_id, token)
                .with_range(config.range.clone())
                .with_base_url(config.api_base_url.clone())
                .with_timeout(config.timeout());
            Ok(Arc::new(SheetsResultSink::new(sheets)?))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_by_default() {
        let sink = build_result_sink(&PersistenceConfig::default()).unwrap();
        assert_eq!(sink.name(), "memory");
    }

    #[test]
    fn file_backend_uses_configured_path() {
        let config = PersistenceConfig {
            backend: PersistenceBackend::File,
            ..Default::default()
        };
        assert_eq!(build_result_sink(&config).unwrap().name(), "file");
    }

    #[test]
    fn sheets_backend_requires_spreadsheet_id() {
        let config = PersistenceConfig {
            backend: PersistenceBackend::Sheets,
            ..Default::default()
        };
        assert!(matches!(
            build_result_sink(&config),
            Err(PersistenceError::Unavailable(_))
        ));

        let config = PersistenceConfig {
            backend: PersistenceBackend::Sheets,
            spreadsheet_id: Some("sheet-123".to_string()),
            access_token: Some(Secret::new("token".to_string())),
            ..Default::default()
        };
        assert_eq!(build_result_sink(&config).unwrap().name(), "sheets");
    }
}
