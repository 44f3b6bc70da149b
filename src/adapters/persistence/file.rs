//! File result sink.
//!
//! Appends each row as one JSON array per line. Intended for development
//! and for hosts without access to the spreadsheet backend.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::assessment::ExportRecord;
use crate::ports::{PersistenceError, ResultSink};

#[derive(Debug, Clone)]
pub struct FileResultSink {
    path: PathBuf,
}

impl FileResultSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ResultSink for FileResultSink {
    async fn append(&self, record: &ExportRecord) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut line = serde_json::to_string(&record.to_row())?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
