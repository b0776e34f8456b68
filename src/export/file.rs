//! Export to a JSON file on disk

use super::{ExportError, ExportReceipt, ExportTarget};
use async_trait::async_trait;
use std::path::PathBuf;

/// Writes exports into a directory, creating it when missing
pub struct FileTarget {
    dir: PathBuf,
}

impl FileTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportTarget for FileTarget {
    async fn deliver(&self, file_name: &str, json: &str) -> Result<ExportReceipt, ExportError> {
        let path = self.dir.join(file_name);
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| ExportError::Io {
                path: self.dir.clone(),
                source,
            })?;
        tokio::fs::write(&path, json)
            .await
            .map_err(|source| ExportError::Io {
                path: path.clone(),
                source,
            })?;
        tracing::debug!("Wrote {} bytes to {}", json.len(), path.display());
        Ok(ExportReceipt {
            destination: path.display().to_string(),
            bytes: json.len(),
        })
    }
}
