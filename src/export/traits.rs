//! Trait seam for export destinations

use super::ExportError;
use async_trait::async_trait;

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// File path or a short destination name
    pub destination: String,
    pub bytes: usize,
}

/// A destination for the serialized document.
///
/// Implemented by the file writer and the clipboard; mocked in app tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExportTarget: Send + Sync {
    async fn deliver(&self, file_name: &str, json: &str) -> Result<ExportReceipt, ExportError>;
}
