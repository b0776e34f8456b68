//! Document export
//!
//! A snapshot of the document is rendered to JSON and handed to an
//! [`ExportTarget`]. The file and clipboard targets are the two real
//! destinations.

mod clipboard;
mod error;
mod file;
mod json;
mod traits;

pub use clipboard::ClipboardTarget;
pub use error::ExportError;
pub use file::FileTarget;
pub use json::render;
pub use traits::{ExportReceipt, ExportTarget};

#[cfg(test)]
pub use traits::MockExportTarget;

use crate::config::BuilderConfig;
use crate::state::UseCaseDocument;

pub const DEFAULT_FILE_NAME: &str = "b2b-automation-use-case.json";

/// Renders documents with the configured name and formatting
#[derive(Debug, Clone)]
pub struct Exporter {
    file_name: String,
    pretty: bool,
}

impl Exporter {
    pub fn new(file_name: impl Into<String>, pretty: bool) -> Self {
        Self {
            file_name: file_name.into(),
            pretty,
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(config.export_file_name(), config.pretty_export())
    }

    /// Snapshot `doc` now and deliver it to `target`
    pub async fn export(
        &self,
        doc: &UseCaseDocument,
        target: &dyn ExportTarget,
    ) -> Result<ExportReceipt, ExportError> {
        let snapshot = doc.snapshot();
        let json = render(&snapshot, self.pretty)?;
        let receipt = target.deliver(&self.file_name, &json).await?;
        tracing::info!(
            "Exported {}/{} sections to {}",
            snapshot.completed_sections,
            snapshot.total_sections,
            receipt.destination
        );
        Ok(receipt)
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ScalarField;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_export_delivers_rendered_snapshot() {
        let mut doc = UseCaseDocument::default();
        doc.set_field(ScalarField::Title, "Invoice Bot");
        doc.set_field(ScalarField::Summary, "cuts manual work");

        let mut target = MockExportTarget::new();
        target
            .expect_deliver()
            .withf(|name, json| {
                let value: serde_json::Value = serde_json::from_str(json).unwrap();
                name == DEFAULT_FILE_NAME
                    && value["title"] == "Invoice Bot"
                    && value["completedSections"] == 1
                    && value["totalSections"] == 9
            })
            .times(1)
            .returning(|_, json| {
                Ok(ExportReceipt {
                    destination: "mock".to_string(),
                    bytes: json.len(),
                })
            });

        let receipt = Exporter::default().export(&doc, &target).await.unwrap();
        assert_eq!(receipt.destination, "mock");
    }

    #[tokio::test]
    async fn test_export_uses_configured_name() {
        let config = BuilderConfig {
            export_file_name: Some("invoice.json".to_string()),
            pretty_export: Some(false),
            ..Default::default()
        };
        let exporter = Exporter::from_config(&config);

        let mut target = MockExportTarget::new();
        target
            .expect_deliver()
            .withf(|name, json| name == "invoice.json" && !json.contains('\n'))
            .times(1)
            .returning(|_, _| {
                Ok(ExportReceipt {
                    destination: "mock".to_string(),
                    bytes: 0,
                })
            });
        exporter
            .export(&UseCaseDocument::default(), &target)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_export_propagates_target_error() {
        let mut target = MockExportTarget::new();
        target.expect_deliver().returning(|_, _| {
            Err(ExportError::Io {
                path: "x".into(),
                source: std::io::Error::other("disk full"),
            })
        });
        let err = Exporter::default()
            .export(&UseCaseDocument::default(), &target)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("disk full"));
    }

    #[tokio::test]
    async fn test_export_to_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let target = FileTarget::new(dir.path());
        let mut doc = UseCaseDocument::default();
        doc.set_field(ScalarField::Summary, "Automates invoice intake");

        Exporter::default().export(&doc, &target).await.unwrap();
        let written = std::fs::read_to_string(dir.path().join(DEFAULT_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["summary"], "Automates invoice intake");
    }
}
