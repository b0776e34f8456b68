//! Export to the system clipboard

use super::{ExportError, ExportReceipt, ExportTarget};
use async_trait::async_trait;

pub struct ClipboardTarget;

#[async_trait]
impl ExportTarget for ClipboardTarget {
    async fn deliver(&self, _file_name: &str, json: &str) -> Result<ExportReceipt, ExportError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(json)?;
        Ok(ExportReceipt {
            destination: "clipboard".to_string(),
            bytes: json.len(),
        })
    }
}
