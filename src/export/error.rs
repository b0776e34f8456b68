//! Export error type

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing or delivering an export
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(#[from] arboard::Error),
}
