//! Configuration handling for the builder

use crate::export::DEFAULT_FILE_NAME;
use crate::state::Section;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Directory exported documents are written to
    pub export_dir: Option<PathBuf>,
    /// File name of the exported document
    pub export_file_name: Option<String>,
    /// Pretty-print exported JSON
    pub pretty_export: Option<bool>,
    /// Section shown after the splash screen (1-9)
    pub start_section: Option<usize>,
}

impl BuilderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "usecase-builder", "usecase-builder")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn export_file_name(&self) -> &str {
        self.export_file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME)
    }

    pub fn pretty_export(&self) -> bool {
        self.pretty_export.unwrap_or(true)
    }

    /// Configured start section; out-of-range numbers fall back to the first
    pub fn start_section(&self) -> Section {
        self.start_section
            .and_then(Section::from_number)
            .unwrap_or_default()
    }
}
