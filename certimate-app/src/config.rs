//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use certimate_core::error::{CoreError, CoreResult};
use certimate_core::i18n::Language;

/// Directory name under the platform config directory.
const APP_DIR: &str = "certimate";

/// Host configuration, read from `config.json`.
///
/// Missing keys take their default, so an empty object is a valid file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// UI language of labels and error messages.
    pub language: Language,
    /// Record store location.
    pub store_path: PathBuf,
    /// Default log filter (`RUST_LOG` syntax), overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            store_path: Self::default_dir().join("records.json"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// `<config dir>/certimate`, or `./certimate` when the platform has none.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.json")
    }

    /// Loads the configuration, falling back to defaults if the file is absent.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if the file cannot be read and
    /// `CoreError::SerializationError` if it is not valid JSON.
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::StorageError(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            CoreError::SerializationError(format!("Invalid config {}: {e}", path.display()))
        })
    }

    /// Writes the configuration, creating the parent directory.
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` on I/O failure.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }
        let raw = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(path, raw).map_err(|e| {
            CoreError::StorageError(format!("Failed to write {}: {e}", path.display()))
        })
    }
}
