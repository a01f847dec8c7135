//! Settings persistence.

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use preflight_types::PerformanceSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the settings file inside the store directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Errors that can occur while persisting settings.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read the settings file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the settings file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete the settings file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to serialize settings.
    #[error("Failed to serialize settings: {0}")]
    SerializeJson(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Settings as written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSettings {
    /// The saved settings.
    pub settings: PerformanceSettings,
    /// When the settings were last saved.
    pub saved_at: DateTime<Utc>,
}

/// Loads and saves performance settings under a base directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    base_path: PathBuf,
    settings_path: PathBuf,
}

impl SettingsStore {
    /// Creates a store rooted at `base_path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| StoreError::CreateDir {
                path: base_path.clone(),
                source: e,
            })?;
        }
        let settings_path = base_path.join(SETTINGS_FILE);

        Ok(Self {
            base_path,
            settings_path,
        })
    }

    /// Returns the default store directory.
    ///
    /// - Linux: `~/.config/preflight/`
    /// - macOS: `~/Library/Application Support/preflight/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\preflight\config\`
    ///
    /// Falls back to `~/.preflight/` if the platform location cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "preflight").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.config_dir().to_path_buf()
        })
    }

    /// Creates a store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Returns the store directory.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the settings file.
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Loads the stored settings, if a readable and valid file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_stored(&self) -> Result<Option<StoredSettings>> {
        if !self.settings_path.exists() {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&self.settings_path).map_err(|e| StoreError::ReadFile {
                path: self.settings_path.clone(),
                source: e,
            })?;

        match serde_json::from_str::<StoredSettings>(&content) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                tracing::warn!(
                    path = %self.settings_path.display(),
                    error = %e,
                    "ignoring unparseable settings file"
                );
                Ok(None)
            }
        }
    }

    /// Loads the stored settings, or the defaults if none are stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load(&self) -> Result<PerformanceSettings> {
        let settings = self
            .load_stored()?
            .map_or_else(PerformanceSettings::default, |stored| stored.settings);
        tracing::debug!(path = %self.settings_path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    /// Saves settings, stamping them with the current time.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be serialized or written.
    pub fn save(&self, settings: &PerformanceSettings) -> Result<StoredSettings> {
        let stored = StoredSettings {
            settings: *settings,
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&stored)?;

        fs::write(&self.settings_path, json).map_err(|e| StoreError::WriteFile {
            path: self.settings_path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.settings_path.display(), "saved settings");
        Ok(stored)
    }

    /// Deletes the settings file so the defaults apply again.
    ///
    /// Returns `false` if there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be deleted.
    pub fn reset(&self) -> Result<bool> {
        if !self.settings_path.exists() {
            return Ok(false);
        }

        fs::remove_file(&self.settings_path).map_err(|e| StoreError::DeleteFile {
            path: self.settings_path.clone(),
            source: e,
        })?;
        Ok(true)
    }
}

/// Fallback directory when platform directories are unavailable.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".preflight")
}
