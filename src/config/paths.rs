//! Path management for runway
//!
//! ## Path Resolution Order
//!
//! 1. `RUNWAY_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/runway` on Linux,
//!    `~/Library/Application Support/runway` on macOS, `%APPDATA%\runway` on Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::RunwayError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "RUNWAY_CONFIG_DIR";

/// Manages all paths used by runway
#[derive(Debug, Clone)]
pub struct RunwayPaths {
    base_dir: PathBuf,
}

impl RunwayPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, RunwayError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RunwayPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location for `runway fetch` output
    pub fn snapshot_file(&self) -> PathBuf {
        self.base_dir.join("snapshot.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), RunwayError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RunwayError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if runway has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, RunwayError> {
    ProjectDirs::from("", "", "runway")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RunwayError::Config("Could not determine a config directory".into()))
}
