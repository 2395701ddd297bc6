//! User settings for runway
//!
//! Persisted defaults for the budget to check, the day-windows, currency
//! display and API access. Command-line flags and environment variables
//! override these per run.

use serde::{Deserialize, Serialize};

use super::paths::RunwayPaths;
use crate::error::RunwayError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Default YNAB API base URL
pub const DEFAULT_API_BASE: &str = "https://api.ynab.com/v1";

/// Default look-ahead windows, in days
pub const DEFAULT_WINDOWS: [u32; 3] = [3, 7, 30];

/// User settings for runway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget to check; "last-used" lets the API pick
    #[serde(default = "default_budget_id")]
    pub budget_id: String,

    /// Day-windows to evaluate
    #[serde(default = "default_windows")]
    pub windows: Vec<u32>,

    /// Currency symbol for terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_budget_id() -> String {
    "last-used".to_string()
}

fn default_windows() -> Vec<u32> {
    DEFAULT_WINDOWS.to_vec()
}

fn default_currency() -> String {
    "£".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_id: default_budget_id(),
            windows: default_windows(),
            currency_symbol: default_currency(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Nothing is written; callers decide when to persist.
    pub fn load_or_default(paths: &RunwayPaths) -> Result<Self, RunwayError> {
        read_json(paths.settings_file()).map_err(|e| {
            RunwayError::Config(format!("Failed to load settings file: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RunwayPaths) -> Result<(), RunwayError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
