//! Custom error types for runway
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for runway operations
#[derive(Error, Debug)]
pub enum RunwayError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input (windows, dates, formats)
    #[error("Validation error: {0}")]
    Validation(String),

    /// The YNAB API answered with a non-success status
    #[error("YNAB API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level HTTP failures (DNS, TLS, timeouts)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Snapshot and settings files that cannot be read, parsed or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// No API token available for a run that needs the API
    #[error("YNAB token is required (pass --token or set YNAB_TOKEN).")]
    MissingToken,
}

impl RunwayError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came back from the API itself
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

impl From<std::io::Error> for RunwayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RunwayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for RunwayError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

/// Result type alias for runway operations
pub type RunwayResult<T> = Result<T, RunwayError>;
