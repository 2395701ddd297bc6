//! Export module for runway
//!
//! Structured renderings of a forecast:
//! - JSON: machine-readable, schema-versioned
//! - YAML: the same document, human-readable
//! - CSV: one flat table for spreadsheets

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_forecast_csv;
pub use json::{export_forecast_json, ForecastExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_forecast_yaml;

use clap::ValueEnum;
use std::io::Write;

use crate::error::RunwayResult;
use crate::services::Forecast;

/// Output format for forecast commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Text,
    Json,
    Yaml,
    Csv,
}

impl OutputFormat {
    pub fn is_structured(self) -> bool {
        self != Self::Text
    }
}

/// Write a forecast in one of the structured formats
///
/// `Text` writes nothing; the caller renders the reports itself.
pub fn export_forecast<W: Write>(
    forecast: &Forecast,
    format: OutputFormat,
    writer: &mut W,
) -> RunwayResult<()> {
    match format {
        OutputFormat::Text => Ok(()),
        OutputFormat::Json => export_forecast_json(forecast, writer),
        OutputFormat::Yaml => export_forecast_yaml(forecast, writer),
        OutputFormat::Csv => export_forecast_csv(forecast, writer),
    }
}
