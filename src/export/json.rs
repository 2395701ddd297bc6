//! JSON Export functionality
//!
//! Machine-readable forecast output with schema versioning.

use crate::error::{RunwayError, RunwayResult};
use crate::services::{Forecast, RiskMap, SurplusEntry, TransferMove, UncoveredGroup};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A forecast as written by the structured output formats
///
/// Amounts are integer milliunits, as the YNAB API reports them.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub today: NaiveDate,
    pub windows: Vec<u32>,

    /// Accounts at risk, keyed by window
    pub risks: RiskMap,

    /// Cover moves planned at the longest window
    pub moves: Vec<TransferMove>,

    /// Drop dates the surplus pool could not cover
    pub uncovered: Vec<UncoveredGroup>,

    /// Surplus left on each source account after all moves
    pub surpluses: Vec<SurplusEntry>,
}

impl ForecastExport {
    pub fn from_forecast(forecast: &Forecast) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            today: forecast.today,
            windows: forecast.windows.clone(),
            risks: forecast.risks.clone(),
            moves: forecast.plan.moves.clone(),
            uncovered: forecast.plan.uncovered.clone(),
            surpluses: forecast.plan.surpluses.clone(),
        }
    }
}

/// Export a forecast as pretty-printed JSON
pub fn export_forecast_json<W: Write>(forecast: &Forecast, writer: &mut W) -> RunwayResult<()> {
    let export = ForecastExport::from_forecast(forecast);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| RunwayError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| RunwayError::Export(e.to_string()))?;
    Ok(())
}
