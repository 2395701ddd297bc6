//! YAML Export functionality

use crate::error::{RunwayError, RunwayResult};
use crate::export::json::ForecastExport;
use crate::services::Forecast;
use std::io::Write;

/// Export a forecast to YAML
pub fn export_forecast_yaml<W: Write>(forecast: &Forecast, writer: &mut W) -> RunwayResult<()> {
    let export = ForecastExport::from_forecast(forecast);

    writeln!(writer, "# runway forecast")
        .map_err(|e| RunwayError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| RunwayError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| RunwayError::Export(e.to_string()))?;

    Ok(())
}
