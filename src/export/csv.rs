//! CSV Export functionality
//!
//! One flat table: risk rows for every window, then the planned moves, then
//! the uncovered groups. The `section` column tells them apart.

use crate::error::{RunwayError, RunwayResult};
use crate::models::Money;
use crate::services::Forecast;
use std::io::Write;

const HEADER: [&str; 7] = [
    "section", "window", "date", "account", "source", "amount", "balance",
];

/// Export a forecast to CSV
pub fn export_forecast_csv<W: Write>(forecast: &Forecast, writer: W) -> RunwayResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER).map_err(export_err)?;

    for (window, entries) in &forecast.risks {
        for entry in entries {
            csv.write_record([
                "risk".to_string(),
                window.to_string(),
                entry.drop_date.to_string(),
                entry.account_name.clone(),
                String::new(),
                decimal(entry.projected),
                decimal(entry.current),
            ])
            .map_err(export_err)?;
        }
    }

    for mv in &forecast.plan.moves {
        csv.write_record([
            "move".to_string(),
            forecast.horizon.to_string(),
            mv.covers_drop.to_string(),
            mv.to_name.clone(),
            mv.from_name.clone(),
            decimal(mv.amount),
            String::new(),
        ])
        .map_err(export_err)?;
    }

    for group in &forecast.plan.uncovered {
        csv.write_record([
            "uncovered".to_string(),
            forecast.horizon.to_string(),
            group.drop_date.to_string(),
            group.account_names(),
            String::new(),
            decimal(group.need),
            decimal(group.available),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(|e| RunwayError::Export(e.to_string()))?;
    Ok(())
}

fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.as_units())
}

fn export_err(e: csv::Error) -> RunwayError {
    RunwayError::Export(e.to_string())
}
