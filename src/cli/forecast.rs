//! CLI commands for forecasting
//!
//! `check`, `risk` and `transfers` share one set of flags and one pipeline:
//! pick a snapshot source, run the forecast, render it.

use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::{parse_windows, validate_windows, Settings};
use crate::error::{RunwayError, RunwayResult};
use crate::export::{export_forecast, OutputFormat};
use crate::reports::{RiskReport, TransferReport};
use crate::services::Forecast;
use crate::ynab::{ApiToken, FileSource, SnapshotSource, YnabClient, YnabSource};

/// Which part of the forecast to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Risk listing followed by transfer suggestions
    Check,
    Risk,
    Transfers,
}

/// Flags shared by the forecast commands
#[derive(Args, Debug, Clone, Default)]
pub struct ForecastArgs {
    /// YNAB personal access token
    #[arg(long, env = "YNAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Budget ID to check (default: settings, then 'last-used')
    #[arg(long, env = "YNAB_BUDGET_ID")]
    pub budget_id: Option<String>,

    /// Comma-separated day windows to evaluate (default: 3,7,30)
    #[arg(long, env = "RUNWAY_WINDOWS")]
    pub windows: Option<String>,

    /// Read a snapshot saved by `runway fetch` instead of calling the API
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Forecast as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub today: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle `check`, `risk` and `transfers`
pub fn handle_forecast_command(
    settings: &Settings,
    kind: ReportKind,
    args: ForecastArgs,
) -> RunwayResult<()> {
    let rendered = run_forecast(settings, kind, &args)?;
    write_output(args.output.as_ref(), &rendered)
}

/// Run the full pipeline and return the rendered bytes
pub fn run_forecast(
    settings: &Settings,
    kind: ReportKind,
    args: &ForecastArgs,
) -> RunwayResult<Vec<u8>> {
    let source = snapshot_source(settings, args)?;
    let windows = resolve_windows(args.windows.as_deref(), settings)?;
    let today = resolve_today(args.today.as_deref())?;

    info!("Reading {}", source.describe());
    let snapshot = source.load()?;
    let forecast = Forecast::run(&snapshot, &windows, today);

    render(&forecast, kind, args.format, &settings.currency_symbol)
}

/// Render a forecast in the requested format
pub fn render(
    forecast: &Forecast,
    kind: ReportKind,
    format: OutputFormat,
    symbol: &str,
) -> RunwayResult<Vec<u8>> {
    if format.is_structured() {
        let mut buffer = Vec::new();
        export_forecast(forecast, format, &mut buffer)?;
        return Ok(buffer);
    }

    let mut text = String::new();
    if kind != ReportKind::Transfers {
        text.push_str(&RiskReport::generate(forecast).format_terminal(symbol));
    }
    if kind != ReportKind::Risk {
        text.push_str(&TransferReport::generate(forecast).format_terminal(symbol));
    }
    Ok(text.into_bytes())
}

fn snapshot_source(
    settings: &Settings,
    args: &ForecastArgs,
) -> RunwayResult<Box<dyn SnapshotSource>> {
    if let Some(path) = &args.snapshot {
        return Ok(Box::new(FileSource::new(path)));
    }

    let token = ApiToken::from_option(args.token.clone())?;
    let client = build_client(settings, token)?;
    let budget_id = args
        .budget_id
        .clone()
        .unwrap_or_else(|| settings.budget_id.clone());
    Ok(Box::new(YnabSource::new(client, budget_id)))
}

pub(crate) fn build_client(settings: &Settings, token: ApiToken) -> RunwayResult<YnabClient> {
    YnabClient::new(
        token,
        &settings.api_base_url,
        Duration::from_secs(settings.request_timeout_secs),
    )
}

/// Flag/env value if given, else the saved settings
pub fn resolve_windows(flag: Option<&str>, settings: &Settings) -> RunwayResult<Vec<u32>> {
    match flag {
        Some(raw) => parse_windows(raw),
        None => validate_windows(&settings.windows),
    }
}

/// Parse `--today`, defaulting to the local date
pub fn resolve_today(flag: Option<&str>) -> RunwayResult<NaiveDate> {
    match flag {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
            RunwayError::Validation(format!(
                "Invalid --today value: {} (expected YYYY-MM-DD)",
                raw
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

pub(crate) fn write_output(path: Option<&PathBuf>, bytes: &[u8]) -> RunwayResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, bytes).map_err(|e| {
                RunwayError::Io(format!("Failed to write {}: {}", path.display(), e))
            })?;
            info!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(bytes)?;
            handle.flush()?;
            Ok(())
        }
    }
}
