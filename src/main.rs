use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use runway::cli::{
    handle_config_command, handle_fetch_command, handle_forecast_command, handle_init_command,
    FetchArgs, ForecastArgs, ReportKind,
};
use runway::config::{paths::RunwayPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "runway",
    author = "Kaylee Beyene",
    version,
    about = "Flag YNAB accounts that may go negative soon",
    long_about = "runway projects your YNAB account balances forward using scheduled \
                  transactions, lists accounts that dip below zero within each \
                  day-window, and suggests transfers from accounts with spare funds.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Flags for the default `check` run
    #[command(flatten)]
    forecast: ForecastArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Risk report followed by transfer suggestions (the default)
    Check(ForecastArgs),

    /// Accounts at risk per window
    Risk(ForecastArgs),

    /// Cover transfer suggestions for the longest window
    Transfers(ForecastArgs),

    /// Save accounts and scheduled transactions to a snapshot file
    Fetch(FetchArgs),

    /// Create the settings file with defaults
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = RunwayPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    match cli.command {
        Some(Commands::Check(args)) => handle_forecast_command(&settings, ReportKind::Check, args)?,
        Some(Commands::Risk(args)) => handle_forecast_command(&settings, ReportKind::Risk, args)?,
        Some(Commands::Transfers(args)) => {
            handle_forecast_command(&settings, ReportKind::Transfers, args)?
        }
        Some(Commands::Fetch(args)) => handle_fetch_command(&paths, &settings, args)?,
        Some(Commands::Init) => handle_init_command(&paths, &settings)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => handle_forecast_command(&settings, ReportKind::Check, cli.forecast)?,
    }

    Ok(())
}
