//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the forecast engine.

pub mod config;
pub mod fetch;
pub mod forecast;

pub use config::{handle_config_command, handle_init_command};
pub use fetch::{handle_fetch_command, FetchArgs};
pub use forecast::{handle_forecast_command, ForecastArgs, ReportKind};
