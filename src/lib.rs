//! runway - balance-risk forecasting for YNAB budgets
//!
//! Projects each account's balance forward from its scheduled transactions,
//! flags accounts that would go negative within a set of day-windows, and
//! suggests cover transfers from accounts with projected surplus.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration, path management and window parsing
//! - `error`: Custom error types
//! - `models`: Core data models (money, accounts, scheduled transactions)
//! - `storage`: Snapshot files and atomic JSON writes
//! - `services`: The forecast engine (occurrences, projection, risk, transfers)
//! - `ynab`: YNAB API client and snapshot sources
//! - `reports`: Plain-text reports
//! - `export`: JSON, YAML and CSV output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use runway::services::Forecast;
//! use runway::storage::BudgetSnapshot;
//!
//! let snapshot = BudgetSnapshot::load(Path::new("snapshot.json"))?;
//! let forecast = Forecast::run(&snapshot, &[3, 7, 30], today);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod ynab;

pub use error::RunwayError;
