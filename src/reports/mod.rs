//! Reports module for runway
//!
//! Plain-text renderings of a forecast: the per-window risk listing and the
//! cover transfer suggestions.

pub mod risk;
pub mod transfers;

pub use risk::{RiskReport, RiskSection};
pub use transfers::TransferReport;
