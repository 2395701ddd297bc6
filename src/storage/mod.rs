//! Storage layer for runway
//!
//! JSON file helpers and the budget snapshot the forecast reads from.

pub mod file_io;
pub mod snapshot;

pub use snapshot::BudgetSnapshot;
