//! Core data models for runway
//!
//! This module contains the data structures the forecast consumes: accounts,
//! scheduled transactions, money and IDs.

pub mod account;
pub mod ids;
pub mod money;
pub mod schedule;

pub use account::{Account, AccountType};
pub use ids::{AccountId, ScheduleId};
pub use money::Money;
pub use schedule::{Advance, Frequency, ScheduledSubtransaction, ScheduledTransaction};
