//! Forecast engine for runway
//!
//! Turns a snapshot of accounts and scheduled transactions into dated
//! occurrences, projects running balances, flags accounts at risk and plans
//! cover transfers. Everything here is synchronous and free of I/O.

pub mod forecast;
pub mod occurrence;
pub mod projection;
pub mod risk;
pub mod transfer;
pub mod window;

pub use forecast::Forecast;
pub use occurrence::{build_occurrences, Occurrence, OccurrenceDates, OccurrenceMap};
pub use projection::{calc_projection, Projection};
pub use risk::{any_at_risk, assess_risk, RiskEntry, RiskMap};
pub use transfer::{
    plan_transfers, split_allocation, AllocationState, DeficitEntry, GroupOutcome, SurplusEntry,
    TransferMove, TransferPlan, UncoveredGroup,
};
