//! Forecast orchestration
//!
//! Builds the occurrence map once for the longest window and runs both the
//! risk assessment and the transfer plan over it.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::occurrence::build_occurrences;
use super::risk::{any_at_risk, assess_risk, RiskMap};
use super::transfer::{plan_transfers, TransferPlan};
use super::window;
use crate::storage::BudgetSnapshot;

/// Result of one forecast run
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub today: NaiveDate,
    /// Requested windows, deduplicated and ascending
    pub windows: Vec<u32>,
    /// Longest window, in days
    pub horizon: u32,
    pub risks: RiskMap,
    pub plan: TransferPlan,
}

impl Forecast {
    /// Run the forecast over a snapshot
    pub fn run(snapshot: &BudgetSnapshot, windows: &[u32], today: NaiveDate) -> Self {
        let windows = window::normalize(windows);
        let horizon = windows.last().copied().unwrap_or(0);

        let occurrences = build_occurrences(&snapshot.scheduled_transactions, horizon, today);
        let risks = assess_risk(&snapshot.accounts, &occurrences, &windows, today);
        let plan = plan_transfers(&snapshot.accounts, &occurrences, &windows, today);

        info!(
            "Forecast from {} over {:?}: {} move(s), {} uncovered group(s)",
            today,
            windows,
            plan.moves.len(),
            plan.uncovered.len()
        );

        Self {
            today,
            windows,
            horizon,
            risks,
            plan,
        }
    }

    /// Whether any account is at risk in any window
    pub fn has_risk(&self) -> bool {
        any_at_risk(&self.risks)
    }
}
