//! Budget snapshot
//!
//! The accounts and scheduled transactions one forecast run works from. The
//! on-disk form uses the same field names as the YNAB API so a fetched budget
//! can be saved and replayed offline.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::file_io::{read_json_required, write_json_atomic};
use crate::error::RunwayResult;
use crate::models::{Account, ScheduledTransaction};

/// Accounts and schedules fetched for one budget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    #[serde(default)]
    pub accounts: Vec<Account>,

    #[serde(default)]
    pub scheduled_transactions: Vec<ScheduledTransaction>,
}

impl BudgetSnapshot {
    pub fn new(accounts: Vec<Account>, scheduled_transactions: Vec<ScheduledTransaction>) -> Self {
        Self {
            accounts,
            scheduled_transactions,
        }
    }

    /// Drop closed or deleted accounts and deleted schedules
    pub fn without_inactive(mut self) -> Self {
        let accounts_before = self.accounts.len();
        let schedules_before = self.scheduled_transactions.len();

        self.accounts.retain(Account::is_open);
        self.scheduled_transactions.retain(|s| !s.deleted);

        debug!(
            "Filtered {} inactive account(s) and {} deleted schedule(s)",
            accounts_before - self.accounts.len(),
            schedules_before - self.scheduled_transactions.len()
        );
        self
    }

    /// Load a snapshot file, filtering inactive entries
    pub fn load(path: &Path) -> RunwayResult<Self> {
        let snapshot: Self = read_json_required(path)?;
        Ok(snapshot.without_inactive())
    }

    /// Save the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> RunwayResult<()> {
        write_json_atomic(path, self)
    }
}
