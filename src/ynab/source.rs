//! Where a forecast gets its budget snapshot from

use std::path::PathBuf;
use tracing::info;

use super::client::YnabClient;
use crate::error::RunwayResult;
use crate::storage::BudgetSnapshot;

/// A provider of budget snapshots
pub trait SnapshotSource {
    /// Load the accounts and schedules, with inactive entries removed
    fn load(&self) -> RunwayResult<BudgetSnapshot>;

    /// Human-readable origin, for logs
    fn describe(&self) -> String;
}

/// A snapshot saved earlier with `runway fetch`
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotSource for FileSource {
    fn load(&self) -> RunwayResult<BudgetSnapshot> {
        info!("Loading snapshot from {}", self.path.display());
        BudgetSnapshot::load(&self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// A live budget fetched over the API
#[derive(Debug)]
pub struct YnabSource {
    client: YnabClient,
    budget_id: String,
}

impl YnabSource {
    pub fn new(client: YnabClient, budget_id: impl Into<String>) -> Self {
        Self {
            client,
            budget_id: budget_id.into(),
        }
    }
}

impl SnapshotSource for YnabSource {
    fn load(&self) -> RunwayResult<BudgetSnapshot> {
        self.client.fetch_snapshot(&self.budget_id)
    }

    fn describe(&self) -> String {
        format!("budget {} at {}", self.budget_id, self.client.base_url())
    }
}
