//! Occurrence generation
//!
//! Expands scheduled transactions into dated cash-flow events inside the
//! look-ahead horizon, grouped by account and sorted by date.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::window;
use crate::models::{AccountId, Frequency, Money, ScheduledTransaction};

/// One projected cash-flow event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub amount: Money,
}

impl Occurrence {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self { date, amount }
    }
}

/// Iterator over the due dates of one schedule inside `[today, today + horizon]`
///
/// Dates before `today` are walked past but never yielded. Iteration ends once
/// the cursor passes the horizon, or when the frequency has no next date or
/// its next date does not move forward.
#[derive(Debug, Clone)]
pub struct OccurrenceDates {
    cursor: Option<NaiveDate>,
    frequency: Frequency,
    today: NaiveDate,
    cutoff: NaiveDate,
}

impl OccurrenceDates {
    pub fn new(start: NaiveDate, frequency: Frequency, today: NaiveDate, horizon_days: u32) -> Self {
        Self {
            cursor: Some(start),
            frequency,
            today,
            cutoff: window::cutoff(today, horizon_days),
        }
    }
}

impl Iterator for OccurrenceDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        loop {
            let current = self.cursor?;
            if current > self.cutoff {
                self.cursor = None;
                return None;
            }

            self.cursor = match self.frequency.advance(current) {
                Some(next) if next > current => Some(next),
                _ => None,
            };

            if current >= self.today {
                return Some(current);
            }
        }
    }
}

/// Per-account occurrence lists, each sorted ascending by date
#[derive(Debug, Clone, Default)]
pub struct OccurrenceMap {
    by_account: HashMap<AccountId, Vec<Occurrence>>,
}

impl OccurrenceMap {
    /// Occurrences for an account, or an empty slice if it has none
    pub fn for_account(&self, account_id: &AccountId) -> &[Occurrence] {
        self.by_account
            .get(account_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the account has at least one occurrence in the horizon
    pub fn has_occurrences(&self, account_id: &AccountId) -> bool {
        !self.for_account(account_id).is_empty()
    }

    /// Number of accounts with occurrences
    pub fn account_count(&self) -> usize {
        self.by_account.len()
    }

    /// Total occurrences across all accounts
    pub fn occurrence_count(&self) -> usize {
        self.by_account.values().map(Vec::len).sum()
    }

    fn push(&mut self, account_id: AccountId, occurrence: Occurrence) {
        self.by_account.entry(account_id).or_default().push(occurrence);
    }

    fn sort(&mut self) {
        // Stable: same-day events keep schedule order
        for occurrences in self.by_account.values_mut() {
            occurrences.sort_by_key(|o| o.date);
        }
    }
}

/// Expand every schedule into occurrences within `[today, today + horizon_days]`
pub fn build_occurrences(
    schedules: &[ScheduledTransaction],
    horizon_days: u32,
    today: NaiveDate,
) -> OccurrenceMap {
    let mut map = OccurrenceMap::default();

    for schedule in schedules {
        let Some(account_id) = schedule.account_id else {
            debug!("Skipping schedule {} with no account", schedule.label());
            continue;
        };

        let amount = schedule.net_amount();
        if amount.is_zero() {
            continue;
        }

        if schedule.frequency == Frequency::Unrecognized {
            warn!(
                "Unrecognized frequency on schedule {}; treating it as a one-off",
                schedule.label()
            );
        }

        let dates = OccurrenceDates::new(schedule.date_next, schedule.frequency, today, horizon_days);
        for date in dates {
            map.push(account_id, Occurrence::new(date, amount));
        }
    }

    map.sort();
    debug!(
        "Built {} occurrences across {} accounts (horizon {} days)",
        map.occurrence_count(),
        map.account_count(),
        horizon_days
    );
    map
}
