//! Risk assessment
//!
//! Flags cash accounts whose projected running balance goes negative inside
//! each requested day-window.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use super::occurrence::OccurrenceMap;
use super::projection::calc_projection;
use super::window;
use crate::models::{Account, AccountId, Money};

/// An account predicted to go negative within a window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskEntry {
    pub account_id: AccountId,
    pub account_name: String,
    pub window: u32,
    pub current: Money,
    pub projected: Money,
    pub drop_date: NaiveDate,
}

/// Window (days) → at-risk accounts, worst projected balance first
pub type RiskMap = BTreeMap<u32, Vec<RiskEntry>>;

/// Assess every cash account against every window.
///
/// Accounts without any occurrence in the horizon are not assessed, even when
/// their current balance is already negative.
pub fn assess_risk(
    accounts: &[Account],
    occurrences: &OccurrenceMap,
    windows: &[u32],
    today: NaiveDate,
) -> RiskMap {
    let windows = window::normalize(windows);
    let mut risks: RiskMap = windows.iter().map(|w| (*w, Vec::new())).collect();

    for account in accounts.iter().filter(|a| a.is_cash()) {
        let account_occurrences = occurrences.for_account(&account.id);
        if account_occurrences.is_empty() {
            continue;
        }

        for &win in &windows {
            let projection =
                calc_projection(account_occurrences, account.balance, window::cutoff(today, win));
            if let Some(drop_date) = projection.drop_date {
                risks.entry(win).or_default().push(RiskEntry {
                    account_id: account.id,
                    account_name: account.name.clone(),
                    window: win,
                    current: account.balance,
                    projected: projection.balance,
                    drop_date,
                });
            }
        }
    }

    for (win, entries) in risks.iter_mut() {
        entries.sort_by_key(|entry| entry.projected);
        debug!("{} account(s) at risk within {} days", entries.len(), win);
    }

    risks
}

/// Whether any window has at least one account at risk
pub fn any_at_risk(risks: &RiskMap) -> bool {
    risks.values().any(|entries| !entries.is_empty())
}
