//! Cover-transfer planning
//!
//! Works from the longest window's projection: accounts ending in surplus fund
//! accounts ending in deficit. Deficits that drop on the same date are resolved
//! together, and a group is only ever covered in full. If the remaining surplus
//! pool cannot cover a whole group, the group is reported as uncovered and no
//! money is moved for it.

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

use super::occurrence::OccurrenceMap;
use super::projection::calc_projection;
use super::window;
use crate::models::{Account, AccountId, Money};

/// An account with money to spare at the horizon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurplusEntry {
    pub account_id: AccountId,
    pub account_name: String,
    /// Remaining amount that can still be moved out
    pub available: Money,
}

/// An account that ends the horizon below zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeficitEntry {
    pub account_id: AccountId,
    pub account_name: String,
    pub need: Money,
    pub drop_date: NaiveDate,
}

/// A suggested transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferMove {
    pub from_id: AccountId,
    pub from_name: String,
    pub to_id: AccountId,
    pub to_name: String,
    pub amount: Money,
    /// Drop date of the deficit this move covers
    pub covers_drop: NaiveDate,
}

/// Deficits sharing a drop date that the pool could not fully cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UncoveredGroup {
    pub drop_date: NaiveDate,
    pub need: Money,
    /// Pool size when the group was evaluated
    pub available: Money,
    pub accounts: Vec<DeficitEntry>,
}

impl UncoveredGroup {
    /// Comma-separated member names
    pub fn account_names(&self) -> String {
        self.accounts
            .iter()
            .map(|d| d.account_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Output of one planning pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferPlan {
    pub moves: Vec<TransferMove>,
    pub uncovered: Vec<UncoveredGroup>,
    /// Surplus accounts with what is left after the suggested moves
    pub surpluses: Vec<SurplusEntry>,
}

impl TransferPlan {
    /// Total amount moved into one account
    pub fn total_to(&self, account_id: &AccountId) -> Money {
        self.moves
            .iter()
            .filter(|m| m.to_id == *account_id)
            .map(|m| m.amount)
            .sum()
    }

    /// Remaining surplus for an account, if it was a surplus source
    pub fn remaining(&self, account_id: &AccountId) -> Option<Money> {
        self.surpluses
            .iter()
            .find(|s| s.account_id == *account_id)
            .map(|s| s.available)
    }
}

/// What happened to one deficit group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupOutcome {
    Covered(Vec<TransferMove>),
    Uncovered(UncoveredGroup),
    /// Nothing needed and nothing recorded
    Skipped,
}

/// The surplus pool for a single planning pass
///
/// Sources are kept largest-first and only ever shrink.
#[derive(Debug, Clone)]
pub struct AllocationState {
    surpluses: Vec<SurplusEntry>,
}

impl AllocationState {
    /// Build the pool, ordering sources by available amount, largest first
    pub fn new(mut surpluses: Vec<SurplusEntry>) -> Self {
        surpluses.sort_by_key(|s| Reverse(s.available));
        Self { surpluses }
    }

    /// Sum of every source that still has money
    pub fn available_pool(&self) -> Money {
        self.surpluses
            .iter()
            .filter(|s| s.available.is_positive())
            .map(|s| s.available)
            .sum()
    }

    /// Sources in consumption order
    pub fn surpluses(&self) -> &[SurplusEntry] {
        &self.surpluses
    }

    pub fn into_surpluses(self) -> Vec<SurplusEntry> {
        self.surpluses
    }

    /// Resolve one group of deficits sharing a drop date
    pub fn resolve_group(&mut self, group: &[DeficitEntry]) -> GroupOutcome {
        let Some(first) = group.first() else {
            return GroupOutcome::Skipped;
        };
        let drop_date = first.drop_date;

        let available_pool = self.available_pool();
        let total_need: Money = group
            .iter()
            .filter(|d| d.need.is_positive())
            .map(|d| d.need)
            .sum();

        let uncovered = || UncoveredGroup {
            drop_date,
            need: total_need,
            available: available_pool,
            accounts: group.to_vec(),
        };

        if !available_pool.is_positive() || !total_need.is_positive() {
            if total_need.is_positive() {
                return GroupOutcome::Uncovered(uncovered());
            }
            return GroupOutcome::Skipped;
        }

        if available_pool < total_need {
            return GroupOutcome::Uncovered(uncovered());
        }

        let needs: Vec<Money> = group.iter().map(|d| d.need).collect();
        let allocations = split_allocation(&needs, available_pool.min(total_need), total_need);

        let mut moves = Vec::new();
        for (allocation, deficit) in allocations.into_iter().zip(group) {
            if allocation.is_positive() {
                self.draw(deficit, allocation, &mut moves);
            }
        }
        GroupOutcome::Covered(moves)
    }

    /// Take `amount` for `deficit` from sources in order, splitting across
    /// sources when one is not enough
    fn draw(&mut self, deficit: &DeficitEntry, amount: Money, moves: &mut Vec<TransferMove>) {
        let mut remaining = amount;
        for source in self.surpluses.iter_mut() {
            if !remaining.is_positive() {
                break;
            }
            if !source.available.is_positive() {
                continue;
            }
            let taken = remaining.min(source.available);
            source.available -= taken;
            remaining -= taken;
            moves.push(TransferMove {
                from_id: source.account_id,
                from_name: source.account_name.clone(),
                to_id: deficit.account_id,
                to_name: deficit.account_name.clone(),
                amount: taken,
                covers_drop: deficit.drop_date,
            });
        }
    }
}

/// Share `allocatable` across `needs` in proportion to each need.
///
/// Each share is `floor(allocatable * need / total_need)`, capped at the need.
/// Whatever integer division leaves over goes to the largest needs first, each
/// topped up to at most its own need.
pub fn split_allocation(needs: &[Money], allocatable: Money, total_need: Money) -> Vec<Money> {
    if !total_need.is_positive() {
        return vec![Money::zero(); needs.len()];
    }

    let mut allocations: Vec<Money> = needs
        .iter()
        .map(|need| {
            let share = i128::from(allocatable.milliunits()) * i128::from(need.milliunits())
                / i128::from(total_need.milliunits());
            Money::from_milliunits(share as i64).min(*need)
        })
        .collect();

    let mut remainder = allocatable - allocations.iter().sum::<Money>();

    let mut by_need: Vec<usize> = (0..needs.len()).collect();
    by_need.sort_by_key(|&i| Reverse(needs[i]));

    for i in by_need {
        if !remainder.is_positive() {
            break;
        }
        let room = needs[i] - allocations[i];
        if !room.is_positive() {
            continue;
        }
        let extra = room.min(remainder);
        allocations[i] += extra;
        remainder -= extra;
    }

    allocations
}

/// Plan cover transfers at the longest window
pub fn plan_transfers(
    accounts: &[Account],
    occurrences: &OccurrenceMap,
    windows: &[u32],
    today: NaiveDate,
) -> TransferPlan {
    let Some(&longest) = windows.iter().max() else {
        return TransferPlan::default();
    };
    let cutoff = window::cutoff(today, longest);

    let mut surpluses = Vec::new();
    let mut deficits = Vec::new();

    for account in accounts.iter().filter(|a| a.is_cash()) {
        let projection = calc_projection(occurrences.for_account(&account.id), account.balance, cutoff);
        if projection.balance.is_positive() {
            surpluses.push(SurplusEntry {
                account_id: account.id,
                account_name: account.name.clone(),
                available: projection.balance,
            });
        } else if projection.balance.is_negative() {
            deficits.push(DeficitEntry {
                account_id: account.id,
                account_name: account.name.clone(),
                need: -projection.balance,
                drop_date: projection.drop_date.unwrap_or(today),
            });
        }
    }

    deficits.sort_by_key(|d| (d.drop_date, Reverse(d.need)));
    debug!(
        "Planning transfers to {}: {} surplus, {} deficit account(s)",
        cutoff,
        surpluses.len(),
        deficits.len()
    );

    let mut state = AllocationState::new(surpluses);
    let mut moves = Vec::new();
    let mut uncovered = Vec::new();

    let mut start = 0;
    while start < deficits.len() {
        let drop_date = deficits[start].drop_date;
        let mut end = start;
        while end < deficits.len() && deficits[end].drop_date == drop_date {
            end += 1;
        }

        match state.resolve_group(&deficits[start..end]) {
            GroupOutcome::Covered(group_moves) => moves.extend(group_moves),
            GroupOutcome::Uncovered(group) => {
                debug!(
                    "Group dropping {} needs {} but only {} is available",
                    group.drop_date, group.need, group.available
                );
                uncovered.push(group);
            }
            GroupOutcome::Skipped => {}
        }

        start = end;
    }

    TransferPlan {
        moves,
        uncovered,
        surpluses: state.into_surpluses(),
    }
}
