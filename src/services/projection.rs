//! Running-balance projection for a single account

use chrono::NaiveDate;
use serde::Serialize;

use super::occurrence::Occurrence;
use crate::models::Money;

/// Balance at a cutoff and the first date the running balance went negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub balance: Money,
    pub drop_date: Option<NaiveDate>,
}

/// Apply `occurrences` (ascending by date) to `balance` up to and including `cutoff`.
///
/// Only the first negative crossing is recorded; recovering later does not
/// clear it.
pub fn calc_projection(occurrences: &[Occurrence], balance: Money, cutoff: NaiveDate) -> Projection {
    debug_assert!(
        occurrences.windows(2).all(|pair| pair[0].date <= pair[1].date),
        "occurrences must be in date order"
    );

    let mut projected = balance;
    let mut drop_date = None;

    for occurrence in occurrences {
        if occurrence.date > cutoff {
            break;
        }
        projected += occurrence.amount;
        if projected.is_negative() && drop_date.is_none() {
            drop_date = Some(occurrence.date);
        }
    }

    Projection {
        balance: projected,
        drop_date,
    }
}
