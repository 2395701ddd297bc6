//! Day-window helpers shared by the risk and transfer passes

use chrono::{Days, NaiveDate};

/// Deduplicate and sort windows ascending
pub fn normalize(windows: &[u32]) -> Vec<u32> {
    let mut sorted = windows.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Last date (inclusive) covered by a window of `days` starting today
pub fn cutoff(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}
