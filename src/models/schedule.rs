//! Scheduled (recurring) transaction model
//!
//! Mirrors the YNAB scheduled transaction shape and owns the frequency table
//! that turns one due date into the next.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, ScheduleId};
use super::money::Money;

/// How far one step of a recurrence moves the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// A flat number of calendar days
    Days(u64),
    /// Whole months, clamping the day to the end of a shorter month
    Months(u32),
}

impl Advance {
    /// Apply this step to a date. `None` if the result is out of chrono's range.
    pub fn apply(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Days(days) => date.checked_add_days(Days::new(days)),
            Self::Months(months) => date.checked_add_months(Months::new(months)),
        }
    }
}

/// Recurrence frequency of a scheduled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    #[default]
    Never,
    Daily,
    Weekly,
    EveryOtherWeek,
    TwiceAMonth,
    #[serde(rename = "every4Weeks")]
    Every4Weeks,
    Monthly,
    EveryOtherMonth,
    #[serde(rename = "every3Months")]
    Every3Months,
    #[serde(rename = "every4Months")]
    Every4Months,
    TwiceAYear,
    Yearly,
    EveryOtherYear,
    /// A value the API sent that this tool does not recognise.
    /// Treated like `Never`: the schedule occurs once and does not repeat.
    #[serde(other)]
    Unrecognized,
}

impl Frequency {
    /// The date-advance rule for this frequency. `None` means no repeat.
    ///
    /// `TwiceAMonth` is a flat 15-day step, not a 1st/16th calendar.
    pub const fn advance_rule(self) -> Option<Advance> {
        match self {
            Self::Never | Self::Unrecognized => None,
            Self::Daily => Some(Advance::Days(1)),
            Self::Weekly => Some(Advance::Days(7)),
            Self::EveryOtherWeek => Some(Advance::Days(14)),
            Self::Every4Weeks => Some(Advance::Days(28)),
            Self::TwiceAMonth => Some(Advance::Days(15)),
            Self::Monthly => Some(Advance::Months(1)),
            Self::EveryOtherMonth => Some(Advance::Months(2)),
            Self::Every3Months => Some(Advance::Months(3)),
            Self::Every4Months => Some(Advance::Months(4)),
            Self::TwiceAYear => Some(Advance::Months(6)),
            Self::Yearly => Some(Advance::Months(12)),
            Self::EveryOtherYear => Some(Advance::Months(24)),
        }
    }

    /// Next due date after `current`, if the schedule repeats
    pub fn advance(self, current: NaiveDate) -> Option<NaiveDate> {
        self.advance_rule().and_then(|rule| rule.apply(current))
    }

    /// The API spelling of this frequency
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::EveryOtherWeek => "everyOtherWeek",
            Self::TwiceAMonth => "twiceAMonth",
            Self::Every4Weeks => "every4Weeks",
            Self::Monthly => "monthly",
            Self::EveryOtherMonth => "everyOtherMonth",
            Self::Every3Months => "every3Months",
            Self::Every4Months => "every4Months",
            Self::TwiceAYear => "twiceAYear",
            Self::Yearly => "yearly",
            Self::EveryOtherYear => "everyOtherYear",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a split scheduled transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSubtransaction {
    #[serde(default)]
    pub amount: Money,

    #[serde(default)]
    pub deleted: bool,
}

/// A recurring transaction as scheduled in the budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTransaction {
    #[serde(default)]
    pub id: ScheduleId,

    /// Owning account; schedules without one are ignored by the forecast
    #[serde(default)]
    pub account_id: Option<AccountId>,

    /// Next due date
    pub date_next: NaiveDate,

    #[serde(default)]
    pub frequency: Frequency,

    /// Signed amount in milliunits (outflows negative)
    #[serde(default)]
    pub amount: Money,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    #[serde(default)]
    pub deleted: bool,

    /// Split lines; when any are live their sum replaces `amount`
    #[serde(default, alias = "scheduled_subtransactions")]
    pub subtransactions: Vec<ScheduledSubtransaction>,
}

impl ScheduledTransaction {
    /// Create a simple unsplit schedule
    pub fn new(
        account_id: AccountId,
        date_next: NaiveDate,
        frequency: Frequency,
        amount: Money,
    ) -> Self {
        Self {
            id: ScheduleId::new(),
            account_id: Some(account_id),
            date_next,
            frequency,
            amount,
            payee_name: None,
            memo: None,
            deleted: false,
            subtransactions: Vec::new(),
        }
    }

    /// The amount each occurrence moves: the sum of live split lines if there
    /// are any, otherwise the schedule's own amount
    pub fn net_amount(&self) -> Money {
        let mut live = self.subtransactions.iter().filter(|s| !s.deleted).peekable();
        if live.peek().is_some() {
            live.map(|s| s.amount).sum()
        } else {
            self.amount
        }
    }

    /// Short label for log lines
    pub fn label(&self) -> String {
        match &self.payee_name {
            Some(payee) => format!("{} ({})", self.id, payee),
            None => self.id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_based_advances() {
        let start = date(2025, 1, 1);
        assert_eq!(Frequency::Daily.advance(start), Some(date(2025, 1, 2)));
        assert_eq!(Frequency::Weekly.advance(start), Some(date(2025, 1, 8)));
        assert_eq!(Frequency::EveryOtherWeek.advance(start), Some(date(2025, 1, 15)));
        assert_eq!(Frequency::Every4Weeks.advance(start), Some(date(2025, 1, 29)));
        assert_eq!(Frequency::TwiceAMonth.advance(start), Some(date(2025, 1, 16)));
    }

    #[test]
    fn test_month_based_advances() {
        let start = date(2025, 1, 15);
        assert_eq!(Frequency::Monthly.advance(start), Some(date(2025, 2, 15)));
        assert_eq!(Frequency::EveryOtherMonth.advance(start), Some(date(2025, 3, 15)));
        assert_eq!(Frequency::Every3Months.advance(start), Some(date(2025, 4, 15)));
        assert_eq!(Frequency::Every4Months.advance(start), Some(date(2025, 5, 15)));
        assert_eq!(Frequency::TwiceAYear.advance(start), Some(date(2025, 7, 15)));
        assert_eq!(Frequency::Yearly.advance(start), Some(date(2026, 1, 15)));
        assert_eq!(Frequency::EveryOtherYear.advance(start), Some(date(2027, 1, 15)));
    }

    #[test]
    fn test_month_end_clamping() {
        assert_eq!(Frequency::Monthly.advance(date(2025, 1, 31)), Some(date(2025, 2, 28)));
        assert_eq!(Frequency::Monthly.advance(date(2024, 1, 31)), Some(date(2024, 2, 29)));
        assert_eq!(Frequency::Every3Months.advance(date(2025, 5, 31)), Some(date(2025, 8, 31)));
        assert_eq!(Frequency::Yearly.advance(date(2024, 2, 29)), Some(date(2025, 2, 28)));
    }

    #[test]
    fn test_no_repeat() {
        assert_eq!(Frequency::Never.advance(date(2025, 1, 1)), None);
        assert_eq!(Frequency::Unrecognized.advance(date(2025, 1, 1)), None);
    }

    #[test]
    fn test_frequency_serde() {
        let parsed: Frequency = serde_json::from_str("\"every4Weeks\"").unwrap();
        assert_eq!(parsed, Frequency::Every4Weeks);
        let parsed: Frequency = serde_json::from_str("\"everyOtherWeek\"").unwrap();
        assert_eq!(parsed, Frequency::EveryOtherWeek);
        let parsed: Frequency = serde_json::from_str("\"fortnightlyish\"").unwrap();
        assert_eq!(parsed, Frequency::Unrecognized);
        assert_eq!(
            serde_json::to_string(&Frequency::Every3Months).unwrap(),
            "\"every3Months\""
        );
    }

    #[test]
    fn test_net_amount_uses_live_splits() {
        let mut schedule = ScheduledTransaction::new(
            AccountId::new(),
            date(2025, 1, 1),
            Frequency::Monthly,
            Money::from_milliunits(-10_000),
        );
        assert_eq!(schedule.net_amount(), Money::from_milliunits(-10_000));

        schedule.subtransactions = vec![
            ScheduledSubtransaction {
                amount: Money::from_milliunits(-3_000),
                deleted: false,
            },
            ScheduledSubtransaction {
                amount: Money::from_milliunits(-4_000),
                deleted: false,
            },
            ScheduledSubtransaction {
                amount: Money::from_milliunits(-99_000),
                deleted: true,
            },
        ];
        assert_eq!(schedule.net_amount(), Money::from_milliunits(-7_000));
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "6f1c2a90-1c8e-4a51-9d7e-2b1c1b0f0a11",
            "date_first": "2024-01-01",
            "date_next": "2025-03-01",
            "frequency": "monthly",
            "amount": -850000,
            "account_id": "550e8400-e29b-41d4-a716-446655440000",
            "payee_name": "Landlord",
            "deleted": false,
            "scheduled_subtransactions": [{"amount": -800000}, {"amount": -50000}]
        }"#;
        let schedule: ScheduledTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.date_next, date(2025, 3, 1));
        assert_eq!(schedule.frequency, Frequency::Monthly);
        assert_eq!(schedule.net_amount(), Money::from_milliunits(-850_000));
        assert!(schedule.label().contains("Landlord"));
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let json = r#"{"date_next": "2025-02-30", "amount": 1000}"#;
        assert!(serde_json::from_str::<ScheduledTransaction>(json).is_err());
    }
}
