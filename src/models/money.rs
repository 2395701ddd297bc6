//! Money type for representing currency amounts
//!
//! Internally stores amounts in YNAB milliunits (i64, thousandths of the
//! currency unit) so balances from the API are carried without any
//! floating-point conversion. Provides arithmetic and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Default currency symbol used by `Display`
pub const DEFAULT_SYMBOL: &str = "£";

/// Represents a monetary amount stored as milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from milliunits
    ///
    /// # Examples
    /// ```
    /// use runway::models::Money;
    /// let amount = Money::from_milliunits(10_500); // £10.50
    /// assert_eq!(amount.milliunits(), 10_500);
    /// ```
    pub const fn from_milliunits(milliunits: i64) -> Self {
        Self(milliunits)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in milliunits
    pub const fn milliunits(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Smaller of two amounts
    pub fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }

    /// Amount as a decimal number of currency units, for exports
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Format with a currency symbol, thousands separators and two decimals
    ///
    /// Rounds the nearest `f64` to the unit value, so a half-cent whose binary
    /// form sits just below the midpoint rounds down (1.005 shows as 1.00).
    /// The sign is taken from the unrounded amount.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = format!("{:.2}", self.0.unsigned_abs() as f64 / 1000.0);
        let (whole, fraction) = units.split_once('.').unwrap_or((units.as_str(), "00"));
        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

/// Insert a comma between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_milliunits() {
        let m = Money::from_milliunits(10_500);
        assert_eq!(m.milliunits(), 10_500);
        assert_eq!(m.as_units(), 10.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_milliunits(10_500)), "£10.50");
        assert_eq!(format!("{}", Money::from_milliunits(0)), "£0.00");
        assert_eq!(format!("{}", Money::from_milliunits(-10_500)), "-£10.50");
        assert_eq!(format!("{}", Money::from_milliunits(50)), "£0.05");
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(
            Money::from_milliunits(1_234_567_890).format_with_symbol("£"),
            "£1,234,567.89"
        );
        assert_eq!(Money::from_milliunits(-1_000_000).format_with_symbol("$"), "-$1,000.00");
        assert_eq!(Money::from_milliunits(999_990).format_with_symbol("£"), "£999.99");
    }

    #[test]
    fn test_half_cents_round_on_the_binary_value() {
        assert_eq!(Money::from_milliunits(1_005).to_string(), "£1.00");
        assert_eq!(Money::from_milliunits(2_675).to_string(), "£2.67");
        assert_eq!(Money::from_milliunits(-1_005).to_string(), "-£1.00");
        assert_eq!(Money::from_milliunits(1_004).to_string(), "£1.00");
        assert_eq!(Money::from_milliunits(1_006).to_string(), "£1.01");
        assert_eq!(Money::from_milliunits(999_999).to_string(), "£1,000.00");
        assert_eq!(Money::from_milliunits(-1).to_string(), "-£0.00");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>8}", Money::from_milliunits(1_000)), "   £1.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_milliunits(1000);
        let b = Money::from_milliunits(500);

        assert_eq!((a + b).milliunits(), 1500);
        assert_eq!((a - b).milliunits(), 500);
        assert_eq!((-a).milliunits(), -1000);
        assert_eq!(a.min(b), b);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_milliunits(100).is_positive());
        assert!(Money::from_milliunits(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_milliunits(100),
            Money::from_milliunits(200),
            Money::from_milliunits(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.milliunits(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_milliunits(-15_000);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "-15000");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
