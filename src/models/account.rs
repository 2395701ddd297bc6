//! Account model
//!
//! Represents a YNAB budget account (checking, savings, credit cards, loans, etc.)
//! in the shape the API returns it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// Type of financial account, as named by the YNAB API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountType {
    Checking,
    Savings,
    Cash,
    CreditCard,
    LineOfCredit,
    OtherAsset,
    OtherLiability,
    Mortgage,
    AutoLoan,
    StudentLoan,
    PersonalLoan,
    MedicalDebt,
    OtherDebt,
    /// Any type this tool does not know about
    #[serde(other)]
    Other,
}

impl AccountType {
    /// Returns true for debt and credit types, whose balances are owed rather than held
    pub fn is_liability(&self) -> bool {
        matches!(
            self,
            Self::CreditCard
                | Self::LineOfCredit
                | Self::Mortgage
                | Self::AutoLoan
                | Self::StudentLoan
                | Self::PersonalLoan
                | Self::MedicalDebt
                | Self::OtherDebt
                | Self::OtherLiability
        )
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Checking
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Cash => write!(f, "Cash"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::LineOfCredit => write!(f, "Line of Credit"),
            Self::OtherAsset => write!(f, "Other Asset"),
            Self::OtherLiability => write!(f, "Other Liability"),
            Self::Mortgage => write!(f, "Mortgage"),
            Self::AutoLoan => write!(f, "Auto Loan"),
            Self::StudentLoan => write!(f, "Student Loan"),
            Self::PersonalLoan => write!(f, "Personal Loan"),
            Self::MedicalDebt => write!(f, "Medical Debt"),
            Self::OtherDebt => write!(f, "Other Debt"),
            Self::Other => write!(f, "Other"),
        }
    }
}

fn default_on_budget() -> bool {
    true
}

/// A budget account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Joint Current")
    pub name: String,

    /// Type of account
    #[serde(rename = "type", default)]
    pub account_type: AccountType,

    /// Whether this account is included in the budget
    #[serde(default = "default_on_budget")]
    pub on_budget: bool,

    /// Closed accounts never reach the forecast
    #[serde(default)]
    pub closed: bool,

    /// Deleted accounts never reach the forecast
    #[serde(default)]
    pub deleted: bool,

    /// Current balance in milliunits
    #[serde(default)]
    pub balance: Money,
}

impl Account {
    /// Create a new on-budget account
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            on_budget: true,
            closed: false,
            deleted: false,
            balance,
        }
    }

    /// On-budget and not a debt/liability type
    pub fn is_cash(&self) -> bool {
        self.on_budget && !self.account_type.is_liability()
    }

    /// Neither closed nor deleted
    pub fn is_open(&self) -> bool {
        !self.closed && !self.deleted
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_classification() {
        let checking = Account::new("Current", AccountType::Checking, Money::zero());
        assert!(checking.is_cash());

        let card = Account::new("Card", AccountType::CreditCard, Money::zero());
        assert!(!card.is_cash());

        let mut tracking = Account::new("Pension", AccountType::OtherAsset, Money::zero());
        tracking.on_budget = false;
        assert!(!tracking.is_cash());
    }

    #[test]
    fn test_is_liability() {
        assert!(AccountType::CreditCard.is_liability());
        assert!(AccountType::Mortgage.is_liability());
        assert!(AccountType::OtherLiability.is_liability());
        assert!(!AccountType::Checking.is_liability());
        assert!(!AccountType::OtherAsset.is_liability());
        assert!(!AccountType::Other.is_liability());
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Joint Current",
            "type": "checking",
            "on_budget": true,
            "closed": false,
            "note": null,
            "balance": 125000,
            "cleared_balance": 120000,
            "deleted": false
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.name, "Joint Current");
        assert_eq!(account.account_type, AccountType::Checking);
        assert_eq!(account.balance, Money::from_milliunits(125_000));
        assert!(account.is_open());
    }

    #[test]
    fn test_unknown_type_and_defaults() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Mystery",
            "type": "cryptoWallet"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.account_type, AccountType::Other);
        assert!(account.on_budget);
        assert!(account.is_cash());
        assert_eq!(account.balance, Money::zero());
    }

    #[test]
    fn test_camel_case_types() {
        let parsed: AccountType = serde_json::from_str("\"lineOfCredit\"").unwrap();
        assert_eq!(parsed, AccountType::LineOfCredit);
        assert_eq!(
            serde_json::to_string(&AccountType::CreditCard).unwrap(),
            "\"creditCard\""
        );
    }

    #[test]
    fn test_display() {
        let account = Account::new("Joint Current", AccountType::Checking, Money::zero());
        assert_eq!(format!("{}", account), "Joint Current (Checking)");
    }
}
