//! Risk Report
//!
//! Lists, per window, the accounts whose projected balance goes negative.

use crate::models::Money;
use crate::services::{Forecast, RiskEntry};

/// One window's section of the report
#[derive(Debug, Clone)]
pub struct RiskSection {
    pub window: u32,
    pub entries: Vec<RiskEntry>,
}

/// Accounts at risk, grouped by window (ascending)
#[derive(Debug, Clone)]
pub struct RiskReport {
    pub sections: Vec<RiskSection>,
}

impl RiskReport {
    /// Build the report from a forecast
    pub fn generate(forecast: &Forecast) -> Self {
        let sections = forecast
            .risks
            .iter()
            .map(|(window, entries)| RiskSection {
                window: *window,
                entries: entries.clone(),
            })
            .collect();
        Self { sections }
    }

    /// Whether any section lists an account
    pub fn has_risk(&self) -> bool {
        self.sections.iter().any(|s| !s.entries.is_empty())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        for section in &self.sections {
            let header = format!("Accounts at risk within {} days", section.window);
            push_header(&mut output, &header);

            if section.entries.is_empty() {
                output.push_str("None\n\n");
                continue;
            }

            for entry in &section.entries {
                output.push_str(&format!(
                    "{}: drop {}, projected {} (current {})\n",
                    entry.account_name,
                    entry.drop_date,
                    fmt_money(entry.projected, symbol),
                    fmt_money(entry.current, symbol)
                ));
            }
            output.push('\n');
        }

        if !self.has_risk() {
            output.push_str("All accounts stay non-negative in the selected windows.\n");
        }

        output
    }
}

/// Write a header underlined with dashes of the same width
pub(crate) fn push_header(output: &mut String, header: &str) {
    output.push_str(header);
    output.push('\n');
    output.push_str(&"-".repeat(header.chars().count()));
    output.push('\n');
}

pub(crate) fn fmt_money(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}
