//! Transfer Report
//!
//! Suggested cover moves and the drop dates surplus funds cannot cover.

use super::risk::{fmt_money, push_header};
use crate::services::{Forecast, TransferMove, UncoveredGroup};

/// Cover transfers and uncovered groups for the longest window
#[derive(Debug, Clone)]
pub struct TransferReport {
    pub moves: Vec<TransferMove>,
    pub uncovered: Vec<UncoveredGroup>,
}

impl TransferReport {
    pub fn generate(forecast: &Forecast) -> Self {
        Self {
            moves: forecast.plan.moves.clone(),
            uncovered: forecast.plan.uncovered.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        push_header(
            &mut output,
            "Suggested cover transfers (longest window projection; only full coverage shown)",
        );

        if self.moves.is_empty() {
            output.push_str("None\n\n");
        } else {
            for mv in &self.moves {
                output.push_str(&format!(
                    "Move {} from {} to {}, covers drop on {}\n",
                    fmt_money(mv.amount, symbol),
                    mv.from_name,
                    mv.to_name,
                    mv.covers_drop
                ));
            }
            output.push('\n');
        }

        if !self.uncovered.is_empty() {
            output.push_str("Uncovered drops (insufficient surplus, no partial moves suggested):\n");
            for group in &self.uncovered {
                output.push_str(&format!(
                    "{}: need {}, available {} :: {}\n",
                    group.drop_date,
                    fmt_money(group.need, symbol),
                    fmt_money(group.available, symbol),
                    group.account_names()
                ));
            }
            output.push('\n');
        }

        output
    }
}
