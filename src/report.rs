//! Display strings for each calculator's result
//!
//! Front ends show these lines verbatim and pick a color from [`Tone`].

use crate::error::{PROJECTION_ERROR_MESSAGE, SAVINGS_ERROR_MESSAGE};
use crate::format::{currency, currency_grouped};
use crate::ledger::{Balance, LedgerResult};
use crate::projection::ProjectionResult;
use crate::savings::SavingsResult;
use serde::Serialize;

/// Color intent for a result line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Negative,
    Positive,
    Neutral,
}

/// Multi-line projection text: a header, a blank line, then one line per year
pub fn render_projection(result: &ProjectionResult) -> String {
    let mut text = String::from("Predicted Net Worth:\n\n");
    for row in &result.rows {
        text.push_str(&format!("Year {}: {}\n", row.year, currency_grouped(row.net_worth)));
    }
    text
}

/// Text shown instead of a projection when any field is invalid
pub fn render_projection_error() -> String {
    PROJECTION_ERROR_MESSAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsReport {
    pub total_expenses: String,
    pub monthly_savings: String,
    pub tone: Tone,
}

impl SavingsReport {
    pub fn from_result(result: &SavingsResult) -> Self {
        Self {
            total_expenses: format!("Total Expenses: {}", currency(result.total_expenses)),
            monthly_savings: format!("Monthly Savings: {}", currency(result.net_savings)),
            tone: if result.is_deficit() { Tone::Negative } else { Tone::Positive },
        }
    }

    /// Both lines replaced by the error message
    pub fn invalid() -> Self {
        Self {
            total_expenses: SAVINGS_ERROR_MESSAGE.to_string(),
            monthly_savings: SAVINGS_ERROR_MESSAGE.to_string(),
            tone: Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerReport {
    pub total_debt: String,
    pub total_credit: String,
    pub balance: String,
    pub tone: Tone,
}

impl LedgerReport {
    pub fn from_result(result: &LedgerResult) -> Self {
        let balance = result.balance();
        let tone = match balance {
            Balance::NetDebt(_) => Tone::Negative,
            Balance::NetCredit(_) => Tone::Positive,
            Balance::Balanced => Tone::Neutral,
        };

        Self {
            total_debt: format!("Total Debt: {}", currency(result.total_debt)),
            total_credit: format!("Total Credit: {}", currency(result.total_credit)),
            balance: balance.to_string(),
            tone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{project_net_worth, ProjectionInput};

    #[test]
    fn test_render_projection_lines() {
        let input = ProjectionInput {
            annual_income: 50_000.0,
            annual_expenses: 30_000.0,
            salary_hike_pct: 5.0,
            stocks_investment: 10_000.0,
            stocks_return_pct: 7.0,
            savings_amount: 5_000.0,
            savings_interest_pct: 2.0,
            current_networth: 15_000.0,
            prediction_years: 1,
            ..Default::default()
        };
        let text = render_projection(&project_net_worth(&input));
        assert_eq!(text, "Predicted Net Worth:\n\nYear 1: $37,400.00\n");
    }

    #[test]
    fn test_render_empty_projection() {
        let input = ProjectionInput {
            prediction_years: 0,
            ..Default::default()
        };
        assert_eq!(render_projection(&project_net_worth(&input)), "Predicted Net Worth:\n\n");
    }

    #[test]
    fn test_savings_report_tone() {
        let surplus = SavingsReport::from_result(&SavingsResult {
            total_expenses: 2800.0,
            net_savings: 1200.0,
        });
        assert_eq!(surplus.total_expenses, "Total Expenses: $2800.00");
        assert_eq!(surplus.monthly_savings, "Monthly Savings: $1200.00");
        assert_eq!(surplus.tone, Tone::Positive);

        let deficit = SavingsReport::from_result(&SavingsResult {
            total_expenses: 150.0,
            net_savings: -50.0,
        });
        assert_eq!(deficit.monthly_savings, "Monthly Savings: $-50.00");
        assert_eq!(deficit.tone, Tone::Negative);
    }

    #[test]
    fn test_zero_savings_is_not_negative() {
        let report = SavingsReport::from_result(&SavingsResult {
            total_expenses: 100.0,
            net_savings: 0.0,
        });
        assert_eq!(report.tone, Tone::Positive);
    }

    #[test]
    fn test_invalid_savings_report() {
        let report = SavingsReport::invalid();
        assert_eq!(report.total_expenses, "Please enter valid numbers");
        assert_eq!(report.monthly_savings, "Please enter valid numbers");
    }

    #[test]
    fn test_ledger_report() {
        let report = LedgerReport::from_result(&LedgerResult {
            total_debt: 900.0,
            total_credit: 400.0,
            net_balance: -500.0,
        });
        assert_eq!(report.total_debt, "Total Debt: $900.00");
        assert_eq!(report.total_credit, "Total Credit: $400.00");
        assert_eq!(report.balance, "Net Debt: $500.00");
        assert_eq!(report.tone, Tone::Negative);

        let balanced = LedgerReport::from_result(&LedgerResult {
            total_debt: 500.0,
            total_credit: 500.0,
            net_balance: 0.0,
        });
        assert_eq!(balanced.balance, "Balanced: $0.00");
        assert_eq!(balanced.tone, Tone::Neutral);
    }

    #[test]
    fn test_tone_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Tone::Negative).unwrap(), "\"negative\"");
    }
}
