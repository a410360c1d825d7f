//! Screen identifiers used by front ends to switch views

use crate::error::BudgetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Main,
    Savings,
    MonthlyBudget,
    DebtCredit,
}

impl Screen {
    /// Menu order
    pub const ALL: [Screen; 4] = [
        Screen::Main,
        Screen::Savings,
        Screen::MonthlyBudget,
        Screen::DebtCredit,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Screen::Main => "main",
            Screen::Savings => "savings",
            Screen::MonthlyBudget => "monthly_budget",
            Screen::DebtCredit => "debt_credit",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => "Budget Manager",
            Screen::Savings => "Savings Calculator",
            Screen::MonthlyBudget => "Monthly Budget & Predictions",
            Screen::DebtCredit => "Debt/Credit Tracker",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id() == s)
            .ok_or_else(|| BudgetError::UnknownScreen(s.to_string()))
    }
}
