//! Monthly savings: income minus the fixed expense categories

mod category;
mod calculator;

pub use category::{ExpenseCategory, EXPENSE_CATEGORY_COUNT};
pub use calculator::{calculate_savings, SavingsFields, SavingsInput, SavingsResult};
