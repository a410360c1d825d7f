use super::category::{ExpenseCategory, EXPENSE_CATEGORY_COUNT};
use crate::error::{BudgetError, Result};
use crate::input::{parse_or_zero, parse_required};
use serde::{Deserialize, Serialize};

/// Parsed savings input, one amount per [`ExpenseCategory`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    pub monthly_income: f64,
    pub expense_amounts: [f64; EXPENSE_CATEGORY_COUNT],
}

impl SavingsInput {
    pub fn amount(&self, category: ExpenseCategory) -> f64 {
        self.expense_amounts[category.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub total_expenses: f64,
    pub net_savings: f64,
}

impl SavingsResult {
    /// Spending exceeds income
    pub fn is_deficit(&self) -> bool {
        self.net_savings < 0.0
    }
}

/// Savings fields exactly as typed. `expenses` follows category order; missing trailing
/// entries count as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsFields {
    pub income: String,
    pub expenses: Vec<String>,
}

impl SavingsFields {
    /// Income must be numeric; each expense falls back to 0 on its own.
    pub fn to_input(&self) -> Result<SavingsInput> {
        if self.expenses.len() > EXPENSE_CATEGORY_COUNT {
            return Err(BudgetError::TooManyEntries {
                kind: "expense amounts",
                got: self.expenses.len(),
                max: EXPENSE_CATEGORY_COUNT,
            });
        }

        let monthly_income = parse_required("income", &self.income)?;
        let mut expense_amounts = [0.0; EXPENSE_CATEGORY_COUNT];
        for (slot, (category, text)) in expense_amounts
            .iter_mut()
            .zip(ExpenseCategory::ALL.iter().zip(&self.expenses))
        {
            *slot = parse_or_zero(category.label(), text);
        }

        Ok(SavingsInput {
            monthly_income,
            expense_amounts,
        })
    }

    pub fn calculate(&self) -> Result<SavingsResult> {
        Ok(calculate_savings(&self.to_input()?))
    }
}

pub fn calculate_savings(input: &SavingsInput) -> SavingsResult {
    let total_expenses: f64 = input.expense_amounts.iter().sum();
    SavingsResult {
        total_expenses,
        net_savings: input.monthly_income - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(income: &str, expenses: &[&str]) -> SavingsFields {
        SavingsFields {
            income: income.to_string(),
            expenses: expenses.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_typical_month() {
        let result = fields(
            "4000",
            &["1200", "200", "400", "150", "100", "300", "150", "100", "80", "120"],
        )
        .calculate()
        .unwrap();
        assert_eq!(result.total_expenses, 2800.0);
        assert_eq!(result.net_savings, 1200.0);
        assert!(!result.is_deficit());
    }

    #[test]
    fn test_no_expenses_keeps_income() {
        let input = SavingsInput {
            monthly_income: 3210.5,
            ..Default::default()
        };
        let result = calculate_savings(&input);
        assert_eq!(result.total_expenses, 0.0);
        assert_eq!(result.net_savings, 3210.5);
    }

    #[test]
    fn test_bad_expense_counts_as_zero() {
        let result = fields("1000", &["300", "abc", "", "200"]).calculate().unwrap();
        assert_eq!(result.total_expenses, 500.0);
        assert_eq!(result.net_savings, 500.0);
    }

    #[test]
    fn test_bad_income_is_validation_error() {
        let err = fields("a lot", &["100"]).calculate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_blank_income_is_zero() {
        let result = fields("", &["50"]).calculate().unwrap();
        assert_eq!(result.net_savings, -50.0);
        assert!(result.is_deficit());
    }

    #[test]
    fn test_too_many_expenses_rejected() {
        let expenses = vec!["1"; EXPENSE_CATEGORY_COUNT + 1];
        let err = fields("10", &expenses).to_input().unwrap_err();
        assert!(matches!(err, BudgetError::TooManyEntries { got: 11, max: 10, .. }));
    }

    #[test]
    fn test_amount_lookup_by_category() {
        let input = fields("0", &["1200", "200", "400"]).to_input().unwrap();
        assert_eq!(input.amount(ExpenseCategory::Groceries), 400.0);
        assert_eq!(input.amount(ExpenseCategory::Clothing), 0.0);
    }
}
