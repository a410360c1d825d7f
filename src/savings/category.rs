use serde::{Deserialize, Serialize};
use std::fmt;

pub const EXPENSE_CATEGORY_COUNT: usize = 10;

/// Fixed monthly expense categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    RentMortgage,
    Utilities,
    Groceries,
    Transportation,
    Healthcare,
    Entertainment,
    Insurance,
    PhoneInternet,
    Clothing,
    Miscellaneous,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; EXPENSE_CATEGORY_COUNT] = [
        ExpenseCategory::RentMortgage,
        ExpenseCategory::Utilities,
        ExpenseCategory::Groceries,
        ExpenseCategory::Transportation,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Insurance,
        ExpenseCategory::PhoneInternet,
        ExpenseCategory::Clothing,
        ExpenseCategory::Miscellaneous,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::RentMortgage => "Rent/Mortgage",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Groceries => "Groceries",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::PhoneInternet => "Phone/Internet",
            ExpenseCategory::Clothing => "Clothing",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
        }
    }

    /// Position within [`ExpenseCategory::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
