//! Error type shared by all calculators

use thiserror::Error;

/// Message shown in place of a projection when any field is not a number
pub const PROJECTION_ERROR_MESSAGE: &str = "Please enter valid numbers in all fields";

/// Message shown in place of both savings totals when the income is not a number
pub const SAVINGS_ERROR_MESSAGE: &str = "Please enter valid numbers";

#[derive(Debug, Error)]
pub enum BudgetError {
    /// A required field held text that does not parse as a number
    #[error("invalid number {value:?} in field `{field}`")]
    InvalidNumber { field: String, value: String },

    /// More rows supplied than the calculator has slots for
    #[error("too many {kind}: got {got}, at most {max} allowed")]
    TooManyEntries {
        kind: &'static str,
        got: usize,
        max: usize,
    },

    #[error("unknown screen `{0}`")]
    UnknownScreen(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BudgetError {
    pub fn invalid_number(field: &str, value: &str) -> Self {
        Self::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// True for the "non-numeric required field" kind
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidNumber { .. })
    }
}

pub type Result<T> = std::result::Result<T, BudgetError>;
