//! Budget Manager - calculation core for a personal budgeting tool
//!
//! This library provides:
//! - Year-by-year compound net-worth projection
//! - Monthly savings against ten fixed expense categories
//! - Debt/credit ledger totals with a net balance
//! - Display strings and color intent for each result
//! - Batch projection of CSV scenarios

pub mod error;
pub mod input;
pub mod format;
pub mod projection;
pub mod savings;
pub mod ledger;
pub mod report;
pub mod navigation;
pub mod scenario;

// Re-export commonly used types
pub use error::BudgetError;
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionFields, ProjectionInput, ProjectionResult};
pub use savings::{SavingsFields, SavingsInput, SavingsResult, calculate_savings};
pub use ledger::{LedgerFields, LedgerInput, LedgerResult, Balance, calculate_ledger};
pub use navigation::Screen;
pub use scenario::ScenarioRunner;
