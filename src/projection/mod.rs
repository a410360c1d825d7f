//! Compound net-worth projection, year by year

mod input;
mod state;
mod engine;
mod rows;

pub use input::{ProjectionFields, ProjectionInput, DEFAULT_PREDICTION_YEARS};
pub use state::{GrowthRates, ProjectionState};
pub use engine::{project_net_worth, ProjectionConfig, ProjectionEngine, DEFAULT_EXPENSE_GROWTH_RATE};
pub use rows::{ProjectionResult, ProjectionSummary, YearRow};
