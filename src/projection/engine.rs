//! Core projection engine for yearly net-worth projections

use super::input::{ProjectionFields, ProjectionInput, DEFAULT_PREDICTION_YEARS};
use super::rows::{ProjectionResult, YearRow};
use super::state::{GrowthRates, ProjectionState};
use crate::error::Result;
use log::debug;

/// Annual growth applied to expenses regardless of input (3%)
pub const DEFAULT_EXPENSE_GROWTH_RATE: f64 = 0.03;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Annual expense growth as a decimal
    pub expense_growth_rate: f64,

    /// Horizon used when the years field is blank or invalid
    pub default_prediction_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            expense_growth_rate: DEFAULT_EXPENSE_GROWTH_RATE,
            default_prediction_years: DEFAULT_PREDICTION_YEARS,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project net worth for `input.prediction_years` years
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let rates = GrowthRates::from_input(input, self.config.expense_growth_rate);
        let mut state = ProjectionState::from_input(input);
        let mut result = ProjectionResult::new(input.current_networth);

        debug!(
            "projecting {} years, expense growth {}",
            input.prediction_years, rates.expenses
        );

        for _year in 1..=input.prediction_years {
            state.advance_year(&rates);
            result.add_row(Self::record_year(&state));
        }

        result
    }

    /// Parse raw fields and project. Nothing is projected if any field fails validation.
    pub fn project_fields(&self, fields: &ProjectionFields) -> Result<ProjectionResult> {
        let input = fields.to_input_with_default_years(self.config.default_prediction_years)?;
        Ok(self.project(&input))
    }

    fn record_year(state: &ProjectionState) -> YearRow {
        YearRow {
            year: state.year,
            annual_income: state.annual_income,
            annual_expenses: state.annual_expenses,
            stocks_investment: state.stocks_investment,
            funds_investment: state.funds_investment,
            savings_amount: state.savings_amount,
            other_investment: state.other_investment,
            net_worth: state.net_worth,
        }
    }
}

/// Project with the default configuration
pub fn project_net_worth(input: &ProjectionInput) -> ProjectionResult {
    ProjectionEngine::default().project(input)
}
