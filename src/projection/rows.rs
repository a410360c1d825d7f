//! Projection output structures

use serde::{Deserialize, Serialize};

/// One projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// 1-indexed year
    pub year: u32,

    // Balances after this year's growth
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub stocks_investment: f64,
    pub funds_investment: f64,
    pub savings_amount: f64,
    pub other_investment: f64,

    pub net_worth: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Net worth entered before projecting
    pub starting_net_worth: f64,

    /// Rows for years 1..=N in ascending order
    pub rows: Vec<YearRow>,
}

impl ProjectionResult {
    pub fn new(starting_net_worth: f64) -> Self {
        Self {
            starting_net_worth,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: YearRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (year, net worth) pairs
    pub fn net_worth_by_year(&self) -> Vec<(u32, f64)> {
        self.rows.iter().map(|r| (r.year, r.net_worth)).collect()
    }

    pub fn summary(&self) -> ProjectionSummary {
        let final_net_worth = self.rows.last().map(|r| r.net_worth);
        let peak = self
            .rows
            .iter()
            .max_by(|a, b| a.net_worth.total_cmp(&b.net_worth));

        ProjectionSummary {
            years: self.rows.len() as u32,
            starting_net_worth: self.starting_net_worth,
            final_net_worth,
            peak_year: peak.map(|r| r.year),
            peak_net_worth: peak.map(|r| r.net_worth),
        }
    }
}

/// Summary statistics for a projection. Optional fields are `None` for an empty projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub starting_net_worth: f64,
    pub final_net_worth: Option<f64>,
    pub peak_year: Option<u32>,
    pub peak_net_worth: Option<f64>,
}
