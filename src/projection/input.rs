//! Projection inputs: the raw text form and the parsed numeric form

use crate::error::Result;
use crate::input::{parse_required, parse_years};
use serde::{Deserialize, Serialize};

/// Horizon used when the years field is blank or not an integer
pub const DEFAULT_PREDICTION_YEARS: u32 = 10;

/// Parsed projection input. Rates are percentages (5.0 means 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub annual_income: f64,
    pub annual_expenses: f64,
    pub salary_hike_pct: f64,
    pub stocks_investment: f64,
    pub stocks_return_pct: f64,
    pub funds_investment: f64,
    pub funds_return_pct: f64,
    pub savings_amount: f64,
    pub savings_interest_pct: f64,
    pub other_investment: f64,
    pub other_return_pct: f64,
    /// Reported as the starting point only; year 1 replaces it
    pub current_networth: f64,
    pub prediction_years: u32,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            annual_income: 0.0,
            annual_expenses: 0.0,
            salary_hike_pct: 0.0,
            stocks_investment: 0.0,
            stocks_return_pct: 0.0,
            funds_investment: 0.0,
            funds_return_pct: 0.0,
            savings_amount: 0.0,
            savings_interest_pct: 0.0,
            other_investment: 0.0,
            other_return_pct: 0.0,
            current_networth: 0.0,
            prediction_years: DEFAULT_PREDICTION_YEARS,
        }
    }
}

/// Projection fields exactly as typed. Missing fields deserialize as blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionFields {
    pub annual_income: String,
    pub annual_expenses: String,
    pub salary_hike: String,
    pub stocks_investment: String,
    pub stocks_return: String,
    pub funds_investment: String,
    pub funds_return: String,
    pub savings_amount: String,
    pub savings_interest: String,
    pub other_investment: String,
    pub other_return: String,
    pub current_networth: String,
    pub prediction_years: String,
}

impl ProjectionFields {
    /// Parse with the standard ten-year fallback horizon
    pub fn to_input(&self) -> Result<ProjectionInput> {
        self.to_input_with_default_years(DEFAULT_PREDICTION_YEARS)
    }

    /// Parse every field. The first non-numeric monetary or rate field fails the whole input.
    pub fn to_input_with_default_years(&self, default_years: u32) -> Result<ProjectionInput> {
        Ok(ProjectionInput {
            annual_income: parse_required("annual_income", &self.annual_income)?,
            annual_expenses: parse_required("annual_expenses", &self.annual_expenses)?,
            salary_hike_pct: parse_required("salary_hike", &self.salary_hike)?,
            stocks_investment: parse_required("stocks_investment", &self.stocks_investment)?,
            stocks_return_pct: parse_required("stocks_return", &self.stocks_return)?,
            funds_investment: parse_required("funds_investment", &self.funds_investment)?,
            funds_return_pct: parse_required("funds_return", &self.funds_return)?,
            savings_amount: parse_required("savings_amount", &self.savings_amount)?,
            savings_interest_pct: parse_required("savings_interest", &self.savings_interest)?,
            other_investment: parse_required("other_investment", &self.other_investment)?,
            other_return_pct: parse_required("other_return", &self.other_return)?,
            current_networth: parse_required("current_networth", &self.current_networth)?,
            prediction_years: parse_years(&self.prediction_years, default_years),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_parse_to_defaults() {
        let input = ProjectionFields::default().to_input().unwrap();
        assert_eq!(input, ProjectionInput::default());
        assert_eq!(input.prediction_years, 10);
    }

    #[test]
    fn test_bad_rate_fails_whole_input() {
        let fields = ProjectionFields {
            annual_income: "50000".to_string(),
            stocks_return: "seven".to_string(),
            ..Default::default()
        };
        let err = fields.to_input().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("stocks_return"));
    }

    #[test]
    fn test_invalid_years_use_fallback() {
        let fields = ProjectionFields {
            prediction_years: "soon".to_string(),
            ..Default::default()
        };
        assert_eq!(fields.to_input_with_default_years(4).unwrap().prediction_years, 4);
    }

    #[test]
    fn test_fields_from_partial_json() {
        let fields: ProjectionFields =
            serde_json::from_str(r#"{"annual_income": "1200", "prediction_years": "3"}"#).unwrap();
        let input = fields.to_input().unwrap();
        assert_eq!(input.annual_income, 1200.0);
        assert_eq!(input.annual_expenses, 0.0);
        assert_eq!(input.prediction_years, 3);
    }
}
