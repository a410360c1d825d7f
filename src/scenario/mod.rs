//! Scenario runner for batch projections
//!
//! Holds one engine configuration and projects many independent scenarios against it
//! in parallel. A scenario that fails validation is reported on its own and does not
//! stop the rest of the batch.

pub mod loader;

pub use loader::{load_scenarios, load_scenarios_from_reader, write_net_worth_csv, DEFAULT_SCENARIOS_PATH};

use crate::error::Result;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionFields, ProjectionResult};
use log::{info, warn};
use rayon::prelude::*;

/// A named set of projection fields
#[derive(Debug, Clone, Default)]
pub struct Scenario {
    pub name: String,
    pub fields: ProjectionFields,
}

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<ProjectionResult>,
}

impl ScenarioOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(config),
        }
    }

    pub fn run(&self, scenario: &Scenario) -> ScenarioOutcome {
        let result = self.engine.project_fields(&scenario.fields);
        if let Err(err) = &result {
            warn!("scenario `{}` skipped: {}", scenario.name, err);
        }
        ScenarioOutcome {
            name: scenario.name.clone(),
            result,
        }
    }

    /// Outcomes come back in input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        let outcomes: Vec<ScenarioOutcome> = scenarios.par_iter().map(|s| self.run(s)).collect();

        let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
        info!(
            "projected {} scenarios ({} failed validation)",
            outcomes.len(),
            failed
        );
        outcomes
    }

    pub fn config(&self) -> &ProjectionConfig {
        self.engine.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str, income: &str, years: &str) -> Scenario {
        Scenario {
            name: name.to_string(),
            fields: ProjectionFields {
                annual_income: income.to_string(),
                salary_hike: "3".to_string(),
                prediction_years: years.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let runner = ScenarioRunner::default();
        let scenarios = vec![
            scenario("a", "40000", "5"),
            scenario("b", "not a number", "5"),
            scenario("c", "90000", "2"),
        ];

        let outcomes = runner.run_batch(&scenarios);
        let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);

        assert_eq!(outcomes[0].result.as_ref().unwrap().len(), 5);
        assert!(outcomes[1].result.as_ref().unwrap_err().is_validation());
        assert_eq!(outcomes[2].result.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_higher_income_projects_higher() {
        let runner = ScenarioRunner::default();
        let low = runner.run(&scenario("low", "30000", "10"));
        let high = runner.run(&scenario("high", "60000", "10"));

        let final_low = low.result.unwrap().summary().final_net_worth.unwrap();
        let final_high = high.result.unwrap().summary().final_net_worth.unwrap();
        assert!(final_high > final_low);
    }

    #[test]
    fn test_runner_uses_config() {
        let runner = ScenarioRunner::new(ProjectionConfig {
            expense_growth_rate: 0.1,
            default_prediction_years: 3,
        });
        assert_eq!(runner.config().expense_growth_rate, 0.1);
        let outcome = runner.run(&scenario("x", "100", ""));
        assert_eq!(outcome.result.unwrap().len(), 3);
    }
}
