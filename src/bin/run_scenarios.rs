//! Project every scenario in a CSV file
//!
//! Usage: run_scenarios [INPUT.csv] [OUTPUT.csv]
//! Defaults to scenarios.csv in, scenario_projection_output.csv out.
//! Accepts config via environment variables:
//!   EXPENSE_GROWTH_RATE (decimal, default 0.03), DEFAULT_PREDICTION_YEARS (default 10)

use anyhow::Context;
use budget_manager::projection::{ProjectionConfig, DEFAULT_EXPENSE_GROWTH_RATE, DEFAULT_PREDICTION_YEARS};
use budget_manager::scenario::{load_scenarios, write_net_worth_csv, ScenarioRunner, DEFAULT_SCENARIOS_PATH};
use std::env;
use std::fs::File;
use std::time::Instant;

fn config_from_env() -> anyhow::Result<ProjectionConfig> {
    let expense_growth_rate = match env::var("EXPENSE_GROWTH_RATE") {
        Ok(v) => v.parse().context("EXPENSE_GROWTH_RATE must be a decimal")?,
        Err(_) => DEFAULT_EXPENSE_GROWTH_RATE,
    };
    let default_prediction_years = match env::var("DEFAULT_PREDICTION_YEARS") {
        Ok(v) => v.parse().context("DEFAULT_PREDICTION_YEARS must be a whole number")?,
        Err(_) => DEFAULT_PREDICTION_YEARS,
    };

    Ok(ProjectionConfig {
        expense_growth_rate,
        default_prediction_years,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());
    let output_path = args
        .next()
        .unwrap_or_else(|| "scenario_projection_output.csv".to_string());

    let config = config_from_env()?;
    log::info!("config: {:?}", config);

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);
    let scenarios = load_scenarios(&input_path).with_context(|| format!("loading {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new(config);
    let proj_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let summary = result.summary();
                match summary.final_net_worth {
                    Some(final_nw) => println!(
                        "  {:<24} {:>3} years  final ${:.2}",
                        outcome.name, summary.years, final_nw
                    ),
                    None => println!("  {:<24}   0 years", outcome.name),
                }
            }
            Err(err) => println!("  {:<24} skipped: {}", outcome.name, err),
        }
    }

    let file = File::create(&output_path).with_context(|| format!("creating {}", output_path))?;
    let rows = write_net_worth_csv(file, &outcomes)?;
    println!("\n{} rows written to: {}", rows, output_path);

    Ok(())
}
