//! Load projection scenarios from CSV and write yearly net worth back out

use super::{Scenario, ScenarioOutcome};
use crate::error::Result;
use crate::projection::ProjectionFields;
use csv::{Reader, Writer};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

/// Default scenario file, relative to the working directory
pub const DEFAULT_SCENARIOS_PATH: &str = "scenarios.csv";

/// Raw CSV row. Headers use the projection field identifiers; every column is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    name: String,
    annual_income: String,
    annual_expenses: String,
    salary_hike: String,
    stocks_investment: String,
    stocks_return: String,
    funds_investment: String,
    funds_return: String,
    savings_amount: String,
    savings_interest: String,
    other_investment: String,
    other_return: String,
    current_networth: String,
    prediction_years: String,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> Scenario {
        let name = match self.name.trim() {
            "" => format!("scenario-{}", row_number),
            name => name.to_string(),
        };

        Scenario {
            name,
            fields: ProjectionFields {
                annual_income: self.annual_income,
                annual_expenses: self.annual_expenses,
                salary_hike: self.salary_hike,
                stocks_investment: self.stocks_investment,
                stocks_return: self.stocks_return,
                funds_investment: self.funds_investment,
                funds_return: self.funds_return,
                savings_amount: self.savings_amount,
                savings_interest: self.savings_interest,
                other_investment: self.other_investment,
                other_return: self.other_return,
                current_networth: self.current_networth,
                prediction_years: self.prediction_years,
            },
        }
    }
}

/// Output row: one per scenario per projected year
#[derive(Debug, Serialize)]
struct NetWorthRow<'a> {
    scenario: &'a str,
    year: u32,
    net_worth: f64,
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (i, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(i + 1));
    }

    Ok(scenarios)
}

/// Write `scenario,year,net_worth` rows for every successful outcome. Returns rows written.
pub fn write_net_worth_csv<W: Write>(writer: W, outcomes: &[ScenarioOutcome]) -> Result<usize> {
    let mut csv_writer = Writer::from_writer(writer);
    let mut written = 0;

    for outcome in outcomes {
        let Ok(result) = &outcome.result else {
            continue;
        };
        for row in &result.rows {
            csv_writer.serialize(NetWorthRow {
                scenario: &outcome.name,
                year: row.year,
                net_worth: row.net_worth,
            })?;
            written += 1;
        }
    }

    csv_writer.flush()?;
    Ok(written)
}
