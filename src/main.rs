//! Budget Manager CLI
//!
//! One subcommand per screen. Every amount is taken as text and parsed with the same
//! rules a form front end would apply.

use anyhow::Context;
use budget_manager::ledger::LedgerEntryFields;
use budget_manager::projection::{ProjectionSummary, DEFAULT_EXPENSE_GROWTH_RATE};
use budget_manager::report::{render_projection, render_projection_error, LedgerReport, SavingsReport};
use budget_manager::savings::ExpenseCategory;
use budget_manager::{
    calculate_ledger, BudgetError, LedgerFields, LedgerResult, ProjectionConfig, ProjectionEngine,
    ProjectionFields, ProjectionResult, SavingsFields, SavingsResult, Screen,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "budget_manager", version, about = "Budget Manager calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Predict net worth year by year
    Project(ProjectArgs),
    /// Monthly income minus expenses
    Savings(SavingsArgs),
    /// Total debts and credits
    Ledger(LedgerArgs),
    /// List the available screens
    Menu,
}

#[derive(Args)]
struct ProjectArgs {
    #[arg(long, default_value = "")]
    annual_income: String,
    #[arg(long, default_value = "")]
    annual_expenses: String,
    /// Annual salary hike (%)
    #[arg(long, default_value = "")]
    salary_hike: String,
    #[arg(long, default_value = "")]
    stocks_investment: String,
    /// Expected stocks return (%)
    #[arg(long, default_value = "")]
    stocks_return: String,
    #[arg(long, default_value = "")]
    funds_investment: String,
    /// Expected funds return (%)
    #[arg(long, default_value = "")]
    funds_return: String,
    #[arg(long, default_value = "")]
    savings_amount: String,
    /// Savings interest rate (%)
    #[arg(long, default_value = "")]
    savings_interest: String,
    #[arg(long, default_value = "")]
    other_investment: String,
    /// Other investments return (%)
    #[arg(long, default_value = "")]
    other_return: String,
    #[arg(long, default_value = "")]
    current_networth: String,
    /// Years to predict (10 when blank or not an integer)
    #[arg(long, default_value = "")]
    years: String,
    /// Annual expense growth as a decimal
    #[arg(long, default_value_t = DEFAULT_EXPENSE_GROWTH_RATE)]
    expense_growth: f64,
    #[arg(long)]
    json: bool,
}

impl ProjectArgs {
    fn fields(&self) -> ProjectionFields {
        ProjectionFields {
            annual_income: self.annual_income.clone(),
            annual_expenses: self.annual_expenses.clone(),
            salary_hike: self.salary_hike.clone(),
            stocks_investment: self.stocks_investment.clone(),
            stocks_return: self.stocks_return.clone(),
            funds_investment: self.funds_investment.clone(),
            funds_return: self.funds_return.clone(),
            savings_amount: self.savings_amount.clone(),
            savings_interest: self.savings_interest.clone(),
            other_investment: self.other_investment.clone(),
            other_return: self.other_return.clone(),
            current_networth: self.current_networth.clone(),
            prediction_years: self.years.clone(),
        }
    }
}

#[derive(Args)]
struct SavingsArgs {
    #[arg(long, default_value = "")]
    income: String,
    /// Comma-separated amounts in category order (see `menu`)
    #[arg(long, value_delimiter = ',')]
    expenses: Vec<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LedgerArgs {
    /// DEBT:CREDIT[:DESCRIPTION], repeatable up to 10 times
    #[arg(long = "entry")]
    entries: Vec<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ProjectionOutput<'a> {
    result: &'a ProjectionResult,
    summary: ProjectionSummary,
}

#[derive(Serialize)]
struct SavingsOutput<'a> {
    result: &'a SavingsResult,
    report: SavingsReport,
}

#[derive(Serialize)]
struct LedgerOutput<'a> {
    result: &'a LedgerResult,
    report: LedgerReport,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project(args) => run_project(&args),
        Command::Savings(args) => run_savings(&args),
        Command::Ledger(args) => run_ledger(&args),
        Command::Menu => {
            print_menu();
            Ok(())
        }
    }
}

fn run_project(args: &ProjectArgs) -> anyhow::Result<()> {
    let engine = ProjectionEngine::new(ProjectionConfig {
        expense_growth_rate: args.expense_growth,
        ..Default::default()
    });

    let result = match engine.project_fields(&args.fields()) {
        Ok(result) => result,
        Err(err) if err.is_validation() => exit_with(&render_projection_error(), &err),
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let output = ProjectionOutput {
            result: &result,
            summary: result.summary(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_projection(&result));
    }
    Ok(())
}

fn run_savings(args: &SavingsArgs) -> anyhow::Result<()> {
    let fields = SavingsFields {
        income: args.income.clone(),
        expenses: args.expenses.clone(),
    };

    let result = match fields.calculate() {
        Ok(result) => result,
        Err(err) if err.is_validation() => {
            let report = SavingsReport::invalid();
            exit_with(&format!("{}\n{}", report.total_expenses, report.monthly_savings), &err)
        }
        Err(err) => return Err(err).context("reading expense amounts"),
    };
    let report = SavingsReport::from_result(&result);

    if args.json {
        let output = SavingsOutput {
            result: &result,
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.total_expenses);
        println!("{}", report.monthly_savings);
    }
    Ok(())
}

fn run_ledger(args: &LedgerArgs) -> anyhow::Result<()> {
    let fields = LedgerFields {
        entries: args.entries.iter().map(|e| parse_entry_arg(e)).collect(),
    };
    let input = fields.to_input().context("reading ledger entries")?;
    let result = calculate_ledger(&input);
    let report = LedgerReport::from_result(&result);

    if args.json {
        let output = LedgerOutput {
            result: &result,
            report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", report.total_debt);
        println!("{}", report.total_credit);
        println!("{}", report.balance);
    }
    Ok(())
}

/// Split `DEBT:CREDIT[:DESCRIPTION]`; missing parts are blank
fn parse_entry_arg(arg: &str) -> LedgerEntryFields {
    let mut parts = arg.splitn(3, ':');
    LedgerEntryFields {
        debt: parts.next().unwrap_or_default().to_string(),
        credit: parts.next().unwrap_or_default().to_string(),
        description: parts.next().unwrap_or_default().to_string(),
    }
}

fn print_menu() {
    println!("{}", Screen::Main.title());
    println!("{}\n", "=".repeat(Screen::Main.title().len()));
    for screen in Screen::ALL.iter().filter(|s| **s != Screen::Main) {
        println!("  {:<16} {}", screen.id(), screen.title());
    }

    println!("\nExpense categories (savings --expenses order):");
    for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, category);
    }
}

fn exit_with(message: &str, err: &BudgetError) -> ! {
    log::debug!("validation failed: {}", err);
    eprintln!("{}", message);
    std::process::exit(1);
}
