//! Running balances carried from one projected year to the next

use super::input::ProjectionInput;

/// Annual growth factors as decimals (0.05 for 5%)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthRates {
    pub expenses: f64,
    pub salary: f64,
    pub stocks: f64,
    pub funds: f64,
    pub savings: f64,
    pub other: f64,
}

impl GrowthRates {
    /// Convert the input's percentage rates, with a separately configured expense growth
    pub fn from_input(input: &ProjectionInput, expense_growth_rate: f64) -> Self {
        Self {
            expenses: expense_growth_rate,
            salary: input.salary_hike_pct / 100.0,
            stocks: input.stocks_return_pct / 100.0,
            funds: input.funds_return_pct / 100.0,
            savings: input.savings_interest_pct / 100.0,
            other: input.other_return_pct / 100.0,
        }
    }
}

/// State of the household balances at the end of a projected year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Last completed year (0 before the first year)
    pub year: u32,

    pub annual_income: f64,
    pub annual_expenses: f64,
    pub stocks_investment: f64,
    pub funds_investment: f64,
    pub savings_amount: f64,
    pub other_investment: f64,

    /// Net worth at the end of `year`; the input's current net worth until year 1 completes
    pub net_worth: f64,
}

impl ProjectionState {
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            year: 0,
            annual_income: input.annual_income,
            annual_expenses: input.annual_expenses,
            stocks_investment: input.stocks_investment,
            funds_investment: input.funds_investment,
            savings_amount: input.savings_amount,
            other_investment: input.other_investment,
            net_worth: input.current_networth,
        }
    }

    /// Compound every balance by one year, then recompute net worth from scratch.
    ///
    /// Order matters for bit-exact output: expenses, income, stocks, funds, savings, other.
    pub fn advance_year(&mut self, rates: &GrowthRates) {
        self.year += 1;

        self.annual_expenses *= 1.0 + rates.expenses;
        self.annual_income *= 1.0 + rates.salary;
        self.stocks_investment *= 1.0 + rates.stocks;
        self.funds_investment *= 1.0 + rates.funds;
        self.savings_amount *= 1.0 + rates.savings;
        self.other_investment *= 1.0 + rates.other;

        self.net_worth = self.assets() + self.annual_surplus();
    }

    /// Sum of invested and saved balances
    pub fn assets(&self) -> f64 {
        self.stocks_investment + self.funds_investment + self.savings_amount + self.other_investment
    }

    /// Income left after expenses (negative when expenses outgrow income)
    pub fn annual_surplus(&self) -> f64 {
        self.annual_income - self.annual_expenses
    }
}
