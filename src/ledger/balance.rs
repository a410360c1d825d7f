use super::entry::LedgerInput;
use crate::format::currency;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerResult {
    pub total_debt: f64,
    pub total_credit: f64,
    /// `total_credit - total_debt`
    pub net_balance: f64,
}

impl LedgerResult {
    pub fn balance(&self) -> Balance {
        Balance::from_net(self.net_balance)
    }
}

/// Which side of the ledger outweighs the other. Amounts are magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Balance {
    NetDebt(f64),
    NetCredit(f64),
    Balanced,
}

impl Balance {
    pub fn from_net(net_balance: f64) -> Self {
        if net_balance < 0.0 {
            Balance::NetDebt(net_balance.abs())
        } else if net_balance > 0.0 {
            Balance::NetCredit(net_balance)
        } else {
            Balance::Balanced
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::NetDebt(amount) => write!(f, "Net Debt: {}", currency(*amount)),
            Balance::NetCredit(amount) => write!(f, "Net Credit: {}", currency(*amount)),
            Balance::Balanced => f.write_str("Balanced: $0.00"),
        }
    }
}

pub fn calculate_ledger(input: &LedgerInput) -> LedgerResult {
    let (total_debt, total_credit) = input
        .entries()
        .iter()
        .fold((0.0, 0.0), |(debt, credit), e| (debt + e.debt_amount, credit + e.credit_amount));

    LedgerResult {
        total_debt,
        total_credit,
        net_balance: total_credit - total_debt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{LedgerEntry, LedgerEntryFields, LedgerFields};

    fn row(debt: &str, credit: &str) -> LedgerEntryFields {
        LedgerEntryFields {
            description: String::new(),
            debt: debt.to_string(),
            credit: credit.to_string(),
        }
    }

    #[test]
    fn test_unparseable_debt_still_balances() {
        let fields = LedgerFields {
            entries: vec![row("500", "0"), row("0", "300"), row("abc", "200")],
        };
        let result = calculate_ledger(&fields.to_input().unwrap());
        assert_eq!(result.total_debt, 500.0);
        assert_eq!(result.total_credit, 500.0);
        assert_eq!(result.net_balance, 0.0);
        assert_eq!(result.balance(), Balance::Balanced);
        assert_eq!(result.balance().to_string(), "Balanced: $0.00");
    }

    #[test]
    fn test_totals_ignore_entry_order() {
        let entries = vec![
            LedgerEntry::new("Car loan", 1200.0, 0.0),
            LedgerEntry::new("Owed by Sam", 0.0, 75.5),
            LedgerEntry::new("Card", 300.25, 10.0),
        ];
        let mut reversed = entries.clone();
        reversed.reverse();

        let a = calculate_ledger(&LedgerInput::new(entries).unwrap());
        let b = calculate_ledger(&LedgerInput::new(reversed).unwrap());
        assert_eq!(a, b);
        assert_eq!(a.total_debt, 1500.25);
        assert_eq!(a.total_credit, 85.5);
    }

    #[test]
    fn test_net_debt_shows_magnitude() {
        let input = LedgerInput::new(vec![LedgerEntry::new("", 250.0, 100.0)]).unwrap();
        let result = calculate_ledger(&input);
        assert_eq!(result.net_balance, -150.0);
        assert_eq!(result.balance(), Balance::NetDebt(150.0));
        assert_eq!(result.balance().to_string(), "Net Debt: $150.00");
    }

    #[test]
    fn test_net_credit() {
        let input = LedgerInput::new(vec![LedgerEntry::new("", 0.0, 42.5)]).unwrap();
        assert_eq!(calculate_ledger(&input).balance().to_string(), "Net Credit: $42.50");
    }

    #[test]
    fn test_empty_ledger_is_balanced() {
        let result = calculate_ledger(&LedgerInput::default());
        assert_eq!(result.total_debt, 0.0);
        assert_eq!(result.total_credit, 0.0);
        assert_eq!(result.balance(), Balance::Balanced);
    }
}
