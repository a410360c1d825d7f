use crate::error::{BudgetError, Result};
use crate::input::parse_or_zero;
use serde::{Deserialize, Serialize};

pub const MAX_LEDGER_ENTRIES: usize = 10;

/// A single named debt/credit pair
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Free text such as "Loan from John"; never affects totals
    pub description: String,
    pub debt_amount: f64,
    pub credit_amount: f64,
}

impl LedgerEntry {
    pub fn new(description: impl Into<String>, debt_amount: f64, credit_amount: f64) -> Self {
        Self {
            description: description.into(),
            debt_amount,
            credit_amount,
        }
    }
}

/// At most [`MAX_LEDGER_ENTRIES`] entries, in entry order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerInput {
    entries: Vec<LedgerEntry>,
}

impl LedgerInput {
    pub fn new(entries: Vec<LedgerEntry>) -> Result<Self> {
        if entries.len() > MAX_LEDGER_ENTRIES {
            return Err(BudgetError::TooManyEntries {
                kind: "ledger entries",
                got: entries.len(),
                max: MAX_LEDGER_ENTRIES,
            });
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }
}

/// One ledger row exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerEntryFields {
    pub description: String,
    pub debt: String,
    pub credit: String,
}

impl LedgerEntryFields {
    /// Debt and credit parse independently; anything unparseable is 0
    pub fn to_entry(&self) -> LedgerEntry {
        LedgerEntry {
            description: self.description.trim().to_string(),
            debt_amount: parse_or_zero("debt_amount", &self.debt),
            credit_amount: parse_or_zero("credit_amount", &self.credit),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerFields {
    pub entries: Vec<LedgerEntryFields>,
}

impl LedgerFields {
    pub fn to_input(&self) -> Result<LedgerInput> {
        LedgerInput::new(self.entries.iter().map(LedgerEntryFields::to_entry).collect())
    }
}
