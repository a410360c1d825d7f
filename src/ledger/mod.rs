//! Debt/credit tracker: independent totals over up to ten entries

mod entry;
mod balance;

pub use entry::{LedgerEntry, LedgerEntryFields, LedgerFields, LedgerInput, MAX_LEDGER_ENTRIES};
pub use balance::{calculate_ledger, Balance, LedgerResult};
