use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::RowId;

/// Whether a ledger movement raises or lowers the balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Increases the balance (a purchase, a planned line).
    Debit,
    /// Decreases the balance (a payment, actual spend).
    Credit,
}

/// A dated monetary movement fed to the ledger builder.
///
/// `date` is optional because source rows may carry no usable date; such
/// events cannot be ordered and are reported back as skipped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEvent {
    pub id: RowId,
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
    pub label: String,
}

impl LedgerEvent {
    pub fn new(id: RowId, date: NaiveDate, amount: Decimal, label: impl Into<String>) -> Self {
        Self {
            id,
            date: Some(date),
            amount,
            label: label.into(),
        }
    }
}

/// One emitted line of a running ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: RowId,
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub amount: Decimal,
    pub label: String,
    /// Balance after applying this entry.
    pub balance: Decimal,
}

/// A chronologically ordered ledger with running balances.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    pub entries: Vec<LedgerEntry>,
    /// Events left out because they could not be placed in time or carried an
    /// invalid amount.
    pub skipped: Vec<LedgerEvent>,
}

impl Ledger {
    /// Balance after the last entry; zero for an empty ledger.
    pub fn balance(&self) -> Decimal {
        self.entries
            .last()
            .map(|entry| entry.balance)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn total(&self, kind: EntryKind) -> Decimal {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.amount)
            .sum()
    }

    /// An empty ledger is a "no data" state, not an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
