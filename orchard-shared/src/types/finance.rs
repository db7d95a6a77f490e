use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ActualAmount, ParseKindError, RowId, Session, UserId};

/// Direction of a finance transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ParseKindError::new("transaction kind", other)),
        }
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = ParseKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An income or expense line in the farm's books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct FinanceTransaction {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    #[sqlx(try_from = "String")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub occurred_on: NaiveDate,
    pub description: Option<String>,
}

impl FinanceTransaction {
    pub fn new(
        session: &Session,
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Decimal,
        occurred_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            kind,
            category: category.into(),
            amount,
            occurred_on,
            description: None,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Expenses are the "actual" side of a budget comparison.
impl From<&FinanceTransaction> for ActualAmount {
    fn from(transaction: &FinanceTransaction) -> Self {
        ActualAmount {
            category: transaction.category.clone(),
            date: Some(transaction.occurred_on),
            amount: transaction.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_kind_round_trips_through_text() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(TransactionKind::Expense.as_str(), "expense");
    }

    #[test]
    fn test_unknown_transaction_kind_is_rejected() {
        let err = TransactionKind::try_from("refund".to_string()).unwrap_err();
        assert_eq!(err.value, "refund");
        assert_eq!(err.to_string(), "Unknown transaction kind value: refund");
    }

    #[test]
    fn test_transaction_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
