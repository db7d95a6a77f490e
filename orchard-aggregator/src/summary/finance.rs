use std::collections::BTreeMap;

use orchard_shared::types::{FinanceTransaction, TransactionKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month_key;
use crate::variance::consumed_percentage;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyFlow {
    /// `YYYY-MM`
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

/// Expense total of one category and its share of all expenses, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Decimal,
    pub share: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FinanceSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net: Decimal,
    /// Oldest month first.
    pub by_month: Vec<MonthlyFlow>,
    /// Largest expense category first; ties by name.
    pub expenses_by_category: Vec<CategoryShare>,
}

impl FinanceSummary {
    pub fn is_empty(&self) -> bool {
        self.by_month.is_empty()
    }
}

/// Totals, monthly cash flow and expense breakdown of a set of transactions.
pub fn summarize_finances(transactions: &[FinanceTransaction]) -> FinanceSummary {
    let mut months: BTreeMap<String, MonthlyFlow> = BTreeMap::new();
    let mut categories: BTreeMap<&str, Decimal> = BTreeMap::new();
    let mut summary = FinanceSummary::default();

    for transaction in transactions {
        let month = month_key(transaction.occurred_on);
        let flow = months.entry(month.clone()).or_insert_with(|| MonthlyFlow {
            month,
            ..MonthlyFlow::default()
        });
        match transaction.kind {
            TransactionKind::Income => {
                flow.income += transaction.amount;
                summary.total_income += transaction.amount;
            }
            TransactionKind::Expense => {
                flow.expense += transaction.amount;
                summary.total_expense += transaction.amount;
                *categories.entry(transaction.category.as_str()).or_insert(Decimal::ZERO) +=
                    transaction.amount;
            }
        }
        flow.net = flow.income - flow.expense;
    }

    summary.net = summary.total_income - summary.total_expense;
    summary.by_month = months.into_values().collect();

    let total_expense = summary.total_expense;
    let mut shares: Vec<CategoryShare> = categories
        .into_iter()
        .map(|(category, amount)| CategoryShare {
            category: category.to_string(),
            amount,
            share: consumed_percentage(total_expense, amount),
        })
        .collect();
    // BTreeMap order already sorts by name, the stable sort keeps it for ties
    shares.sort_by(|a, b| b.amount.cmp(&a.amount));
    summary.expenses_by_category = shares;

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orchard_shared::types::Session;
    use uuid::Uuid;

    fn tx(kind: TransactionKind, category: &str, amount: i64, m: u32, d: u32) -> FinanceTransaction {
        FinanceTransaction::new(
            &Session::new(Uuid::nil()),
            kind,
            category,
            Decimal::from(amount),
            NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
        )
    }

    #[test]
    fn test_monthly_grouping_and_totals() {
        let transactions = vec![
            tx(TransactionKind::Income, "sales", 1000, 2, 3),
            tx(TransactionKind::Expense, "labor", 300, 1, 20),
            tx(TransactionKind::Expense, "fuel", 100, 2, 28),
            tx(TransactionKind::Expense, "labor", 100, 2, 1),
        ];

        let summary = summarize_finances(&transactions);

        assert_eq!(summary.total_income, Decimal::from(1000));
        assert_eq!(summary.total_expense, Decimal::from(500));
        assert_eq!(summary.net, Decimal::from(500));

        assert_eq!(summary.by_month.len(), 2);
        assert_eq!(summary.by_month[0].month, "2024-01");
        assert_eq!(summary.by_month[0].net, Decimal::from(-300));
        assert_eq!(summary.by_month[1].month, "2024-02");
        assert_eq!(summary.by_month[1].income, Decimal::from(1000));
        assert_eq!(summary.by_month[1].expense, Decimal::from(200));
        assert_eq!(summary.by_month[1].net, Decimal::from(800));
    }

    #[test]
    fn test_expense_shares() {
        let transactions = vec![
            tx(TransactionKind::Expense, "fuel", 100, 1, 1),
            tx(TransactionKind::Expense, "labor", 300, 1, 2),
            tx(TransactionKind::Income, "sales", 50, 1, 3),
        ];

        let summary = summarize_finances(&transactions);

        assert_eq!(summary.expenses_by_category.len(), 2);
        assert_eq!(summary.expenses_by_category[0].category, "labor");
        assert_eq!(summary.expenses_by_category[0].share, Decimal::from(75));
        assert_eq!(summary.expenses_by_category[1].category, "fuel");
        assert_eq!(summary.expenses_by_category[1].share, Decimal::from(25));
    }

    #[test]
    fn test_income_only_has_no_shares() {
        let summary = summarize_finances(&[tx(TransactionKind::Income, "sales", 50, 1, 3)]);
        assert!(summary.expenses_by_category.is_empty());
        assert_eq!(summary.total_expense, Decimal::ZERO);
    }

    #[test]
    fn test_empty_transactions() {
        let summary = summarize_finances(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.net, Decimal::ZERO);
    }
}
