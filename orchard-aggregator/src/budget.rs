use orchard_shared::types::{
    ActualAmount, Budget, DateWindow, FinanceTransaction, PlannedAmount, VarianceReport,
};

use crate::variance::compute_variance;

/// Budget vs expenses per category for `window`.
///
/// Budgets count in full when their period overlaps the window, even partly;
/// they are not prorated. Only expense transactions dated inside the window
/// count as actual spend; income is ignored.
pub fn budget_report(
    budgets: &[Budget],
    transactions: &[FinanceTransaction],
    window: DateWindow,
) -> VarianceReport {
    let planned: Vec<PlannedAmount> = budgets
        .iter()
        .filter(|budget| budget.overlaps(&window))
        .map(PlannedAmount::from)
        .collect();
    let actual: Vec<ActualAmount> = transactions
        .iter()
        .filter(|transaction| transaction.is_expense())
        .map(ActualAmount::from)
        .collect();

    compute_variance(&planned, &actual, Some(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orchard_shared::types::{Session, TransactionKind};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn quarter() -> DateWindow {
        DateWindow::new(day(1, 1), day(3, 31))
    }

    #[test]
    fn test_budget_report_counts_expenses_in_window() {
        let session = Session::new(Uuid::new_v4());
        let budgets = vec![
            Budget::new(&session, "fertilizer", Decimal::from(5000), quarter()),
            Budget::new(
                &session,
                "fertilizer",
                Decimal::from(9999),
                DateWindow::new(day(7, 1), day(9, 30)),
            ),
        ];
        let transactions = vec![
            FinanceTransaction::new(&session, TransactionKind::Expense, "fertilizer", Decimal::from(4000), day(2, 1)),
            FinanceTransaction::new(&session, TransactionKind::Expense, "fertilizer", Decimal::from(600), day(3, 31)),
            FinanceTransaction::new(&session, TransactionKind::Expense, "fertilizer", Decimal::from(700), day(4, 1)),
            FinanceTransaction::new(&session, TransactionKind::Income, "fertilizer", Decimal::from(10000), day(2, 2)),
        ];

        let report = budget_report(&budgets, &transactions, quarter());

        let row = report.get("fertilizer").unwrap();
        assert_eq!(row.planned, Decimal::from(5000));
        assert_eq!(row.actual, Decimal::from(4600));
        assert_eq!(row.percentage, Decimal::from(92));
        assert!(row.alerting);
        assert_eq!(report.window, Some(quarter()));
    }

    #[test]
    fn test_budget_report_respects_custom_threshold() {
        let session = Session::new(Uuid::new_v4());
        let mut budget = Budget::new(&session, "labor", Decimal::from(1000), quarter());
        budget.alert_threshold = Decimal::from(50);
        let transactions = vec![FinanceTransaction::new(
            &session,
            TransactionKind::Expense,
            "labor",
            Decimal::from(500),
            day(1, 15),
        )];

        let report = budget_report(&[budget], &transactions, quarter());

        assert!(report.get("labor").unwrap().alerting);
    }

    #[test]
    fn test_no_budgets_means_empty_report() {
        let session = Session::new(Uuid::new_v4());
        let transactions = vec![FinanceTransaction::new(
            &session,
            TransactionKind::Expense,
            "labor",
            Decimal::from(500),
            day(1, 15),
        )];
        assert!(budget_report(&[], &transactions, quarter()).is_empty());
    }

    #[test]
    fn test_partly_overlapping_budget_counts_in_full() {
        let session = Session::new(Uuid::new_v4());
        // January to June, viewed through the first quarter
        let budget = Budget::new(
            &session,
            "fuel",
            Decimal::from(1200),
            DateWindow::new(day(1, 1), day(6, 30)),
        );
        let transactions = vec![
            FinanceTransaction::new(&session, TransactionKind::Expense, "fuel", Decimal::from(300), day(2, 10)),
            FinanceTransaction::new(&session, TransactionKind::Expense, "fuel", Decimal::from(500), day(5, 10)),
        ];

        let report = budget_report(&[budget], &transactions, quarter());

        let row = report.get("fuel").unwrap();
        assert_eq!(row.planned, Decimal::from(1200));
        assert_eq!(row.actual, Decimal::from(300));
        assert_eq!(row.percentage, Decimal::from(25));
    }
}
