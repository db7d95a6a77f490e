//! Report assembly: refresh the stores a view needs, gate on their
//! availability, then run the aggregator over the ready rows.
use chrono::NaiveDate;
use orchard_aggregator::summary::{
    self, FieldTreatmentCost, FinanceSummary, HarvestSummary, StockReport,
};
use orchard_aggregator::{SupplierBalance, budget_report, supplier_balances, supplier_ledger};
use orchard_repository::Record;
use orchard_shared::types::{
    Budget, CalendarEvent, DateWindow, Equipment, Field, FinanceTransaction, HarvestRecord,
    InventoryItem, Ledger, PestTreatment, RowId, Supplier, SupplierPayment, SupplierPurchase,
    TreeBlock, VarianceReport,
};
use orchard_store::{Availability, CancelToken, EntityStore, Snapshot, StoreError};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Stores;
use crate::errors::DashboardError;

/// Days ahead covered by the upcoming-events list.
pub const UPCOMING_DAYS: u64 = 14;

/// Rows of a snapshot, or why they cannot be used yet.
pub fn ready<'a, T>(table: &'static str, snapshot: &'a Snapshot<T>) -> Result<&'a [T], DashboardError> {
    match snapshot.availability() {
        Availability::Ready(items) => Ok(items),
        Availability::Pending => Err(DashboardError::Pending(table)),
        Availability::Unavailable(message) => Err(DashboardError::Unavailable {
            table,
            message: message.to_string(),
        }),
    }
}

/// A failed fetch is not fatal here: the error is kept on the snapshot and
/// reported by [`ready`]. Only cancellation aborts the view.
fn settle(table: &'static str, result: Result<(), StoreError>) -> Result<(), DashboardError> {
    match result {
        Ok(()) => Ok(()),
        Err(StoreError::Cancelled) => Err(StoreError::Cancelled.into()),
        Err(e) => {
            warn!(table, error = %e, "Refresh failed");
            Ok(())
        }
    }
}

async fn refreshed<T: Record>(
    store: &EntityStore<T>,
    cancel: &CancelToken,
) -> Result<Snapshot<T>, DashboardError> {
    settle(store.table(), store.refresh(cancel).await)?;
    Ok(store.snapshot().await)
}

#[derive(Debug, Clone, Serialize)]
pub struct SupplierAccount {
    pub supplier: Supplier,
    pub ledger: Ledger,
}

/// Running ledgers of one supplier, or of every supplier when `supplier_id`
/// is `None`. An unknown id yields an empty list.
pub async fn supplier_accounts(
    stores: &Stores,
    supplier_id: Option<RowId>,
    cancel: &CancelToken,
) -> Result<Vec<SupplierAccount>, DashboardError> {
    let (suppliers, purchases, payments) = tokio::join!(
        refreshed(&stores.suppliers, cancel),
        refreshed(&stores.supplier_purchases, cancel),
        refreshed(&stores.supplier_payments, cancel),
    );
    let (suppliers, purchases, payments) = (suppliers?, purchases?, payments?);
    accounts_from(&suppliers, &purchases, &payments, supplier_id)
}

/// Same as [`supplier_accounts`], but over the rows the stores already hold.
/// Used after a write, whose result the store has merged in.
pub async fn current_accounts(
    stores: &Stores,
    supplier_id: Option<RowId>,
) -> Result<Vec<SupplierAccount>, DashboardError> {
    let (suppliers, purchases, payments) = tokio::join!(
        stores.suppliers.snapshot(),
        stores.supplier_purchases.snapshot(),
        stores.supplier_payments.snapshot(),
    );
    accounts_from(&suppliers, &purchases, &payments, supplier_id)
}

fn accounts_from(
    suppliers: &Snapshot<Supplier>,
    purchases: &Snapshot<SupplierPurchase>,
    payments: &Snapshot<SupplierPayment>,
    supplier_id: Option<RowId>,
) -> Result<Vec<SupplierAccount>, DashboardError> {
    let suppliers = ready(Supplier::TABLE, suppliers)?;
    let purchases = ready(SupplierPurchase::TABLE, purchases)?;
    let payments = ready(SupplierPayment::TABLE, payments)?;

    let accounts: Vec<SupplierAccount> = suppliers
        .iter()
        .filter(|supplier| supplier_id.is_none_or(|id| id == supplier.id))
        .map(|supplier| SupplierAccount {
            supplier: supplier.clone(),
            ledger: supplier_ledger(supplier.id, purchases, payments),
        })
        .collect();
    debug!(accounts = accounts.len(), "Built supplier accounts");
    Ok(accounts)
}

/// Budget vs expenses for `window`.
pub async fn budget_view(
    stores: &Stores,
    window: DateWindow,
    cancel: &CancelToken,
) -> Result<VarianceReport, DashboardError> {
    let (budgets, transactions) = tokio::join!(
        refreshed(&stores.budgets, cancel),
        refreshed(&stores.finance_transactions, cancel),
    );
    let (budgets, transactions) = (budgets?, transactions?);

    Ok(budget_report(
        ready(Budget::TABLE, &budgets)?,
        ready(FinanceTransaction::TABLE, &transactions)?,
        window,
    ))
}

/// A supplier balance with the supplier's name, when the supplier row exists.
#[derive(Debug, Clone, Serialize)]
pub struct NamedBalance {
    pub name: Option<String>,
    #[serde(flatten)]
    pub balance: SupplierBalance,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub today: NaiveDate,
    pub finances: FinanceSummary,
    pub harvest: HarvestSummary,
    pub stock: StockReport,
    pub equipment_due: Vec<Equipment>,
    pub treatments: Vec<FieldTreatmentCost>,
    pub upcoming: Vec<CalendarEvent>,
    pub supplier_balances: Vec<NamedBalance>,
}

/// Every dashboard summary, computed from freshly refreshed stores.
///
/// All stores are refreshed concurrently. The report is built only when every
/// one of them is ready; the first pending or unavailable table is returned
/// as the error.
pub async fn dashboard_report(
    stores: &Stores,
    today: NaiveDate,
    cancel: &CancelToken,
) -> Result<DashboardReport, DashboardError> {
    let (
        fields,
        tree_blocks,
        harvest_records,
        transactions,
        suppliers,
        purchases,
        payments,
        equipment,
        treatments,
        inventory,
        calendar,
    ) = tokio::join!(
        refreshed(&stores.fields, cancel),
        refreshed(&stores.tree_blocks, cancel),
        refreshed(&stores.harvest_records, cancel),
        refreshed(&stores.finance_transactions, cancel),
        refreshed(&stores.suppliers, cancel),
        refreshed(&stores.supplier_purchases, cancel),
        refreshed(&stores.supplier_payments, cancel),
        refreshed(&stores.equipment, cancel),
        refreshed(&stores.pest_treatments, cancel),
        refreshed(&stores.inventory_items, cancel),
        refreshed(&stores.calendar_events, cancel),
    );
    let (fields, tree_blocks, harvest_records, transactions) =
        (fields?, tree_blocks?, harvest_records?, transactions?);
    let (suppliers, purchases, payments) = (suppliers?, purchases?, payments?);
    let (equipment, treatments, inventory, calendar) = (equipment?, treatments?, inventory?, calendar?);

    let suppliers = ready(Supplier::TABLE, &suppliers)?;
    let supplier_balances = supplier_balances(
        ready(SupplierPurchase::TABLE, &purchases)?,
        ready(SupplierPayment::TABLE, &payments)?,
    )
    .into_iter()
    .map(|balance| NamedBalance {
        name: suppliers
            .iter()
            .find(|s| s.id == balance.supplier_id)
            .map(|s| s.name.clone()),
        balance,
    })
    .collect();

    Ok(DashboardReport {
        today,
        finances: summary::summarize_finances(ready(FinanceTransaction::TABLE, &transactions)?),
        harvest: summary::summarize_harvest(
            ready(HarvestRecord::TABLE, &harvest_records)?,
            ready(TreeBlock::TABLE, &tree_blocks)?,
        ),
        stock: summary::low_stock(ready(InventoryItem::TABLE, &inventory)?),
        equipment_due: summary::equipment_due(ready(Equipment::TABLE, &equipment)?, today),
        treatments: summary::treatment_costs(
            ready(PestTreatment::TABLE, &treatments)?,
            ready(Field::TABLE, &fields)?,
        ),
        upcoming: summary::upcoming_events(ready(CalendarEvent::TABLE, &calendar)?, today, UPCOMING_DAYS),
        supplier_balances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{DEMO_USER_ID, SeedData};
    use orchard_shared::types::Session;

    #[test]
    fn test_ready_gates_on_availability() {
        let mut snapshot: Snapshot<u8> = Snapshot::default();
        assert!(matches!(ready("t", &snapshot), Err(DashboardError::Pending("t"))));

        snapshot.loaded = true;
        snapshot.items = vec![7];
        assert_eq!(ready("t", &snapshot).unwrap(), &[7]);

        snapshot.error = Some("Request failed: down".to_string());
        let err = ready("t", &snapshot).unwrap_err();
        assert_eq!(err.to_string(), "t is unavailable: Request failed: down");
    }

    #[tokio::test]
    async fn test_cancelled_view_is_an_error() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let stores = Stores::in_memory(SeedData::demo(&Session::new(DEMO_USER_ID), today));
        let cancel = CancelToken::new();
        cancel.cancel();

        let err = dashboard_report(&stores, today, &cancel).await.unwrap_err();
        assert!(matches!(err, DashboardError::Store(StoreError::Cancelled)));
    }
}
