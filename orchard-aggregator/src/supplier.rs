//! Supplier account views: the per-supplier running ledger and the
//! outstanding balance across all suppliers.
use orchard_shared::types::{
    ActualAmount, Ledger, LedgerEvent, PlannedAmount, RowId, SupplierPayment, SupplierPurchase,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::ledger::build_ledger;
use crate::variance::compute_variance;

/// Builds the running ledger for one supplier.
///
/// Purchases of `supplier_id` are debits (their `total`), payments are
/// credits. Rows of other suppliers are ignored, so callers may pass whole
/// tables.
///
/// # Arguments
///
/// * `supplier_id` - The supplier whose account is built
/// * `purchases` - Purchase rows, in the order they were loaded
/// * `payments` - Payment rows, in the order they were loaded
///
/// # Returns
///
/// A `Ledger` whose final balance is the amount still owed to the supplier.
pub fn supplier_ledger(
    supplier_id: RowId,
    purchases: &[SupplierPurchase],
    payments: &[SupplierPayment],
) -> Ledger {
    let debits: Vec<LedgerEvent> = purchases
        .iter()
        .filter(|purchase| purchase.supplier_id == supplier_id)
        .map(LedgerEvent::from)
        .collect();
    let credits: Vec<LedgerEvent> = payments
        .iter()
        .filter(|payment| payment.supplier_id == supplier_id)
        .map(LedgerEvent::from)
        .collect();

    debug!(
        supplier_id = %supplier_id,
        purchases = debits.len(),
        payments = credits.len(),
        "Building supplier ledger"
    );
    build_ledger(&debits, &credits)
}

/// What the farm owes one supplier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierBalance {
    pub supplier_id: RowId,
    pub purchased: Decimal,
    pub paid: Decimal,
    pub outstanding: Decimal,
}

/// Purchased vs paid per supplier over the whole history, ordered by
/// supplier id.
///
/// Suppliers with payments but no purchases do not appear. Rows carry no
/// alert flag.
pub fn supplier_balances(
    purchases: &[SupplierPurchase],
    payments: &[SupplierPayment],
) -> Vec<SupplierBalance> {
    let planned: Vec<PlannedAmount> = purchases.iter().map(PlannedAmount::from).collect();
    let actual: Vec<ActualAmount> = payments.iter().map(ActualAmount::from).collect();

    compute_variance(&planned, &actual, None)
        .categories
        .into_iter()
        .filter_map(|row| match row.category.parse::<RowId>() {
            Ok(supplier_id) => Some(SupplierBalance {
                supplier_id,
                purchased: row.planned,
                paid: row.actual,
                outstanding: row.variance,
            }),
            Err(e) => {
                warn!(category = %row.category, error = %e, "Balance row is not keyed by a supplier id");
                None
            }
        })
        .collect()
}
