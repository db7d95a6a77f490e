//! Write paths. Every change goes through a store, which merges the stored
//! row into its snapshot; views are then recomputed from the snapshots
//! without reloading the tables.
use chrono::NaiveDate;
use orchard_repository::{Record, RepositoryError};
use orchard_shared::types::{MasterDataItem, RowId, Session, SupplierPayment, SupplierPurchase};
use orchard_store::{CancelToken, EntityStore, Snapshot};
use rust_decimal::Decimal;
use tracing::info;

use crate::config::Stores;
use crate::dashboard::{SupplierAccount, current_accounts};
use crate::errors::AppError;

/// Returns the store's snapshot, fetching the table first unless a fetch
/// already succeeded.
async fn loaded<T: Record>(store: &EntityStore<T>, cancel: &CancelToken) -> Result<Snapshot<T>, AppError> {
    let snapshot = store.snapshot().await;
    if snapshot.loaded && snapshot.error.is_none() {
        return Ok(snapshot);
    }
    store.refresh(cancel).await?;
    Ok(store.snapshot().await)
}

fn required(name: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::usage(format!("--{name} must not be empty")));
    }
    Ok(value.to_string())
}

/// Pick-list values, optionally limited to one `kind`.
pub async fn master_data_items(
    stores: &Stores,
    kind: Option<&str>,
    cancel: &CancelToken,
) -> Result<Vec<MasterDataItem>, AppError> {
    stores.master_data.refresh(cancel).await?;
    let items = stores.master_data.snapshot().await.items;
    Ok(items
        .into_iter()
        .filter(|item| kind.is_none_or(|kind| item.kind == kind))
        .collect())
}

/// Adds a pick-list value. The same value twice in one list is rejected.
pub async fn add_master_data(
    stores: &Stores,
    session: &Session,
    kind: &str,
    value: &str,
    cancel: &CancelToken,
) -> Result<MasterDataItem, AppError> {
    let kind = required("kind", kind)?;
    let value = required("value", value)?;

    let current = loaded(&stores.master_data, cancel).await?;
    if current
        .items
        .iter()
        .any(|item| item.kind == kind && item.value.eq_ignore_ascii_case(&value))
    {
        return Err(AppError::usage(format!("{kind} already lists {value:?}")));
    }

    let mut stored = stores
        .master_data
        .insert(&[MasterDataItem::new(session, kind, value)])
        .await?;
    let item = stored
        .pop()
        .ok_or_else(|| RepositoryError::unavailable("insert returned no row"))?;
    info!(id = %item.id, kind = %item.kind, "Added master data item");
    Ok(item)
}

/// Deletes a pick-list value and returns the row that was removed.
pub async fn delete_master_data(
    stores: &Stores,
    id: RowId,
    cancel: &CancelToken,
) -> Result<MasterDataItem, AppError> {
    let current = loaded(&stores.master_data, cancel).await?;
    let item = current
        .items
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::usage(format!("No master data item with id {id}")))?;

    stores.master_data.delete(id).await?;
    info!(id = %id, kind = %item.kind, "Deleted master data item");
    Ok(item)
}

#[derive(Debug, Clone)]
pub struct NewPurchase {
    pub supplier_id: RowId,
    pub purchased_on: NaiveDate,
    pub description: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub supplier_id: RowId,
    pub paid_on: NaiveDate,
    pub amount: Decimal,
    pub method: Option<String>,
    pub reference: Option<String>,
}

/// Loads the supplier tables and checks that `supplier_id` exists.
async fn known_supplier(stores: &Stores, supplier_id: RowId, cancel: &CancelToken) -> Result<(), AppError> {
    let (suppliers, purchases, payments) = tokio::join!(
        loaded(&stores.suppliers, cancel),
        loaded(&stores.supplier_purchases, cancel),
        loaded(&stores.supplier_payments, cancel),
    );
    let (suppliers, _, _) = (suppliers?, purchases?, payments?);
    if !suppliers.items.iter().any(|supplier| supplier.id == supplier_id) {
        return Err(AppError::usage(format!("No supplier with id {supplier_id}")));
    }
    Ok(())
}

async fn account_after_write(stores: &Stores, supplier_id: RowId) -> Result<SupplierAccount, AppError> {
    current_accounts(stores, Some(supplier_id))
        .await?
        .pop()
        .ok_or_else(|| AppError::usage(format!("No supplier with id {supplier_id}")))
}

/// Records a purchase invoice and returns the supplier's updated account.
pub async fn record_purchase(
    stores: &Stores,
    session: &Session,
    purchase: NewPurchase,
    cancel: &CancelToken,
) -> Result<SupplierAccount, AppError> {
    let description = required("description", &purchase.description)?;
    if purchase.subtotal.is_sign_negative() || purchase.tax.is_sign_negative() {
        return Err(AppError::usage("--subtotal and --tax must not be negative"));
    }
    known_supplier(stores, purchase.supplier_id, cancel).await?;

    let row = SupplierPurchase::new(
        session,
        purchase.supplier_id,
        purchase.purchased_on,
        description,
        purchase.subtotal,
        purchase.tax,
    );
    stores.supplier_purchases.insert(&[row]).await?;
    info!(supplier_id = %purchase.supplier_id, "Recorded supplier purchase");

    account_after_write(stores, purchase.supplier_id).await
}

/// Records a payment and returns the supplier's updated account.
pub async fn record_payment(
    stores: &Stores,
    session: &Session,
    payment: NewPayment,
    cancel: &CancelToken,
) -> Result<SupplierAccount, AppError> {
    if payment.amount <= Decimal::ZERO {
        return Err(AppError::usage("--amount must be positive"));
    }
    known_supplier(stores, payment.supplier_id, cancel).await?;

    let mut row = SupplierPayment::new(session, payment.supplier_id, payment.paid_on, payment.amount);
    row.method = payment.method;
    row.reference = payment.reference;
    stores.supplier_payments.insert(&[row]).await?;
    info!(supplier_id = %payment.supplier_id, amount = %payment.amount, "Recorded supplier payment");

    account_after_write(stores, payment.supplier_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{DEMO_USER_ID, SeedData};

    fn stores() -> Stores {
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        Stores::in_memory(SeedData::demo(&Session::new(DEMO_USER_ID), today))
    }

    #[tokio::test]
    async fn test_add_rejects_blank_and_duplicate_values() {
        let stores = stores();
        let session = Session::new(DEMO_USER_ID);
        let cancel = CancelToken::new();

        let err = add_master_data(&stores, &session, "unit", "  ", &cancel).await.unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));

        let err = add_master_data(&stores, &session, "variety", "koroneiki", &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Usage(msg) if msg.contains("variety")));
    }

    #[tokio::test]
    async fn test_loaded_fetches_once() {
        let stores = stores();
        let cancel = CancelToken::new();

        let first = loaded(&stores.suppliers, &cancel).await.unwrap();
        assert!(first.loaded);

        cancel.cancel();
        let second = loaded(&stores.suppliers, &cancel).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_purchase_amounts_are_validated() {
        let stores = stores();
        let purchase = NewPurchase {
            supplier_id: RowId::new_v4(),
            purchased_on: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            description: "Crates".to_string(),
            subtotal: Decimal::from(-5),
            tax: Decimal::ZERO,
        };

        let err = record_purchase(&stores, &Session::new(DEMO_USER_ID), purchase, &CancelToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }
}
