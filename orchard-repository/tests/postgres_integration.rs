//! Integration tests for the PostgreSQL table repository.
//!
//! These tests require a real PostgreSQL database (`DATABASE_URL`) and use
//! SQLx test macros so each test runs against a fresh, migrated database.
//!
//! Run with: `cargo test --test postgres_integration -- --ignored`

use chrono::NaiveDate;
use orchard_repository::{ListQuery, Order, PostgresTableRepository, RepositoryError, TableRepository};
use orchard_shared::types::{
    FinanceTransaction, Session, Supplier, SupplierPayment, SupplierPurchase, TransactionKind,
};
use rust_decimal::Decimal;
use uuid::Uuid;

fn session() -> Session {
    Session::new(Uuid::new_v4())
}

fn day(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, d).unwrap()
}

async fn seed_supplier(pool: &sqlx::PgPool, session: &Session) -> Supplier {
    let repository = PostgresTableRepository::<Supplier>::new(pool.clone());
    let stored = repository
        .insert(&[Supplier::new(session, "Agro Supplies")])
        .await
        .unwrap();
    stored.into_iter().next().unwrap()
}

// ============================================================================
// Insert / List
// ============================================================================

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_returns_stored_rows(pool: sqlx::PgPool) {
    let session = session();
    let supplier = seed_supplier(&pool, &session).await;
    let repository = PostgresTableRepository::<SupplierPurchase>::new(pool.clone());

    let purchase = SupplierPurchase::new(
        &session,
        supplier.id,
        day(1, 5),
        "Fertilizer",
        Decimal::from(1000),
        Decimal::from(160),
    );
    let stored = repository.insert(&[purchase.clone()]).await.unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, purchase.id);
    assert_eq!(stored[0].total, Decimal::from(1160));
    assert_eq!(stored[0].purchased_on, Some(day(1, 5)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_empty_slice_is_noop(pool: sqlx::PgPool) {
    let repository = PostgresTableRepository::<Supplier>::new(pool.clone());
    let stored = repository.insert(&[]).await.unwrap();
    assert!(stored.is_empty());
    assert!(repository.list(&ListQuery::new()).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_list_with_filter_and_order(pool: sqlx::PgPool) {
    let session = session();
    let supplier = seed_supplier(&pool, &session).await;
    let other = seed_supplier(&pool, &session).await;
    let repository = PostgresTableRepository::<SupplierPayment>::new(pool.clone());

    repository
        .insert(&[
            SupplierPayment::new(&session, supplier.id, day(2, 10), Decimal::from(300)),
            SupplierPayment::new(&session, supplier.id, day(1, 10), Decimal::from(400)),
            SupplierPayment::new(&session, other.id, day(1, 1), Decimal::from(5)),
        ])
        .await
        .unwrap();

    let query = ListQuery::new()
        .filter("supplier_id", supplier.id)
        .order_by("paid_on", Order::Asc);
    let rows = repository.list(&query).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].amount, Decimal::from(400));
    assert_eq!(rows[1].amount, Decimal::from(300));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_enum_columns_round_trip(pool: sqlx::PgPool) {
    let session = session();
    let repository = PostgresTableRepository::<FinanceTransaction>::new(pool.clone());
    let transaction = FinanceTransaction::new(
        &session,
        TransactionKind::Expense,
        "labor",
        Decimal::from(250),
        day(3, 1),
    );
    repository.insert(&[transaction]).await.unwrap();

    let rows = repository
        .list(&ListQuery::new().filter("kind", "expense"))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind, TransactionKind::Expense);
}

// ============================================================================
// Update / Delete
// ============================================================================

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_rewrites_mutable_columns(pool: sqlx::PgPool) {
    let session = session();
    let mut supplier = seed_supplier(&pool, &session).await;
    let repository = PostgresTableRepository::<Supplier>::new(pool.clone());

    supplier.phone = Some("+30 210 000".to_string());
    let updated = repository.update(&supplier).await.unwrap();

    assert_eq!(updated.id, supplier.id);
    assert_eq!(updated.phone.as_deref(), Some("+30 210 000"));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_update_and_delete_missing_rows(pool: sqlx::PgPool) {
    let session = session();
    let repository = PostgresTableRepository::<Supplier>::new(pool.clone());
    let ghost = Supplier::new(&session, "Ghost");

    assert!(matches!(
        repository.update(&ghost).await,
        Err(RepositoryError::NotFound { table: "suppliers", .. })
    ));
    assert!(matches!(
        repository.delete(ghost.id).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_table_exists_after_migration(pool: sqlx::PgPool) {
    let repository = PostgresTableRepository::<SupplierPayment>::new(pool.clone());
    assert!(repository.table_exists().await.unwrap());
}
