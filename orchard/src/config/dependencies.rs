//! Dependency initialization and wiring for the orchard application.
use std::sync::Arc;

use chrono::NaiveDate;
use orchard_repository::{
    InMemoryTableRepository, ListQuery, Order, PostgresTableRepository, Record, connect_pool,
};
use orchard_shared::types::{
    Budget, CalendarEvent, Equipment, Field, FinanceTransaction, HarvestRecord, InventoryItem,
    MasterDataItem, PestTreatment, Session, Supplier, SupplierPayment, SupplierPurchase, TreeBlock,
};
use orchard_store::EntityStore;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;
use crate::errors::AppError;
use crate::seed::{DEMO_USER_ID, SeedData};

/// One store per table.
pub struct Stores {
    pub fields: EntityStore<Field>,
    pub tree_blocks: EntityStore<TreeBlock>,
    pub harvest_records: EntityStore<HarvestRecord>,
    pub finance_transactions: EntityStore<FinanceTransaction>,
    pub suppliers: EntityStore<Supplier>,
    pub supplier_purchases: EntityStore<SupplierPurchase>,
    pub supplier_payments: EntityStore<SupplierPayment>,
    pub budgets: EntityStore<Budget>,
    pub equipment: EntityStore<Equipment>,
    pub pest_treatments: EntityStore<PestTreatment>,
    pub inventory_items: EntityStore<InventoryItem>,
    pub calendar_events: EntityStore<CalendarEvent>,
    pub master_data: EntityStore<MasterDataItem>,
}

/// Pick lists are read grouped by the list they belong to.
fn master_data_query() -> ListQuery {
    ListQuery::new().order_by("kind", Order::Asc)
}

impl Stores {
    /// Stores backed by PostgreSQL tables.
    pub fn postgres(pool: &PgPool) -> Self {
        fn store<T: Record>(pool: &PgPool) -> EntityStore<T> {
            EntityStore::new(Arc::new(PostgresTableRepository::<T>::new(pool.clone())))
        }

        Self {
            fields: store(pool),
            tree_blocks: store(pool),
            harvest_records: store(pool),
            finance_transactions: store(pool),
            suppliers: store(pool),
            supplier_purchases: store(pool),
            supplier_payments: store(pool),
            budgets: store(pool),
            equipment: store(pool),
            pest_treatments: store(pool),
            inventory_items: store(pool),
            calendar_events: store(pool),
            master_data: EntityStore::with_query(
                Arc::new(PostgresTableRepository::<MasterDataItem>::new(pool.clone())),
                master_data_query(),
            ),
        }
    }

    /// Stores backed by in-memory tables holding `seed`.
    pub fn in_memory(seed: SeedData) -> Self {
        fn store<T: Record>(rows: Vec<T>) -> EntityStore<T> {
            EntityStore::new(Arc::new(InMemoryTableRepository::with_rows(rows)))
        }

        Self {
            fields: store(seed.fields),
            tree_blocks: store(seed.tree_blocks),
            harvest_records: store(seed.harvest_records),
            finance_transactions: store(seed.finance_transactions),
            suppliers: store(seed.suppliers),
            supplier_purchases: store(seed.supplier_purchases),
            supplier_payments: store(seed.supplier_payments),
            budgets: store(seed.budgets),
            equipment: store(seed.equipment),
            pest_treatments: store(seed.pest_treatments),
            inventory_items: store(seed.inventory_items),
            calendar_events: store(seed.calendar_events),
            master_data: EntityStore::with_query(
                Arc::new(InMemoryTableRepository::with_rows(seed.master_data)),
                master_data_query(),
            ),
        }
    }
}

/// `Dependencies` holds what every command needs: the session, the stores,
/// and the pool when running against PostgreSQL.
pub struct Dependencies {
    pub session: Session,
    pub pool: Option<PgPool>,
    pub stores: Stores,
}

impl Dependencies {
    /// Connects to PostgreSQL and builds stores over its tables.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Pool connected, stores wired
    /// * `Err(AppError::Config)` - `ORCHARD_USER_ID` missing
    /// * `Err(AppError::Repository)` - `DATABASE_URL` missing, or the pool
    ///   could not connect
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let session = config.session()?;
        info!(user_id = %session.user_id, "Opening PostgreSQL session");
        let pool = connect_pool(config.database_url.as_deref(), config.max_connections).await?;

        let stores = Stores::postgres(&pool);
        Ok(Self {
            session,
            pool: Some(pool),
            stores,
        })
    }

    /// In-memory stores seeded with demo rows dated around `today`.
    ///
    /// Uses `ORCHARD_USER_ID` when configured, a fixed demo user otherwise.
    pub fn offline(config: &Config, today: NaiveDate) -> Self {
        let session = Session::new(config.user_id.unwrap_or(DEMO_USER_ID));
        info!(user_id = %session.user_id, "Using offline demo data");
        Self {
            session,
            pool: None,
            stores: Stores::in_memory(SeedData::demo(&session, today)),
        }
    }

    pub fn require_pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::config("This command needs a database; drop --offline"))
    }
}
