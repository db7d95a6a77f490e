//! The per-table store.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use orchard_repository::{ListQuery, Record, TableRepository};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cancel::CancelToken;
use crate::errors::StoreError;
use crate::snapshot::Snapshot;

/// Keeps an in-memory snapshot of one table in sync with its repository.
///
/// Reads go through [`EntityStore::snapshot`]. Writes go to the repository
/// first; the rows it returns are merged into the snapshot by id.
pub struct EntityStore<T: Record> {
    repository: Arc<dyn TableRepository<T>>,
    query: ListQuery,
    snapshot: RwLock<Snapshot<T>>,
    in_flight: AtomicUsize,
}

impl<T: Record> EntityStore<T> {
    /// Creates a store that fetches the whole table.
    pub fn new(repository: Arc<dyn TableRepository<T>>) -> Self {
        Self::with_query(repository, ListQuery::new())
    }

    /// Creates a store that fetches the rows matching `query`.
    ///
    /// Mutation results are merged only when they match the query's filters;
    /// a merged row is appended, so the ordering holds only until the next
    /// refresh.
    pub fn with_query(repository: Arc<dyn TableRepository<T>>, query: ListQuery) -> Self {
        Self {
            repository,
            query,
            snapshot: RwLock::new(Snapshot::default()),
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn table(&self) -> &'static str {
        T::TABLE
    }

    pub async fn snapshot(&self) -> Snapshot<T> {
        self.snapshot.read().await.clone()
    }

    /// Reloads the snapshot from the repository.
    ///
    /// The fetch races against `cancel`. A cancelled fetch never touches
    /// `items` or `error`. A failed fetch keeps the previous items and
    /// records the error message; a successful one replaces the items and
    /// clears the error.
    ///
    /// # Arguments
    ///
    /// * `cancel` - Token that aborts the fetch when cancelled
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The snapshot now holds fresh rows
    /// * `Err(StoreError::Cancelled)` - The token fired before the fetch completed
    /// * `Err(StoreError::Repository)` - The fetch failed
    pub async fn refresh(&self, cancel: &CancelToken) -> Result<(), StoreError> {
        if cancel.is_cancelled() {
            return Err(StoreError::Cancelled);
        }

        self.begin_fetch().await;
        let fetched = tokio::select! {
            biased;
            _ = cancel.cancelled() => None,
            result = self.repository.list(&self.query) => Some(result),
        };

        let mut snapshot = self.snapshot.write().await;
        snapshot.loading = self.in_flight.fetch_sub(1, Ordering::SeqCst) > 1;

        match fetched {
            // checked under the lock so a late cancel still discards the rows
            _ if cancel.is_cancelled() => {
                debug!(table = T::TABLE, "Discarding cancelled fetch");
                Err(StoreError::Cancelled)
            }
            Some(Ok(items)) => {
                info!(table = T::TABLE, rows = items.len(), "Fetched table");
                snapshot.items = items;
                snapshot.error = None;
                snapshot.loaded = true;
                Ok(())
            }
            Some(Err(e)) => {
                warn!(table = T::TABLE, error = %e, "Fetch failed, keeping stale rows");
                snapshot.error = Some(e.to_string());
                Err(e.into())
            }
            None => Err(StoreError::Cancelled),
        }
    }

    async fn begin_fetch(&self) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.snapshot.write().await.loading = true;
    }

    /// Inserts `rows` remotely and merges the stored rows into the snapshot.
    pub async fn insert(&self, rows: &[T]) -> Result<Vec<T>, StoreError> {
        let stored = self.repository.insert(rows).await.inspect_err(|e| {
            warn!(table = T::TABLE, error = %e, "Insert failed");
        })?;

        let mut snapshot = self.snapshot.write().await;
        for row in &stored {
            merge(&mut snapshot.items, &self.query, row.clone());
        }
        debug!(table = T::TABLE, rows = stored.len(), "Merged inserted rows");
        Ok(stored)
    }

    /// Updates `row` remotely and replaces it in the snapshot.
    pub async fn update(&self, row: &T) -> Result<T, StoreError> {
        let stored = self.repository.update(row).await.inspect_err(|e| {
            warn!(table = T::TABLE, id = %row.id(), error = %e, "Update failed");
        })?;

        merge(&mut self.snapshot.write().await.items, &self.query, stored.clone());
        Ok(stored)
    }

    /// Deletes the row remotely and drops it from the snapshot.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.repository.delete(id).await.inspect_err(|e| {
            warn!(table = T::TABLE, id = %id, error = %e, "Delete failed");
        })?;

        self.snapshot.write().await.items.retain(|row| row.id() != id);
        Ok(())
    }
}

/// Replaces the row with the same id, or appends it. A row that no longer
/// matches `query` is dropped instead.
fn merge<T: Record>(items: &mut Vec<T>, query: &ListQuery, row: T) {
    if !query.matches(&row) {
        items.retain(|existing| existing.id() != row.id());
        return;
    }
    match items.iter_mut().find(|existing| existing.id() == row.id()) {
        Some(existing) => *existing = row,
        None => items.push(row),
    }
}
