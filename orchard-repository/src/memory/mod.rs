//! In-memory implementation of the table repository.
//!
//! Rows live in a `tokio::sync::RwLock<Vec<T>>` in arrival order. Besides
//! backing tests and offline runs, the repository can inject a request
//! failure or a response delay to exercise store error and cancellation paths.
use std::cmp::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::{ListQuery, Order, TableRepository};
use crate::records::Record;

pub struct InMemoryTableRepository<T> {
    rows: RwLock<Vec<T>>,
    failure: Mutex<Option<String>>,
    latency: Option<Duration>,
}

impl<T: Record> Default for InMemoryTableRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryTableRepository<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    pub fn with_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
            failure: Mutex::new(None),
            latency: None,
        }
    }

    /// Delays every response by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Makes every following request fail with `message` until cleared with
    /// `None`.
    pub async fn set_failure(&self, message: Option<&str>) {
        *self.failure.lock().await = message.map(str::to_string);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    async fn begin_request(&self) -> Result<(), RepositoryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match self.failure.lock().await.as_ref() {
            Some(message) => Err(RepositoryError::unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

fn compare_column<T: Record>(a: &T, b: &T, column: &str) -> Ordering {
    a.value(column)
        .partial_cmp(&b.value(column))
        .unwrap_or(Ordering::Equal)
}

#[async_trait]
impl<T: Record> TableRepository<T> for InMemoryTableRepository<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RepositoryError> {
        self.begin_request().await?;
        query.validate::<T>()?;

        let mut rows: Vec<T> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| query.matches(*row))
            .cloned()
            .collect();

        // stable: rows with equal keys stay in arrival order
        if let Some((column, order)) = &query.order_by {
            rows.sort_by(|a, b| match order {
                Order::Asc => compare_column(a, b, column),
                Order::Desc => compare_column(b, a, column),
            });
        }
        Ok(rows)
    }

    async fn insert(&self, rows: &[T]) -> Result<Vec<T>, RepositoryError> {
        self.begin_request().await?;
        self.rows.write().await.extend(rows.iter().cloned());
        Ok(rows.to_vec())
    }

    async fn update(&self, row: &T) -> Result<T, RepositoryError> {
        self.begin_request().await?;
        let mut rows = self.rows.write().await;
        let stored = rows
            .iter_mut()
            .find(|existing| existing.id() == row.id())
            .ok_or(RepositoryError::NotFound {
                table: T::TABLE,
                id: row.id(),
            })?;
        *stored = row.clone();
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.begin_request().await?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound { table: T::TABLE, id });
        }
        Ok(())
    }
}
