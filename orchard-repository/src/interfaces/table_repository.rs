//! This module defines the `TableRepository` trait, the remote data client
//! every store talks to. It abstracts list/insert/update/delete over one
//! named table.
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::ListQuery;
use crate::records::Record;

/// A trait that defines the interface for interacting with one table.
///
/// Mutations return the stored rows so callers can merge them into their
/// in-memory snapshot instead of reloading the table.
#[async_trait::async_trait]
pub trait TableRepository<T: Record>: Send + Sync {
    /// Lists every row matching `query`.
    ///
    /// # Arguments
    ///
    /// * `query` - Equality filters and ordering; an empty query lists the whole table.
    ///
    /// # Returns
    ///
    /// The matching rows, or a `RepositoryError` if the request fails.
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RepositoryError>;

    /// Inserts `rows` atomically and returns them as stored.
    ///
    /// An empty slice is a no-op returning an empty vector.
    async fn insert(&self, rows: &[T]) -> Result<Vec<T>, RepositoryError>;

    /// Rewrites the mutable columns of the row with the same id.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The row as stored after the update
    /// * `Err(RepositoryError::NotFound)` - No row has that id
    async fn update(&self, row: &T) -> Result<T, RepositoryError>;

    /// Deletes the row with `id`.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
