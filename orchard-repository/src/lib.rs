//! # Orchard Repository
//! This crate provides the remote data client for the orchard workspace: a
//! generic `TableRepository` trait over named tables, a PostgreSQL
//! implementation built on `sqlx`, and an in-memory implementation used by
//! tests and offline runs.
pub mod errors;
pub mod interfaces;
pub mod memory;
pub mod postgres;
pub mod records;

pub use errors::RepositoryError;
pub use interfaces::{ListQuery, Order, TableRepository};
pub use memory::InMemoryTableRepository;
pub use postgres::{MIGRATOR, PostgresTableRepository, connect_pool};
pub use records::{ColumnValue, Record};
