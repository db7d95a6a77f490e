//! # Orchard Store
//! Per-table stores that keep a snapshot of one remote table in memory.
//!
//! A store fetches through a [`TableRepository`](orchard_repository::TableRepository),
//! exposes the last known rows together with loading and error state, and
//! merges the rows returned by its own mutations so readers see their writes
//! without a reload.
pub mod cancel;
pub mod errors;
pub mod snapshot;
pub mod store;

pub use cancel::CancelToken;
pub use errors::StoreError;
pub use snapshot::{Availability, Snapshot};
pub use store::EntityStore;
