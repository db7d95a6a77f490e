//! Error types for the orchard stores.
mod store;

pub use store::StoreError;
