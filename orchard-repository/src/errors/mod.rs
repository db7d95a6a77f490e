//! Error types for the orchard repository.
mod repository;

pub use repository::RepositoryError;
