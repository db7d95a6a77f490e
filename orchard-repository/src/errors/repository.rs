//! Error types for table repositories.
//! Requests either fail because the backend is not configured at all, or
//! because an individual request failed; callers surface both as a message.
use thiserror::Error;
use uuid::Uuid;

/// Represents errors that can occur within a table repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Backend not configured: {0}")]
    NotConfigured(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Request failed: {0}")]
    Unavailable(String),

    #[error("No row {id} in {table}")]
    NotFound { table: &'static str, id: Uuid },

    #[error("Unknown column {column} for table {table}")]
    UnknownColumn { table: &'static str, column: String },
}

impl RepositoryError {
    pub fn not_configured(msg: impl Into<String>) -> Self {
        Self::NotConfigured(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Whether the failure is "backend missing" rather than "request failed".
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NotConfigured(_))
    }
}
