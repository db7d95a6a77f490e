//! Error types for the orchard application.
//! Consolidates failures from configuration, the repositories, the stores and
//! report rendering into the error returned by the binary.
mod dashboard;

pub use dashboard::DashboardError;
use orchard_repository::RepositoryError;
use orchard_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid arguments: {0}")]
    Usage(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] DashboardError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    /// Whether the command failed because a backend is not configured, as
    /// opposed to a request against it failing.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::Config(_) => true,
            Self::Repository(e) => e.is_configuration(),
            Self::Store(StoreError::Repository(e)) => e.is_configuration(),
            _ => false,
        }
    }
}
