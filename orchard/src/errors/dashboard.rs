use orchard_store::StoreError;
use thiserror::Error;

/// Why a report could not be computed from the current snapshots.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{0} is still loading")]
    Pending(&'static str),

    #[error("{table} is unavailable: {message}")]
    Unavailable { table: &'static str, message: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
