use orchard_repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Fetch cancelled")]
    Cancelled,
}

impl StoreError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
