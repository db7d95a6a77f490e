//! PostgreSQL backend for the table repositories.
mod table_repository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::errors::RepositoryError;

pub use table_repository::PostgresTableRepository;

/// Schema migrations for every orchard table.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Opens the connection pool every PostgreSQL repository shares.
///
/// # Arguments
///
/// * `database_url` - Connection string, `None` when no backend is configured
/// * `max_connections` - Upper bound on pooled connections
///
/// # Returns
///
/// * `Ok(PgPool)` - The pool connected
/// * `Err(RepositoryError::NotConfigured)` - No connection string was given
/// * `Err(RepositoryError::DatabaseError)` - The database could not be reached
pub async fn connect_pool(
    database_url: Option<&str>,
    max_connections: u32,
) -> Result<PgPool, RepositoryError> {
    let database_url = database_url
        .ok_or_else(|| RepositoryError::not_configured("DATABASE_URL must be set"))?;

    info!(max_connections, "Connecting to database");
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}
