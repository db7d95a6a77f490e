//! PostgreSQL implementation of the table repository.
//!
//! One generic repository serves every table: the SQL is assembled with
//! `sqlx::QueryBuilder` from the table metadata in [`Record`], values are
//! always bound as parameters, and rows are decoded with `sqlx::FromRow`.
//!
//! ## Key Features
//!
//! - Connection pooling with `sqlx::PgPool`
//! - Multi-row inserts inside a transaction, chunked under the bind limit
//! - `RETURNING *` on every mutation so callers get the stored rows back
use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::interfaces::{ListQuery, TableRepository};
use crate::records::{ColumnValue, Record};

/// PostgreSQL caps a statement at 65535 bind parameters.
const BIND_LIMIT: usize = 65_535;

/// PostgreSQL implementation of [`TableRepository`] for the table of `T`.
pub struct PostgresTableRepository<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for PostgresTableRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> PostgresTableRepository<T> {
    /// Creates a repository over `pool`. The pool must point at a database
    /// migrated with [`crate::MIGRATOR`].
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }

    /// Checks whether the table of `T` exists in the connected database.
    pub async fn table_exists(&self) -> Result<bool, RepositoryError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(T::TABLE)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    fn rows_per_statement() -> usize {
        (BIND_LIMIT / T::COLUMNS.len()).max(1)
    }
}

fn push_bind_value(builder: &mut QueryBuilder<'_, Postgres>, value: ColumnValue) {
    match value {
        ColumnValue::Uuid(v) => builder.push_bind(v),
        ColumnValue::Text(v) => builder.push_bind(v),
        ColumnValue::Int(v) => builder.push_bind(v),
        ColumnValue::Decimal(v) => builder.push_bind(v),
        ColumnValue::Date(v) => builder.push_bind(v),
        ColumnValue::Timestamp(v) => builder.push_bind(v),
    };
}

fn push_separated_value(separated: &mut Separated<'_, '_, Postgres, &'static str>, value: ColumnValue) {
    match value {
        ColumnValue::Uuid(v) => separated.push_bind(v),
        ColumnValue::Text(v) => separated.push_bind(v),
        ColumnValue::Int(v) => separated.push_bind(v),
        ColumnValue::Decimal(v) => separated.push_bind(v),
        ColumnValue::Date(v) => separated.push_bind(v),
        ColumnValue::Timestamp(v) => separated.push_bind(v),
    };
}

fn push_unseparated_value(separated: &mut Separated<'_, '_, Postgres, &'static str>, value: ColumnValue) {
    match value {
        ColumnValue::Uuid(v) => separated.push_bind_unseparated(v),
        ColumnValue::Text(v) => separated.push_bind_unseparated(v),
        ColumnValue::Int(v) => separated.push_bind_unseparated(v),
        ColumnValue::Decimal(v) => separated.push_bind_unseparated(v),
        ColumnValue::Date(v) => separated.push_bind_unseparated(v),
        ColumnValue::Timestamp(v) => separated.push_bind_unseparated(v),
    };
}

#[async_trait]
impl<T: Record> TableRepository<T> for PostgresTableRepository<T> {
    async fn list(&self, query: &ListQuery) -> Result<Vec<T>, RepositoryError> {
        query.validate::<T>()?;

        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT * FROM {}", T::TABLE));
        for (i, (column, value)) in query.filters.iter().enumerate() {
            builder.push(if i == 0 { " WHERE " } else { " AND " });
            if value.is_null() {
                builder.push(format!("{column} IS NULL"));
            } else {
                builder.push(format!("{column} = "));
                push_bind_value(&mut builder, value.clone());
            }
        }
        // created_at keeps rows sharing a sort key in arrival order
        match &query.order_by {
            Some((column, order)) => {
                builder.push(format!(" ORDER BY {column} {}, created_at ASC", order.as_sql()));
            }
            None => {
                builder.push(" ORDER BY created_at ASC");
            }
        }

        let rows = builder.build_query_as::<T>().fetch_all(&self.pool).await?;
        debug!(table = T::TABLE, rows = rows.len(), "Listed rows");
        Ok(rows)
    }

    async fn insert(&self, rows: &[T]) -> Result<Vec<T>, RepositoryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = self.pool.begin().await?;
        let mut stored = Vec::with_capacity(rows.len());
        for chunk in rows.chunks(Self::rows_per_statement()) {
            let mut builder = QueryBuilder::<Postgres>::new(format!(
                "INSERT INTO {} ({}) ",
                T::TABLE,
                T::COLUMNS.join(", ")
            ));
            builder.push_values(chunk, |mut tuple, row| {
                for value in row.values() {
                    push_separated_value(&mut tuple, value);
                }
            });
            builder.push(" RETURNING *");
            stored.extend(builder.build_query_as::<T>().fetch_all(&mut *tx).await?);
        }
        tx.commit().await?;

        debug!(table = T::TABLE, rows = stored.len(), "Inserted rows");
        Ok(stored)
    }

    async fn update(&self, row: &T) -> Result<T, RepositoryError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("UPDATE {} SET ", T::TABLE));
        let mut assignments = builder.separated(", ");
        let key_count = T::COLUMNS.len() - T::mutable_columns().len();
        for (column, value) in T::COLUMNS.iter().zip(row.values()).skip(key_count) {
            assignments.push(format!("{column} = "));
            push_unseparated_value(&mut assignments, value);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(row.id());
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<T>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound {
                table: T::TABLE,
                id: row.id(),
            })?;

        debug!(table = T::TABLE, id = %row.id(), "Updated row");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { table: T::TABLE, id });
        }

        debug!(table = T::TABLE, id = %id, "Deleted row");
        Ok(())
    }
}
