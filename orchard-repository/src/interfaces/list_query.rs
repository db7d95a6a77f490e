use crate::errors::RepositoryError;
use crate::records::{ColumnValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// Equality filters and an optional ordering for a full-table list.
///
/// Filters are combined with `AND`; a `NULL` filter value matches rows whose
/// column is `NULL`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filters: Vec<(String, ColumnValue)>,
    pub order_by: Option<(String, Order)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, column: impl Into<String>, value: impl Into<ColumnValue>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: Order) -> Self {
        self.order_by = Some((column.into(), order));
        self
    }

    /// Rejects any column the record type does not have. Column names end up
    /// in SQL text, so every repository validates before building a query.
    pub fn validate<T: Record>(&self) -> Result<(), RepositoryError> {
        let columns = self
            .filters
            .iter()
            .map(|(column, _)| column)
            .chain(self.order_by.iter().map(|(column, _)| column));
        for column in columns {
            if !T::has_column(column) {
                return Err(RepositoryError::UnknownColumn {
                    table: T::TABLE,
                    column: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// Whether `row` passes every filter.
    pub fn matches<T: Record>(&self, row: &T) -> bool {
        self.filters
            .iter()
            .all(|(column, expected)| row.value(column).as_ref() == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_shared::types::{Session, Supplier};
    use uuid::Uuid;

    #[test]
    fn test_validate_rejects_unknown_columns() {
        let query = ListQuery::new().filter("name; DROP TABLE suppliers", "x");
        let err = query.validate::<Supplier>().unwrap_err();
        assert!(matches!(err, RepositoryError::UnknownColumn { table: "suppliers", .. }));

        let query = ListQuery::new().order_by("nope", Order::Desc);
        assert!(query.validate::<Supplier>().is_err());
    }

    #[test]
    fn test_matches_combines_filters() {
        let session = Session::new(Uuid::new_v4());
        let mut supplier = Supplier::new(&session, "Agro");
        supplier.phone = Some("555".to_string());

        assert!(ListQuery::new().filter("name", "Agro").matches(&supplier));
        assert!(
            !ListQuery::new()
                .filter("name", "Agro")
                .filter("phone", "556")
                .matches(&supplier)
        );
        assert!(
            ListQuery::new()
                .filter("email", ColumnValue::Text(None))
                .matches(&supplier)
        );
    }
}
