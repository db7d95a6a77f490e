//! Table metadata for the row types in `orchard-shared`.
//!
//! A [`Record`] names its table, lists its columns in storage order, and
//! exposes the value of each column so repositories can build queries
//! without per-table SQL.
mod tables;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use uuid::Uuid;

/// Columns every table starts with. They are written on insert and never
/// rewritten on update.
pub const KEY_COLUMNS: &[&str] = &["id", "user_id", "created_at"];

/// A typed column value. Ordering is only meaningful between values of the
/// same variant; `NULL` sorts first.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum ColumnValue {
    Uuid(Option<Uuid>),
    Text(Option<String>),
    Int(Option<i32>),
    Decimal(Option<Decimal>),
    Date(Option<NaiveDate>),
    Timestamp(Option<DateTime<Utc>>),
}

impl ColumnValue {
    pub fn is_null(&self) -> bool {
        match self {
            ColumnValue::Uuid(v) => v.is_none(),
            ColumnValue::Text(v) => v.is_none(),
            ColumnValue::Int(v) => v.is_none(),
            ColumnValue::Decimal(v) => v.is_none(),
            ColumnValue::Date(v) => v.is_none(),
            ColumnValue::Timestamp(v) => v.is_none(),
        }
    }
}

impl From<Uuid> for ColumnValue {
    fn from(value: Uuid) -> Self {
        ColumnValue::Uuid(Some(value))
    }
}

impl From<Option<Uuid>> for ColumnValue {
    fn from(value: Option<Uuid>) -> Self {
        ColumnValue::Uuid(value)
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        ColumnValue::Text(Some(value))
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        ColumnValue::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for ColumnValue {
    fn from(value: Option<String>) -> Self {
        ColumnValue::Text(value)
    }
}

impl From<i32> for ColumnValue {
    fn from(value: i32) -> Self {
        ColumnValue::Int(Some(value))
    }
}

impl From<Decimal> for ColumnValue {
    fn from(value: Decimal) -> Self {
        ColumnValue::Decimal(Some(value))
    }
}

impl From<Option<Decimal>> for ColumnValue {
    fn from(value: Option<Decimal>) -> Self {
        ColumnValue::Decimal(value)
    }
}

impl From<NaiveDate> for ColumnValue {
    fn from(value: NaiveDate) -> Self {
        ColumnValue::Date(Some(value))
    }
}

impl From<Option<NaiveDate>> for ColumnValue {
    fn from(value: Option<NaiveDate>) -> Self {
        ColumnValue::Date(value)
    }
}

impl From<DateTime<Utc>> for ColumnValue {
    fn from(value: DateTime<Utc>) -> Self {
        ColumnValue::Timestamp(Some(value))
    }
}

/// A row type stored in a named table.
pub trait Record: for<'r> sqlx::FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Table name.
    const TABLE: &'static str;

    /// All columns in storage order, starting with [`KEY_COLUMNS`].
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Uuid;

    /// Values aligned with [`Record::COLUMNS`].
    fn values(&self) -> Vec<ColumnValue>;

    fn value(&self, column: &str) -> Option<ColumnValue> {
        let index = Self::COLUMNS.iter().position(|c| *c == column)?;
        self.values().into_iter().nth(index)
    }

    fn has_column(column: &str) -> bool {
        Self::COLUMNS.contains(&column)
    }

    /// Columns rewritten by an update.
    fn mutable_columns() -> &'static [&'static str] {
        &Self::COLUMNS[KEY_COLUMNS.len()..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_shared::types::{Session, Supplier, SupplierPayment};

    #[test]
    fn test_columns_start_with_key_columns() {
        assert_eq!(&Supplier::COLUMNS[..3], KEY_COLUMNS);
        assert_eq!(&SupplierPayment::COLUMNS[..3], KEY_COLUMNS);
        assert_eq!(Supplier::mutable_columns()[0], "name");
    }

    #[test]
    fn test_values_align_with_columns() {
        let session = Session::new(Uuid::new_v4());
        let supplier = Supplier::new(&session, "Agro Supplies");
        assert_eq!(supplier.values().len(), Supplier::COLUMNS.len());
        assert_eq!(supplier.value("name"), Some(ColumnValue::from("Agro Supplies")));
        assert_eq!(supplier.value("user_id"), Some(ColumnValue::from(session.user_id)));
        assert_eq!(supplier.value("missing"), None);
    }

    #[test]
    fn test_null_sorts_before_values() {
        let none = ColumnValue::Date(None);
        let some = ColumnValue::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(none < some);
        assert!(none.is_null());
        assert!(!some.is_null());
    }
}
