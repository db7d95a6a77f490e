use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A spray or other treatment applied to a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct PestTreatment {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub field_id: RowId,
    pub treated_on: NaiveDate,
    pub pest: String,
    pub product: String,
    pub dosage: Option<String>,
    pub cost: Decimal,
}

impl PestTreatment {
    pub fn new(
        session: &Session,
        field_id: RowId,
        treated_on: NaiveDate,
        pest: impl Into<String>,
        product: impl Into<String>,
        cost: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            field_id,
            treated_on,
            pest: pest.into(),
            product: product.into(),
            dosage: None,
            cost,
        }
    }
}
