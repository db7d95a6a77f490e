use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A cultivated field or orchard parcel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Field {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub area_hectares: Decimal,
    pub crop: Option<String>,
    pub location: Option<String>,
}

impl Field {
    pub fn new(session: &Session, name: impl Into<String>, area_hectares: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            name: name.into(),
            area_hectares,
            crop: None,
            location: None,
        }
    }
}
