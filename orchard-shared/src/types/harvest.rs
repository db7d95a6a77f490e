use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A single picking recorded against a tree block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct HarvestRecord {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub tree_block_id: RowId,
    pub harvested_on: NaiveDate,
    pub quantity_kg: Decimal,
    pub quality_grade: Option<String>,
    pub notes: Option<String>,
}

impl HarvestRecord {
    pub fn new(
        session: &Session,
        tree_block_id: RowId,
        harvested_on: NaiveDate,
        quantity_kg: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            tree_block_id,
            harvested_on,
            quantity_kg,
            quality_grade: None,
            notes: None,
        }
    }
}
