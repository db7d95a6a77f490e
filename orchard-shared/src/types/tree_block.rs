use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A block of trees of one variety planted inside a field.
///
/// Harvest records reference a tree block through `tree_block_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct TreeBlock {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub field_id: RowId,
    pub name: String,
    pub variety: String,
    pub tree_count: i32,
    pub planted_on: Option<NaiveDate>,
}

impl TreeBlock {
    pub fn new(
        session: &Session,
        field_id: RowId,
        name: impl Into<String>,
        variety: impl Into<String>,
        tree_count: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            field_id,
            name: name.into(),
            variety: variety.into(),
            tree_count,
            planted_on: None,
        }
    }
}
