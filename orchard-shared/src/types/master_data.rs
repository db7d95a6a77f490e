use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A reference value offered in pick lists (crop names, pest names,
/// expense categories, units). `kind` names the list the value belongs to.
///
/// These are the only rows the dashboard deletes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct MasterDataItem {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub kind: String,
    pub value: String,
}

impl MasterDataItem {
    pub fn new(session: &Session, kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            kind: kind.into(),
            value: value.into(),
        }
    }
}
