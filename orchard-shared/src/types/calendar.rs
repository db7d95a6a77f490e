use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct CalendarEvent {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub kind: String,
    pub starts_on: NaiveDate,
    pub ends_on: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl CalendarEvent {
    pub fn new(
        session: &Session,
        title: impl Into<String>,
        kind: impl Into<String>,
        starts_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            title: title.into(),
            kind: kind.into(),
            starts_on,
            ends_on: None,
            notes: None,
        }
    }
}
