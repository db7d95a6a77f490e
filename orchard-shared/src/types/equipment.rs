use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ParseKindError, RowId, Session, UserId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active,
    InService,
    Retired,
}

impl EquipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Active => "active",
            EquipmentStatus::InService => "in_service",
            EquipmentStatus::Retired => "retired",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EquipmentStatus::Active),
            "in_service" => Ok(EquipmentStatus::InService),
            "retired" => Ok(EquipmentStatus::Retired),
            other => Err(ParseKindError::new("equipment status", other)),
        }
    }
}

impl TryFrom<String> for EquipmentStatus {
    type Error = ParseKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A tractor, sprayer, or other machine with a service schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Equipment {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub kind: String,
    #[sqlx(try_from = "String")]
    pub status: EquipmentStatus,
    pub purchased_on: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub last_service_on: Option<NaiveDate>,
    pub next_service_on: Option<NaiveDate>,
}

impl Equipment {
    pub fn new(session: &Session, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            name: name.into(),
            kind: kind.into(),
            status: EquipmentStatus::Active,
            purchased_on: None,
            purchase_cost: None,
            last_service_on: None,
            next_service_on: None,
        }
    }

    /// Retired machines are never due; machines without a schedule neither.
    pub fn service_due(&self, today: NaiveDate) -> bool {
        self.status != EquipmentStatus::Retired
            && self.next_service_on.is_some_and(|next| next <= today)
    }
}
