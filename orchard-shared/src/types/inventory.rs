use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{RowId, Session, UserId};

/// A stocked input (fertilizer, packaging, spare parts, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct InventoryItem {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub category: String,
    pub quantity: Decimal,
    pub unit: String,
    pub reorder_level: Decimal,
    pub unit_cost: Decimal,
}

impl InventoryItem {
    pub fn new(
        session: &Session,
        name: impl Into<String>,
        category: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            name: name.into(),
            category: category.into(),
            quantity: Decimal::ZERO,
            unit: unit.into(),
            reorder_level: Decimal::ZERO,
            unit_cost: Decimal::ZERO,
        }
    }

    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    pub fn stock_value(&self) -> Decimal {
        self.quantity * self.unit_cost
    }
}
