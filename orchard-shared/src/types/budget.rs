use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{DateWindow, PlannedAmount, RowId, Session, UserId};

/// Percentage of a planned amount at which a category starts alerting.
pub const DEFAULT_ALERT_THRESHOLD: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// A persisted budget line: the amount planned for one category over a
/// period, with the consumption percentage that should raise an alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Budget {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub planned_amount: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub alert_threshold: Decimal,
}

impl Budget {
    pub fn new(
        session: &Session,
        category: impl Into<String>,
        planned_amount: Decimal,
        period: DateWindow,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            category: category.into(),
            planned_amount,
            period_start: period.start,
            period_end: period.end,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    pub fn period(&self) -> DateWindow {
        DateWindow::new(self.period_start, self.period_end)
    }

    /// Whether this budget's period overlaps `window`.
    pub fn overlaps(&self, window: &DateWindow) -> bool {
        self.period_start <= window.end && window.start <= self.period_end
    }
}

impl From<&Budget> for PlannedAmount {
    fn from(budget: &Budget) -> Self {
        PlannedAmount {
            category: budget.category.clone(),
            amount: budget.planned_amount,
            alert_threshold: budget.alert_threshold,
        }
    }
}
