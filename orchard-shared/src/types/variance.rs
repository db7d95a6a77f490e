use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_ALERT_THRESHOLD;

/// An inclusive calendar window `[start, end]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Planned amount for a category, with the threshold that makes it alert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedAmount {
    pub category: String,
    pub amount: Decimal,
    pub alert_threshold: Decimal,
}

impl PlannedAmount {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, alert_threshold: Decimal) -> Self {
        self.alert_threshold = alert_threshold;
        self
    }
}

/// Actual spend recorded against a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActualAmount {
    pub category: String,
    pub date: Option<NaiveDate>,
    pub amount: Decimal,
}

impl ActualAmount {
    pub fn new(category: impl Into<String>, date: NaiveDate, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            date: Some(date),
            amount,
        }
    }
}

/// Planned vs actual for a single category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryVariance {
    pub category: String,
    pub planned: Decimal,
    pub actual: Decimal,
    /// `planned - actual`; negative when overspent.
    pub variance: Decimal,
    /// `actual / planned * 100`, or zero when nothing was planned.
    pub percentage: Decimal,
    pub alert_threshold: Decimal,
    pub alerting: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VarianceReport {
    pub window: Option<DateWindow>,
    /// Sorted by category key.
    pub categories: Vec<CategoryVariance>,
}

impl VarianceReport {
    pub fn total_planned(&self) -> Decimal {
        self.categories.iter().map(|c| c.planned).sum()
    }

    pub fn total_actual(&self) -> Decimal {
        self.categories.iter().map(|c| c.actual).sum()
    }

    pub fn alerts(&self) -> impl Iterator<Item = &CategoryVariance> {
        self.categories.iter().filter(|c| c.alerting)
    }

    pub fn get(&self, category: &str) -> Option<&CategoryVariance> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
