//! Roll-ups behind the dashboard screens.
//!
//! All of them group rows already loaded by the stores; none of them fail.
//! Percentages and averages fall back to zero when their denominator is zero.
mod calendar;
mod equipment;
mod finance;
mod harvest;
mod inventory;
mod treatment;

pub use calendar::upcoming_events;
pub use equipment::equipment_due;
pub use finance::{CategoryShare, FinanceSummary, MonthlyFlow, summarize_finances};
pub use harvest::{BlockYield, HarvestSummary, MonthlyYield, summarize_harvest};
pub use inventory::{StockReport, low_stock};
pub use treatment::{FieldTreatmentCost, treatment_costs};

use chrono::NaiveDate;

/// `YYYY-MM` bucket of a date. Lexicographic order of the keys equals
/// chronological order.
pub(crate) fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(month_key(date), "2024-03");
        assert!(month_key(date) < month_key(NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()));
    }
}
