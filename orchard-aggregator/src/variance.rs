//! Planned-vs-actual roll-up per category.
use std::collections::BTreeMap;

use orchard_shared::types::{ActualAmount, CategoryVariance, DateWindow, PlannedAmount, VarianceReport};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `actual / planned * 100` rounded to two places, or zero when nothing was
/// planned.
pub fn consumed_percentage(planned: Decimal, actual: Decimal) -> Decimal {
    if planned <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    actual
        .checked_div(planned)
        .and_then(|ratio| ratio.checked_mul(HUNDRED))
        .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or(Decimal::ZERO)
}

struct PlannedGroup {
    amount: Decimal,
    alert_threshold: Decimal,
}

/// Compares planned and actual amounts per category key.
///
/// Planned lines are summed per category; when several lines share a
/// category the lowest alert threshold wins. Actual amounts are summed per
/// category, restricted to `window` (inclusive) when one is given; without a
/// window the whole history counts. Categories with actual spend but no plan
/// are left out of the report.
///
/// # Arguments
///
/// * `planned` - Planned lines (budgets, or purchases keyed by supplier)
/// * `actual` - Actual amounts (expenses, or payments keyed by supplier)
/// * `window` - Optional inclusive date window applied to `actual`
///
/// # Returns
///
/// A `VarianceReport` with one row per planned category, sorted by key.
pub fn compute_variance(
    planned: &[PlannedAmount],
    actual: &[ActualAmount],
    window: Option<DateWindow>,
) -> VarianceReport {
    let mut plan: BTreeMap<&str, PlannedGroup> = BTreeMap::new();
    for line in planned {
        if line.amount < Decimal::ZERO {
            warn!(category = %line.category, amount = %line.amount, "Skipping planned line with negative amount");
            continue;
        }
        plan.entry(line.category.as_str())
            .and_modify(|group| {
                group.amount += line.amount;
                group.alert_threshold = group.alert_threshold.min(line.alert_threshold);
            })
            .or_insert(PlannedGroup {
                amount: line.amount,
                alert_threshold: line.alert_threshold,
            });
    }

    let mut spent: BTreeMap<&str, Decimal> = BTreeMap::new();
    for line in actual {
        if line.amount < Decimal::ZERO {
            warn!(category = %line.category, amount = %line.amount, "Skipping actual amount with negative value");
            continue;
        }
        if let Some(window) = &window {
            match line.date {
                Some(date) if window.contains(date) => {}
                Some(_) => continue,
                None => {
                    warn!(category = %line.category, "Skipping undated actual amount in a windowed comparison");
                    continue;
                }
            }
        }
        *spent.entry(line.category.as_str()).or_insert(Decimal::ZERO) += line.amount;
    }

    let categories: Vec<CategoryVariance> = plan
        .into_iter()
        .map(|(category, group)| {
            let actual = spent.get(category).copied().unwrap_or(Decimal::ZERO);
            let percentage = consumed_percentage(group.amount, actual);
            CategoryVariance {
                category: category.to_string(),
                planned: group.amount,
                actual,
                variance: group.amount - actual,
                percentage,
                alert_threshold: group.alert_threshold,
                alerting: group.amount > Decimal::ZERO && percentage >= group.alert_threshold,
            }
        })
        .collect();

    debug!(
        categories = categories.len(),
        alerts = categories.iter().filter(|c| c.alerting).count(),
        "Computed variance"
    );

    VarianceReport { window, categories }
}
