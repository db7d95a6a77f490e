use std::collections::{BTreeMap, HashMap};

use orchard_shared::types::{HarvestRecord, RowId, TreeBlock};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::month_key;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlockYield {
    pub tree_block_id: RowId,
    /// `None` when the block is not among the loaded tree blocks.
    pub name: Option<String>,
    pub total_kg: Decimal,
    /// `None` without a known, non-zero tree count.
    pub kg_per_tree: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyYield {
    pub month: String,
    pub total_kg: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HarvestSummary {
    pub total_kg: Decimal,
    pub records: usize,
    pub average_kg: Decimal,
    /// Highest yield first.
    pub by_block: Vec<BlockYield>,
    pub by_month: Vec<MonthlyYield>,
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator
        .checked_div(denominator)
        .map(|value| value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero))
}

/// Harvested kilograms in total, per tree block and per month.
///
/// `blocks` resolves block names and tree counts; records whose block is
/// missing from it are still counted.
pub fn summarize_harvest(records: &[HarvestRecord], blocks: &[TreeBlock]) -> HarvestSummary {
    let lookup: HashMap<RowId, &TreeBlock> = blocks.iter().map(|block| (block.id, block)).collect();

    let mut total_kg = Decimal::ZERO;
    let mut per_block: BTreeMap<RowId, Decimal> = BTreeMap::new();
    let mut per_month: BTreeMap<String, Decimal> = BTreeMap::new();
    for record in records {
        total_kg += record.quantity_kg;
        *per_block.entry(record.tree_block_id).or_insert(Decimal::ZERO) += record.quantity_kg;
        *per_month.entry(month_key(record.harvested_on)).or_insert(Decimal::ZERO) +=
            record.quantity_kg;
    }

    let mut by_block: Vec<BlockYield> = per_block
        .into_iter()
        .map(|(tree_block_id, total_kg)| {
            let block = lookup.get(&tree_block_id);
            BlockYield {
                tree_block_id,
                name: block.map(|b| b.name.clone()),
                total_kg,
                kg_per_tree: block.and_then(|b| ratio(total_kg, Decimal::from(b.tree_count))),
            }
        })
        .collect();
    by_block.sort_by(|a, b| b.total_kg.cmp(&a.total_kg));

    HarvestSummary {
        total_kg,
        records: records.len(),
        average_kg: ratio(total_kg, Decimal::from(records.len())).unwrap_or(Decimal::ZERO),
        by_block,
        by_month: per_month
            .into_iter()
            .map(|(month, total_kg)| MonthlyYield { month, total_kg })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orchard_shared::types::Session;
    use uuid::Uuid;

    fn record(block: RowId, m: u32, d: u32, kg: i64) -> HarvestRecord {
        HarvestRecord::new(
            &Session::new(Uuid::nil()),
            block,
            NaiveDate::from_ymd_opt(2024, m, d).unwrap(),
            Decimal::from(kg),
        )
    }

    #[test]
    fn test_harvest_grouping() {
        let session = Session::new(Uuid::nil());
        let north = TreeBlock::new(&session, Uuid::new_v4(), "North", "Koroneiki", 40);
        let orphan = Uuid::new_v4();
        let records = vec![
            record(north.id, 10, 3, 500),
            record(north.id, 11, 1, 300),
            record(orphan, 10, 20, 100),
        ];

        let summary = summarize_harvest(&records, &[north.clone()]);

        assert_eq!(summary.total_kg, Decimal::from(900));
        assert_eq!(summary.records, 3);
        assert_eq!(summary.average_kg, Decimal::from(300));

        assert_eq!(summary.by_block[0].tree_block_id, north.id);
        assert_eq!(summary.by_block[0].name.as_deref(), Some("North"));
        assert_eq!(summary.by_block[0].kg_per_tree, Some(Decimal::from(20)));
        assert_eq!(summary.by_block[1].name, None);
        assert_eq!(summary.by_block[1].kg_per_tree, None);

        assert_eq!(summary.by_month.len(), 2);
        assert_eq!(summary.by_month[0].month, "2024-10");
        assert_eq!(summary.by_month[0].total_kg, Decimal::from(600));
    }

    #[test]
    fn test_zero_tree_count_has_no_ratio() {
        let block = TreeBlock::new(&Session::new(Uuid::nil()), Uuid::new_v4(), "Young", "Arbequina", 0);
        let summary = summarize_harvest(&[record(block.id, 1, 1, 10)], &[block]);
        assert_eq!(summary.by_block[0].kg_per_tree, None);
    }

    #[test]
    fn test_empty_harvest_average_is_zero() {
        let summary = summarize_harvest(&[], &[]);
        assert_eq!(summary.average_kg, Decimal::ZERO);
        assert!(summary.by_block.is_empty());
    }
}
