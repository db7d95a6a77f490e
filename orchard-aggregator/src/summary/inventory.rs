use orchard_shared::types::InventoryItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockReport {
    /// Items at or below their reorder level, in input order.
    pub low_stock: Vec<InventoryItem>,
    /// `sum(quantity * unit_cost)` over every item.
    pub total_value: Decimal,
}

pub fn low_stock(items: &[InventoryItem]) -> StockReport {
    StockReport {
        low_stock: items.iter().filter(|item| item.needs_reorder()).cloned().collect(),
        total_value: items.iter().map(InventoryItem::stock_value).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_shared::types::Session;
    use uuid::Uuid;

    fn item(name: &str, quantity: i64, reorder_level: i64, unit_cost: i64) -> InventoryItem {
        let mut item = InventoryItem::new(&Session::new(Uuid::nil()), name, "inputs", "kg");
        item.quantity = Decimal::from(quantity);
        item.reorder_level = Decimal::from(reorder_level);
        item.unit_cost = Decimal::from(unit_cost);
        item
    }

    #[test]
    fn test_low_stock_includes_items_at_reorder_level() {
        let items = vec![
            item("urea", 10, 20, 2),
            item("copper", 20, 20, 5),
            item("sulfur", 50, 20, 1),
        ];

        let report = low_stock(&items);

        let names: Vec<&str> = report.low_stock.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["urea", "copper"]);
        assert_eq!(report.total_value, Decimal::from(20 + 100 + 50));
    }

    #[test]
    fn test_empty_inventory() {
        let report = low_stock(&[]);
        assert!(report.low_stock.is_empty());
        assert_eq!(report.total_value, Decimal::ZERO);
    }
}
