//! Demo rows for `--offline` runs.
use chrono::{Days, NaiveDate};
use orchard_shared::types::{
    Budget, CalendarEvent, DateWindow, Equipment, EquipmentStatus, Field, FinanceTransaction,
    HarvestRecord, InventoryItem, MasterDataItem, PestTreatment, Session, Supplier,
    SupplierPayment, SupplierPurchase, TransactionKind, TreeBlock,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Fixed owner of the demo rows.
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(0x0dc4_a7d0_0000_4000_8000_000000000001);

/// Initial contents of every table.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub fields: Vec<Field>,
    pub tree_blocks: Vec<TreeBlock>,
    pub harvest_records: Vec<HarvestRecord>,
    pub finance_transactions: Vec<FinanceTransaction>,
    pub suppliers: Vec<Supplier>,
    pub supplier_purchases: Vec<SupplierPurchase>,
    pub supplier_payments: Vec<SupplierPayment>,
    pub budgets: Vec<Budget>,
    pub equipment: Vec<Equipment>,
    pub pest_treatments: Vec<PestTreatment>,
    pub inventory_items: Vec<InventoryItem>,
    pub calendar_events: Vec<CalendarEvent>,
    pub master_data: Vec<MasterDataItem>,
}

fn money(units: i64) -> Decimal {
    Decimal::from(units)
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

fn days_ahead(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

impl SeedData {
    /// A small olive farm with dates laid out around `today`.
    pub fn demo(session: &Session, today: NaiveDate) -> Self {
        let mut hill = Field::new(session, "Hill grove", Decimal::new(32, 1));
        hill.crop = Some("olives".to_string());
        let mut creek = Field::new(session, "Creek plot", Decimal::new(15, 1));
        creek.crop = Some("olives".to_string());

        let mut koroneiki = TreeBlock::new(session, hill.id, "Hill A", "Koroneiki", 420);
        koroneiki.planted_on = NaiveDate::from_ymd_opt(2009, 3, 1);
        let arbequina = TreeBlock::new(session, creek.id, "Creek A", "Arbequina", 180);

        let harvest_records = vec![
            HarvestRecord::new(session, koroneiki.id, days_ago(today, 75), money(2_150)),
            HarvestRecord::new(session, koroneiki.id, days_ago(today, 45), money(3_400)),
            HarvestRecord::new(session, arbequina.id, days_ago(today, 40), money(1_260)),
        ];

        let finance_transactions = vec![
            FinanceTransaction::new(session, TransactionKind::Income, "oil sales", money(9_800), days_ago(today, 30)),
            FinanceTransaction::new(session, TransactionKind::Expense, "fertilizer", money(2_900), days_ago(today, 50)),
            FinanceTransaction::new(session, TransactionKind::Expense, "fertilizer", money(1_700), days_ago(today, 10)),
            FinanceTransaction::new(session, TransactionKind::Expense, "labor", money(3_200), days_ago(today, 44)),
            FinanceTransaction::new(session, TransactionKind::Expense, "fuel", money(410), days_ago(today, 5)),
        ];

        let agro = Supplier::new(session, "Agro Supplies");
        let mut fuel = Supplier::new(session, "Valley Fuel");
        fuel.contact_name = Some("M. Petrou".to_string());

        let supplier_purchases = vec![
            SupplierPurchase::new(session, agro.id, days_ago(today, 52), "NPK 20-10-10", money(2_500), money(400)),
            SupplierPurchase::new(session, agro.id, days_ago(today, 12), "Copper hydroxide", money(1_450), money(250)),
            SupplierPurchase::new(session, fuel.id, days_ago(today, 6), "Diesel", money(350), money(60)),
        ];
        let mut transfer = SupplierPayment::new(session, agro.id, days_ago(today, 40), money(2_900));
        transfer.method = Some("bank transfer".to_string());
        transfer.reference = Some("TR-1042".to_string());
        let supplier_payments = vec![
            transfer,
            SupplierPayment::new(session, fuel.id, days_ago(today, 6), money(410)),
        ];

        let season = DateWindow::new(days_ago(today, 60), days_ahead(today, 30));
        let mut labor = Budget::new(session, "labor", money(6_000), season);
        labor.alert_threshold = money(75);
        let budgets = vec![
            Budget::new(session, "fertilizer", money(5_000), season),
            labor,
            Budget::new(session, "fuel", money(1_200), season),
        ];

        let mut tractor = Equipment::new(session, "Tractor", "tractor");
        tractor.last_service_on = Some(days_ago(today, 200));
        tractor.next_service_on = Some(days_ago(today, 20));
        let mut sprayer = Equipment::new(session, "Sprayer", "sprayer");
        sprayer.next_service_on = Some(days_ahead(today, 40));
        let mut shaker = Equipment::new(session, "Old shaker", "harvester");
        shaker.status = EquipmentStatus::Retired;
        shaker.next_service_on = Some(days_ago(today, 400));

        let pest_treatments = vec![
            PestTreatment::new(session, hill.id, days_ago(today, 35), "olive fly", "spinosad", money(120)),
            PestTreatment::new(session, creek.id, days_ago(today, 28), "peacock spot", "copper", money(85)),
            PestTreatment::new(session, hill.id, days_ago(today, 7), "olive fly", "spinosad", money(120)),
        ];

        let mut urea = InventoryItem::new(session, "Urea", "fertilizer", "kg");
        urea.quantity = money(40);
        urea.reorder_level = money(100);
        urea.unit_cost = Decimal::new(65, 2);
        let mut copper = InventoryItem::new(session, "Copper hydroxide", "fungicide", "kg");
        copper.quantity = money(25);
        copper.reorder_level = money(10);
        copper.unit_cost = Decimal::new(1_150, 2);
        let mut crates = InventoryItem::new(session, "Harvest crates", "packaging", "pcs");
        crates.quantity = money(300);
        crates.reorder_level = money(50);
        crates.unit_cost = Decimal::new(420, 2);

        let mut pruning = CalendarEvent::new(session, "Winter pruning", "task", days_ahead(today, 3));
        pruning.ends_on = Some(days_ahead(today, 10));
        let calendar_events = vec![
            pruning,
            CalendarEvent::new(session, "Tractor service", "maintenance", days_ahead(today, 1)),
            CalendarEvent::new(session, "Co-op meeting", "meeting", days_ahead(today, 45)),
        ];

        let master_data = vec![
            MasterDataItem::new(session, "expense_category", "fertilizer"),
            MasterDataItem::new(session, "expense_category", "labor"),
            MasterDataItem::new(session, "expense_category", "fuel"),
            MasterDataItem::new(session, "variety", "Koroneiki"),
            MasterDataItem::new(session, "variety", "Arbequina"),
        ];

        Self {
            fields: vec![hill, creek],
            tree_blocks: vec![koroneiki, arbequina],
            harvest_records,
            finance_transactions,
            suppliers: vec![agro, fuel],
            supplier_purchases,
            supplier_payments,
            budgets,
            equipment: vec![tractor, sprayer, shaker],
            pest_treatments,
            inventory_items: vec![urea, copper, crates],
            calendar_events,
            master_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_rows_reference_existing_parents() {
        let session = Session::new(DEMO_USER_ID);
        let today = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let seed = SeedData::demo(&session, today);

        let block_ids: Vec<Uuid> = seed.tree_blocks.iter().map(|b| b.id).collect();
        assert!(seed.harvest_records.iter().all(|r| block_ids.contains(&r.tree_block_id)));

        let supplier_ids: Vec<Uuid> = seed.suppliers.iter().map(|s| s.id).collect();
        assert!(seed.supplier_purchases.iter().all(|p| supplier_ids.contains(&p.supplier_id)));
        assert!(seed.supplier_payments.iter().all(|p| supplier_ids.contains(&p.supplier_id)));

        assert!(seed.fields.iter().all(|f| f.user_id == DEMO_USER_ID));
    }
}
