use orchard_shared::types::{
    Budget, CalendarEvent, Equipment, FinanceTransaction, Field, HarvestRecord, InventoryItem,
    MasterDataItem, PestTreatment, Supplier, SupplierPayment, SupplierPurchase, TreeBlock,
};
use uuid::Uuid;

use super::{ColumnValue, Record};

impl Record for Field {
    const TABLE: &'static str = "fields";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "name", "area_hectares", "crop", "location",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.name.clone().into(),
            self.area_hectares.into(),
            self.crop.clone().into(),
            self.location.clone().into(),
        ]
    }
}

impl Record for TreeBlock {
    const TABLE: &'static str = "tree_blocks";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "field_id", "name", "variety", "tree_count", "planted_on",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.field_id.into(),
            self.name.clone().into(),
            self.variety.clone().into(),
            self.tree_count.into(),
            self.planted_on.into(),
        ]
    }
}

impl Record for HarvestRecord {
    const TABLE: &'static str = "harvest_records";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "tree_block_id", "harvested_on", "quantity_kg",
        "quality_grade", "notes",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.tree_block_id.into(),
            self.harvested_on.into(),
            self.quantity_kg.into(),
            self.quality_grade.clone().into(),
            self.notes.clone().into(),
        ]
    }
}

impl Record for FinanceTransaction {
    const TABLE: &'static str = "finance_transactions";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "kind", "category", "amount", "occurred_on", "description",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.kind.as_str().into(),
            self.category.clone().into(),
            self.amount.into(),
            self.occurred_on.into(),
            self.description.clone().into(),
        ]
    }
}

impl Record for Supplier {
    const TABLE: &'static str = "suppliers";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "name", "contact_name", "phone", "email",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.name.clone().into(),
            self.contact_name.clone().into(),
            self.phone.clone().into(),
            self.email.clone().into(),
        ]
    }
}

impl Record for SupplierPurchase {
    const TABLE: &'static str = "supplier_purchases";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "supplier_id", "purchased_on", "description", "subtotal",
        "tax", "total",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.supplier_id.into(),
            self.purchased_on.into(),
            self.description.clone().into(),
            self.subtotal.into(),
            self.tax.into(),
            self.total.into(),
        ]
    }
}

impl Record for SupplierPayment {
    const TABLE: &'static str = "supplier_payments";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "supplier_id", "paid_on", "amount", "method", "reference",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.supplier_id.into(),
            self.paid_on.into(),
            self.amount.into(),
            self.method.clone().into(),
            self.reference.clone().into(),
        ]
    }
}

impl Record for Budget {
    const TABLE: &'static str = "budgets";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "category", "planned_amount", "period_start", "period_end",
        "alert_threshold",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.category.clone().into(),
            self.planned_amount.into(),
            self.period_start.into(),
            self.period_end.into(),
            self.alert_threshold.into(),
        ]
    }
}

impl Record for Equipment {
    const TABLE: &'static str = "equipment";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "name", "kind", "status", "purchased_on", "purchase_cost",
        "last_service_on", "next_service_on",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.name.clone().into(),
            self.kind.clone().into(),
            self.status.as_str().into(),
            self.purchased_on.into(),
            self.purchase_cost.into(),
            self.last_service_on.into(),
            self.next_service_on.into(),
        ]
    }
}

impl Record for PestTreatment {
    const TABLE: &'static str = "pest_treatments";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "field_id", "treated_on", "pest", "product", "dosage", "cost",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.field_id.into(),
            self.treated_on.into(),
            self.pest.clone().into(),
            self.product.clone().into(),
            self.dosage.clone().into(),
            self.cost.into(),
        ]
    }
}

impl Record for InventoryItem {
    const TABLE: &'static str = "inventory_items";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "name", "category", "quantity", "unit", "reorder_level",
        "unit_cost",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.name.clone().into(),
            self.category.clone().into(),
            self.quantity.into(),
            self.unit.clone().into(),
            self.reorder_level.into(),
            self.unit_cost.into(),
        ]
    }
}

impl Record for CalendarEvent {
    const TABLE: &'static str = "calendar_events";
    const COLUMNS: &'static [&'static str] = &[
        "id", "user_id", "created_at", "title", "kind", "starts_on", "ends_on", "notes",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.title.clone().into(),
            self.kind.clone().into(),
            self.starts_on.into(),
            self.ends_on.into(),
            self.notes.clone().into(),
        ]
    }
}

impl Record for MasterDataItem {
    const TABLE: &'static str = "master_data";
    const COLUMNS: &'static [&'static str] = &["id", "user_id", "created_at", "kind", "value"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![
            self.id.into(),
            self.user_id.into(),
            self.created_at.into(),
            self.kind.clone().into(),
            self.value.clone().into(),
        ]
    }
}
