mod budget;
mod calendar;
mod equipment;
mod field;
mod finance;
mod harvest;
mod inventory;
mod kind;
mod ledger;
mod master_data;
mod pest_treatment;
mod session;
mod supplier;
mod tree_block;
mod variance;

pub use budget::{Budget, DEFAULT_ALERT_THRESHOLD};
pub use calendar::CalendarEvent;
pub use equipment::{Equipment, EquipmentStatus};
pub use field::Field;
pub use finance::{FinanceTransaction, TransactionKind};
pub use harvest::HarvestRecord;
pub use inventory::InventoryItem;
pub use kind::ParseKindError;
pub use ledger::{EntryKind, Ledger, LedgerEntry, LedgerEvent};
pub use master_data::MasterDataItem;
pub use pest_treatment::PestTreatment;
pub use session::Session;
pub use supplier::{Supplier, SupplierPayment, SupplierPurchase};
pub use tree_block::TreeBlock;
pub use variance::{ActualAmount, CategoryVariance, DateWindow, PlannedAmount, VarianceReport};

/// Identifier type shared by every table.
pub type RowId = uuid::Uuid;

/// Identifier of the user owning a row.
pub type UserId = uuid::Uuid;
