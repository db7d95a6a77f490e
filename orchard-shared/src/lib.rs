//! # Orchard Shared
//! This crate defines the row types and value types shared across the orchard
//! workspace. It includes one row type per table (fields, tree blocks, harvest,
//! finances, suppliers, budgets, equipment, pest treatments, inventory,
//! calendar, master data) and the ledger/variance shapes consumed by the
//! aggregator.
pub mod types;
