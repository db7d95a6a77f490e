//! # Orchard Aggregator
//! Pure, synchronous aggregation over rows already loaded in memory.
//!
//! - [`ledger`]: merges debit and credit events into a running-balance ledger.
//! - [`variance`]: planned vs actual per category, with an optional date window.
//! - [`supplier`] and [`budget`]: the two views built on those primitives.
//! - [`summary`]: the dashboard roll-ups (finances, harvest, inventory,
//!   equipment, treatments, calendar).
//!
//! Every function here is a pure function of its inputs: running it twice on
//! the same slices yields the same output.
pub mod budget;
pub mod ledger;
pub mod summary;
pub mod supplier;
pub mod variance;

pub use budget::budget_report;
pub use ledger::build_ledger;
pub use supplier::{SupplierBalance, supplier_balances, supplier_ledger};
pub use variance::compute_variance;
