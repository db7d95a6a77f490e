//! # Orchard
//!
//! Farm management toolkit: keeps fields, harvests, finances, suppliers,
//! equipment and inventory in PostgreSQL and turns them into ledgers, budget
//! comparisons and dashboard summaries.
//!
//! ## Modules
//!
//! - [`config`]: Environment configuration and dependency wiring
//! - [`dashboard`]: Refreshes stores and builds reports once data is ready
//! - [`bookkeeping`]: Writes through the stores (master data, purchases, payments)
//! - [`commands`]: Handlers behind the CLI subcommands
//! - [`report`]: Plain-text rendering
//! - [`seed`]: Demo rows for offline runs
//! - [`errors`]: Error types for the application

pub mod bookkeeping;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod report;
pub mod seed;

pub use commands::OutputFormat;
pub use config::{Config, Dependencies};
pub use errors::{AppError, DashboardError};
