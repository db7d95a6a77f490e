//! This module defines and re-exports the interfaces for table repositories.
//! It serves as a central point for accessing traits related to data interaction.
mod list_query;
mod table_repository;

pub use list_query::{ListQuery, Order};
pub use table_repository::TableRepository;
