//! Configuration module for the orchard application.
//! Reads settings from the environment and wires repositories and stores.
mod dependencies;
mod settings;

pub use dependencies::{Dependencies, Stores};
pub use settings::{Config, DEFAULT_MAX_CONNECTIONS};
