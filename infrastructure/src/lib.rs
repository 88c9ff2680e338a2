//! Infrastructure layer for bloc-supervision
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileCatalogConfig, FileConfig, FileStoreConfig};
pub use rules::CatalogRuleEngine;
pub use store::{InMemoryPlanningStore, JsonFilePlanningStore};
