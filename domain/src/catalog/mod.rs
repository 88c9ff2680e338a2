//! Rule Catalog
//!
//! Static supervision configuration: per-sector room limits, the
//! sector-compatibility matrix, contiguity requirements and rest durations.
//! Pure data with lookup helpers, no validation behavior.

pub mod rule_catalog;
pub mod sector_type;

pub use rule_catalog::{RuleCatalog, SupervisionRules};
pub use sector_type::SectorType;
