//! Rule engine adapters

mod catalog_rule_engine;

pub use catalog_rule_engine::{CatalogRuleEngine, MIN_REST_RULE, WEEKLY_MAX_RULE};
