//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain values on demand.

mod catalog;
mod store;

pub use catalog::FileCatalogConfig;
pub use store::FileStoreConfig;

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use supervision_domain::{ConfigIssue, RuleCatalog, Severity};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Supervision rule defaults
    pub catalog: FileCatalogConfig,
    /// Planning persistence
    pub store: FileStoreConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.catalog.to_catalog().1
    }

    /// Build the rule catalog, failing on any error-level issue.
    ///
    /// Warning-level issues are returned alongside the catalog.
    pub fn rule_catalog(&self) -> Result<(RuleCatalog, Vec<ConfigIssue>), ConfigError> {
        let (catalog, issues) = self.catalog.to_catalog();
        if ConfigIssue::has_errors(&issues) {
            let errors = issues
                .into_iter()
                .filter(|i| i.severity == Severity::Error)
                .collect();
            return Err(ConfigError::Invalid(errors));
        }
        Ok((catalog, issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[catalog]
default_max_rooms = 2
exceptional_max_rooms = 4
minimum_rest_hours = 11
max_shifts_per_week = 3

[store]
data_dir = "plannings"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.exceptional_max_rooms, 4);
        assert_eq!(config.catalog.minimum_rest_hours, 11);
        assert_eq!(config.catalog.max_shifts_per_week, 3);
        assert!(config.store.data_dir.is_some());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.catalog, FileCatalogConfig::default());
        assert!(config.store.data_dir.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_rule_catalog_keeps_warnings() {
        let toml_str = r#"
[catalog]
minimum_rest_hours = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let (catalog, issues) = config.rule_catalog().unwrap();
        assert_eq!(catalog.minimum_rest_hours, 12);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_rule_catalog_rejects_errors() {
        let toml_str = r#"
[catalog]
default_max_rooms = 4
exceptional_max_rooms = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let err = config.rule_catalog().unwrap_err();
        assert!(matches!(&err, ConfigError::Invalid(issues) if issues.len() == 1));
        assert!(err.to_string().contains("exceptional_max_rooms"));
    }
}
