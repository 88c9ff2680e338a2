//! Rule catalog configuration from TOML (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use supervision_domain::{ConfigIssue, ConfigIssueCode, RuleCatalog, SectorType};

/// Rule catalog configuration from TOML.
///
/// Every field falls back to the built-in [`RuleCatalog`] default.
///
/// # Example
///
/// ```toml
/// [catalog]
/// default_max_rooms = 2
/// exceptional_max_rooms = 3
/// requires_contiguous_rooms = true
/// minimum_rest_hours = 12
/// max_shifts_per_week = 2
///
/// [catalog.compatibility]
/// GENERAL = ["GENERAL", "ORTHOPEDIC"]
/// CARDIAC = ["CARDIAC"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Rooms per supervisor and slot for sectors without their own rules
    pub default_max_rooms: u32,
    /// Ceiling reachable in supervision-only mode
    pub exceptional_max_rooms: u32,
    /// Contiguity requirement for sectors without their own rules
    pub requires_contiguous_rooms: bool,
    /// Minimum rest between two shifts, in hours
    pub minimum_rest_hours: u32,
    /// Maximum shifts per ISO week
    pub max_shifts_per_week: u32,
    /// Sector type name -> compatible sector type names
    pub compatibility: BTreeMap<String, Vec<String>>,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        let catalog = RuleCatalog::default();
        let compatibility = catalog
            .default_compatibility
            .iter()
            .map(|(key, types)| {
                (
                    key.to_string(),
                    types.iter().map(ToString::to_string).collect(),
                )
            })
            .collect();

        Self {
            default_max_rooms: catalog.default_max_rooms,
            exceptional_max_rooms: catalog.exceptional_max_rooms,
            requires_contiguous_rooms: catalog.default_requires_contiguous,
            minimum_rest_hours: catalog.minimum_rest_hours,
            max_shifts_per_week: catalog.max_shifts_per_week,
            compatibility,
        }
    }
}

impl FileCatalogConfig {
    /// Convert to the domain `RuleCatalog`, returning validation issues.
    ///
    /// Zero limits and unknown sector type names fall back to defaults with a
    /// warning. An exceptional limit below the default limit is an error; the
    /// returned catalog clamps it to the default limit.
    pub fn to_catalog(&self) -> (RuleCatalog, Vec<ConfigIssue>) {
        let defaults = RuleCatalog::default();
        let mut issues = Vec::new();

        let default_max_rooms = nonzero_or(
            self.default_max_rooms,
            defaults.default_max_rooms,
            "catalog.default_max_rooms",
            &mut issues,
        );
        let mut exceptional_max_rooms = nonzero_or(
            self.exceptional_max_rooms,
            defaults.exceptional_max_rooms,
            "catalog.exceptional_max_rooms",
            &mut issues,
        );
        if exceptional_max_rooms < default_max_rooms {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ExceptionalBelowDefault {
                    default_max: default_max_rooms,
                    exceptional_max: exceptional_max_rooms,
                },
                format!(
                    "catalog.exceptional_max_rooms ({exceptional_max_rooms}) is lower than \
                     catalog.default_max_rooms ({default_max_rooms})"
                ),
            ));
            exceptional_max_rooms = default_max_rooms;
        }

        let minimum_rest_hours = if self.minimum_rest_hours == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroRestDuration,
                format!(
                    "catalog.minimum_rest_hours cannot be 0, falling back to {}",
                    defaults.minimum_rest_hours
                ),
            ));
            defaults.minimum_rest_hours
        } else {
            self.minimum_rest_hours
        };

        let mut default_compatibility: HashMap<SectorType, Vec<SectorType>> = HashMap::new();
        for (key, values) in &self.compatibility {
            let Some(sector_type) = parse_sector_type(key, &mut issues) else {
                continue;
            };
            let compatible = values
                .iter()
                .filter_map(|v| parse_sector_type(v, &mut issues))
                .collect();
            default_compatibility.insert(sector_type, compatible);
        }

        let catalog = RuleCatalog {
            default_max_rooms,
            exceptional_max_rooms,
            default_requires_contiguous: self.requires_contiguous_rooms,
            default_compatibility,
            minimum_rest_hours,
            max_shifts_per_week: self.max_shifts_per_week,
        };
        (catalog, issues)
    }
}

fn nonzero_or(value: u32, fallback: u32, field: &str, issues: &mut Vec<ConfigIssue>) -> u32 {
    if value > 0 {
        return value;
    }
    issues.push(ConfigIssue::warning(
        ConfigIssueCode::ZeroRoomLimit {
            field: field.to_string(),
        },
        format!("{field} cannot be 0, falling back to {fallback}"),
    ));
    fallback
}

fn parse_sector_type(value: &str, issues: &mut Vec<ConfigIssue>) -> Option<SectorType> {
    match value.parse() {
        Ok(sector_type) => Some(sector_type),
        Err(_) => {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownSectorType {
                    value: value.to_string(),
                },
                format!("catalog.compatibility: unknown sector type '{value}', ignored"),
            ));
            None
        }
    }
}
