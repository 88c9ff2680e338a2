//! Supervision rules and the global rule catalog.
//!
//! The catalog is the only place global defaults live. Validators receive
//! it by reference and never hardcode limits.

use super::sector_type::SectorType;
use crate::planning::Sector;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Rule set attached to a sector.
///
/// # Example
///
/// ```
/// use supervision_domain::{SectorType, SupervisionRules};
///
/// let rules = SupervisionRules::new(3, false, vec![SectorType::Ophthalmology]);
/// assert_eq!(rules.max_rooms_per_supervisor, 3);
/// assert!(rules.allows(SectorType::Ophthalmology));
/// assert!(!rules.allows(SectorType::Cardiac));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisionRules {
    /// Rooms one supervisor may cover per slot (at least 1)
    pub max_rooms_per_supervisor: u32,
    /// Rooms covered together must be numbered adjacently
    pub requires_contiguous_rooms: bool,
    /// Sector types that may be supervised alongside this sector
    #[serde(default)]
    pub compatible_sector_types: Vec<SectorType>,
}

impl SupervisionRules {
    pub fn new(
        max_rooms_per_supervisor: u32,
        requires_contiguous_rooms: bool,
        compatible_sector_types: Vec<SectorType>,
    ) -> Self {
        Self {
            max_rooms_per_supervisor: max_rooms_per_supervisor.max(1),
            requires_contiguous_rooms,
            compatible_sector_types,
        }
    }

    pub fn allows(&self, sector_type: SectorType) -> bool {
        self.compatible_sector_types.contains(&sector_type)
    }
}

/// Global supervision defaults.
///
/// | Setting                       | Default |
/// |-------------------------------|---------|
/// | `default_max_rooms`           | 2       |
/// | `exceptional_max_rooms`       | 3       |
/// | `default_requires_contiguous` | true    |
/// | `minimum_rest_hours`          | 12      |
/// | `max_shifts_per_week`         | 2       |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCatalog {
    /// Room limit for sectors without their own rule set
    pub default_max_rooms: u32,
    /// Ceiling reachable in supervision-only mode
    pub exceptional_max_rooms: u32,
    /// Contiguity requirement for sectors without their own rule set
    pub default_requires_contiguous: bool,
    /// Compatible sector types keyed by sector type
    pub default_compatibility: HashMap<SectorType, Vec<SectorType>>,
    /// Minimum rest between two shifts of the same person
    pub minimum_rest_hours: u32,
    /// Maximum shifts per ISO week
    pub max_shifts_per_week: u32,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        use SectorType::*;

        let default_compatibility = HashMap::from([
            (General, vec![General, Orthopedic]),
            (Orthopedic, vec![Orthopedic, General]),
            (Ophthalmology, vec![Ophthalmology, General]),
            (Pediatric, vec![Pediatric, General]),
            (Endoscopy, vec![Endoscopy]),
            (Cardiac, vec![Cardiac]),
        ]);

        Self {
            default_max_rooms: 2,
            exceptional_max_rooms: 3,
            default_requires_contiguous: true,
            default_compatibility,
            minimum_rest_hours: 12,
            max_shifts_per_week: 2,
        }
    }
}

impl RuleCatalog {
    /// Compatible sector types for a category, itself always included.
    pub fn compatible_types(&self, sector_type: SectorType) -> Vec<SectorType> {
        let mut types = self
            .default_compatibility
            .get(&sector_type)
            .cloned()
            .unwrap_or_default();
        if !types.contains(&sector_type) {
            types.insert(0, sector_type);
        }
        types
    }

    /// Rules for a sector that has none of its own.
    pub fn default_rules(&self, sector_type: SectorType) -> SupervisionRules {
        SupervisionRules::new(
            self.default_max_rooms,
            self.default_requires_contiguous,
            self.compatible_types(sector_type),
        )
    }

    /// The sector's own rule set, or the catalog defaults for its type.
    pub fn effective_rules(&self, sector: &Sector) -> SupervisionRules {
        match &sector.supervision_rules {
            Some(rules) => SupervisionRules {
                max_rooms_per_supervisor: rules.max_rooms_per_supervisor.max(1),
                ..rules.clone()
            },
            None => self.default_rules(sector.sector_type),
        }
    }

    /// Room limit for a (possibly unknown) sector.
    pub fn max_rooms_for(&self, sector: Option<&Sector>) -> u32 {
        sector
            .map(|s| self.effective_rules(s).max_rooms_per_supervisor)
            .unwrap_or_else(|| self.default_max_rooms.max(1))
    }

    /// Contiguity requirement for a (possibly unknown) sector.
    pub fn requires_contiguity(&self, sector: Option<&Sector>) -> bool {
        sector
            .map(|s| self.effective_rules(s).requires_contiguous_rooms)
            .unwrap_or(self.default_requires_contiguous)
    }

    /// True when a supervisor holding exactly the default limit may still take
    /// one more room in supervision-only mode.
    pub fn allows_exceptional_supervision(&self, existing_rooms: u32) -> bool {
        existing_rooms == self.default_max_rooms
            && self.exceptional_max_rooms > self.default_max_rooms
    }
}
