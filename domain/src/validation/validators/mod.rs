//! Constraint validators
//!
//! Each validator is a stateless unit struct implementing
//! [`ConstraintValidator`]. They only read the [`ValidationContext`] snapshot
//! and the injected [`RuleCatalog`], so they can run in any order.

pub mod capacity;
pub mod compatibility;
pub mod contiguity;
pub mod role_conflict;

pub use capacity::CapacityValidator;
pub use compatibility::SectorCompatibilityValidator;
pub use contiguity::ContiguityValidator;
pub use role_conflict::RoleConflictValidator;

use super::context::{CandidateAssignment, ValidationContext};
use super::result::ValidationResult;
use crate::catalog::RuleCatalog;

/// One independent check of a candidate assignment.
pub trait ConstraintValidator: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Check the candidate against the snapshot. Never fails: violations are
    /// reported as errors inside the returned result.
    fn validate(
        &self,
        catalog: &RuleCatalog,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult;
}

/// Fallback label when a room's sector cannot be resolved.
pub(crate) fn sector_label(context: &ValidationContext, candidate: &CandidateAssignment) -> String {
    context
        .sector_of_room(candidate.room_id)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| "inconnu".to_string())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::catalog::{SectorType, SupervisionRules};
    use crate::planning::{Assignment, DayOfWeek, Period, Room, Sector, SupervisionRole};
    use crate::validation::{CandidateAssignment, ValidationContext};

    pub fn sector() -> Sector {
        Sector::new(1, "Secteur Test", SectorType::General)
    }

    pub fn rooms() -> Vec<Room> {
        vec![
            Room::new(1, "Salle 1", 1),
            Room::new(2, "Salle 2", 1),
            Room::new(3, "Salle 3", 1),
        ]
    }

    pub fn supervision(supervisor: u32, room: u32) -> Assignment {
        Assignment::new(
            supervisor,
            room,
            DayOfWeek::Monday,
            Period::Morning,
            SupervisionRole::Supervision,
        )
    }

    pub fn anesthesia(supervisor: u32, room: u32) -> Assignment {
        Assignment::new(
            supervisor,
            room,
            DayOfWeek::Monday,
            Period::Morning,
            SupervisionRole::Anesthesia,
        )
    }

    pub fn candidate(room: u32, role: SupervisionRole) -> CandidateAssignment {
        CandidateAssignment::new(room, role, DayOfWeek::Monday, Period::Morning)
    }

    /// Supervisor 1 in the single test sector.
    pub fn context(assignments: Vec<Assignment>) -> ValidationContext {
        ValidationContext::builder(1)
            .sectors([sector()])
            .rooms(rooms())
            .assignments(assignments)
            .build()
    }

    pub fn rules(max: u32, contiguous: bool, compatible: Vec<SectorType>) -> SupervisionRules {
        SupervisionRules::new(max, contiguous, compatible)
    }
}
