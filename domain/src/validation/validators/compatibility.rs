//! Sector-type compatibility.

use super::ConstraintValidator;
use crate::catalog::{RuleCatalog, SectorType};
use crate::validation::{CandidateAssignment, ValidationContext, ValidationResult};

/// Two sector types may share a supervisor in the same slot if either
/// sector's effective compatible set names the other. The check is
/// symmetric, so the verdict does not depend on which room was assigned
/// first.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorCompatibilityValidator;

impl ConstraintValidator for SectorCompatibilityValidator {
    fn name(&self) -> &'static str {
        "sector-compatibility"
    }

    fn validate(
        &self,
        catalog: &RuleCatalog,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let Some(sector) = context.sector_of_room(candidate.room_id) else {
            return result;
        };
        let candidate_type = sector.sector_type;
        let compatible = catalog.effective_rules(sector).compatible_sector_types;

        // Used type -> whether some held sector of that type accepts the candidate
        let mut used: Vec<(SectorType, bool)> = Vec::new();
        for assignment in context.supervisor_assignments(candidate.day, candidate.period) {
            let Some(held) = context.sector_of_room(assignment.room_id) else {
                continue;
            };
            let accepts = catalog.effective_rules(held).allows(candidate_type);
            match used.iter_mut().find(|(t, _)| *t == held.sector_type) {
                Some(entry) => entry.1 |= accepts,
                None => used.push((held.sector_type, accepts)),
            }
        }

        let mut mixed = false;
        for (used_type, accepts) in used.iter().filter(|(t, _)| *t != candidate_type) {
            mixed = true;
            if !accepts && !compatible.contains(used_type) {
                result.push_error(format!(
                    "Incompatibilité: {} ne peut pas être supervisé avec {}",
                    candidate_type, used_type
                ));
            }
        }

        if !result.is_valid() {
            let list = compatible
                .iter()
                .map(SectorType::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            result.push_suggestion(format!("Secteurs compatibles avec {}: {}", candidate_type, list));
        }
        if mixed {
            result.push_warning("Supervision multi-secteurs: vérifiez la proximité physique des salles");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::{Room, Sector, SupervisionRole};
    use crate::validation::validators::fixtures::*;

    fn two_sectors(second: Sector) -> ValidationContext {
        ValidationContext::builder(1)
            .sectors([Sector::new(1, "Général", SectorType::General), second])
            .rooms([Room::new(1, "Salle 1", 1), Room::new(2, "Salle 2", 2)])
            .assignments([supervision(1, 1)])
            .build()
    }

    fn check(ctx: &ValidationContext, room: u32) -> ValidationResult {
        SectorCompatibilityValidator.validate(
            &RuleCatalog::default(),
            ctx,
            &candidate(room, SupervisionRole::Supervision),
        )
    }

    #[test]
    fn test_compatible_sectors_accepted_with_warning() {
        let ctx = two_sectors(
            Sector::new(2, "Pédiatrie", SectorType::Pediatric).with_rules(rules(
                2,
                false,
                vec![SectorType::General, SectorType::Pediatric],
            )),
        );
        let result = check(&ctx, 2);

        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec!["Supervision multi-secteurs: vérifiez la proximité physique des salles"]
        );
    }

    #[test]
    fn test_incompatible_sectors_rejected() {
        let ctx = two_sectors(
            Sector::new(2, "Endoscopie", SectorType::Endoscopy).with_rules(rules(
                2,
                false,
                vec![SectorType::Endoscopy],
            )),
        );
        let result = check(&ctx, 2);

        assert!(!result.is_valid());
        assert!(
            result
                .errors
                .contains(&"Incompatibilité: ENDOSCOPY ne peut pas être supervisé avec GENERAL".to_string())
        );
        assert_eq!(result.suggestions, vec!["Secteurs compatibles avec ENDOSCOPY: ENDOSCOPY"]);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_catalog_map_used_without_sector_rules() {
        let ortho = two_sectors(Sector::new(2, "Ortho", SectorType::Orthopedic));
        assert!(check(&ortho, 2).is_valid());

        let cardiac = two_sectors(Sector::new(2, "Cardio", SectorType::Cardiac));
        let result = check(&cardiac, 2);
        assert!(!result.is_valid());
        assert_eq!(result.suggestions, vec!["Secteurs compatibles avec CARDIAC: CARDIAC"]);
    }

    #[test]
    fn test_held_sector_set_accepts_candidate() {
        // GENERAL's default set does not name OPHTHALMOLOGY, but OPHTHALMOLOGY's names GENERAL
        let ctx = ValidationContext::builder(1)
            .sectors([
                Sector::new(1, "Ophtalmo", SectorType::Ophthalmology),
                Sector::new(2, "Général", SectorType::General),
            ])
            .rooms([Room::new(1, "Salle 1", 1), Room::new(2, "Salle 2", 2)])
            .assignments([supervision(1, 1)])
            .build();
        let result = check(&ctx, 2);

        assert!(result.is_valid(), "{:?}", result.errors);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_verdict_independent_of_assignment_order() {
        let sectors = [
            Sector::new(1, "Général", SectorType::General),
            Sector::new(2, "Ophtalmo", SectorType::Ophthalmology),
            Sector::new(3, "Cardio", SectorType::Cardiac),
        ];
        let rooms = [
            Room::new(1, "Salle 1", 1),
            Room::new(2, "Salle 2", 2),
            Room::new(3, "Salle 3", 3),
        ];
        let verdict = |held: u32, room: u32| {
            let ctx = ValidationContext::builder(1)
                .sectors(sectors.iter().cloned())
                .rooms(rooms.iter().cloned())
                .assignments([supervision(1, held)])
                .build();
            check(&ctx, room).is_valid()
        };

        for (a, b) in [(1, 2), (1, 3), (2, 3)] {
            assert_eq!(verdict(a, b), verdict(b, a), "rooms {a} and {b}");
        }
        assert!(verdict(1, 2));
        assert!(!verdict(1, 3));
    }

    #[test]
    fn test_same_sector_type_no_warning() {
        let result = check(&context(vec![supervision(1, 1)]), 2);
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_first_assignment_trivially_valid() {
        let ctx = two_sectors(Sector::new(2, "Cardio", SectorType::Cardiac));
        let result = SectorCompatibilityValidator.validate(
            &RuleCatalog::default(),
            &ValidationContext::builder(2)
                .sectors(ctx.sectors().iter().cloned())
                .rooms(ctx.rooms().iter().cloned())
                .build(),
            &candidate(2, SupervisionRole::Supervision),
        );
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_unknown_candidate_room_is_neutral() {
        let ctx = two_sectors(Sector::new(2, "Cardio", SectorType::Cardiac));
        assert!(check(&ctx, 42).is_valid());
    }
}
