//! Adjacent-room requirement.

use super::{ConstraintValidator, sector_label};
use crate::catalog::RuleCatalog;
use crate::validation::{CandidateAssignment, ValidationContext, ValidationResult};

/// Rooms supervised together must carry consecutive numbers.
///
/// Numbers come from [`Room::sequence_number`](crate::planning::Room::sequence_number).
/// Rooms without one, and unknown rooms, are left out of the set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContiguityValidator;

impl ConstraintValidator for ContiguityValidator {
    fn name(&self) -> &'static str {
        "contiguity"
    }

    fn validate(
        &self,
        catalog: &RuleCatalog,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        if !catalog.requires_contiguity(context.sector_of_room(candidate.room_id)) {
            return result;
        }

        let held: Vec<_> = context
            .supervisor_assignments(candidate.day, candidate.period)
            .map(|a| a.room_id)
            .collect();
        if held.is_empty() {
            return result;
        }

        let mut numbers: Vec<u32> = held
            .into_iter()
            .chain(std::iter::once(candidate.room_id))
            .filter_map(|id| context.room(id).and_then(|r| r.sequence_number()))
            .collect();
        numbers.sort_unstable();
        numbers.dedup();

        if numbers.windows(2).any(|pair| pair[1] - pair[0] > 1) {
            result.push_error(format!(
                "Les salles doivent être contiguës dans le secteur {}",
                sector_label(context, candidate)
            ));
            result.push_suggestion("Choisissez une salle adjacente aux salles déjà supervisées");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectorType;
    use crate::planning::{Room, SupervisionRole};
    use crate::validation::validators::fixtures::*;

    fn check(ctx: &ValidationContext, room: u32) -> ValidationResult {
        ContiguityValidator.validate(
            &RuleCatalog::default(),
            ctx,
            &candidate(room, SupervisionRole::Supervision),
        )
    }

    #[test]
    fn test_adjacent_room_accepted() {
        let result = check(&context(vec![supervision(1, 1)]), 2);
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_gap_rejected() {
        let result = check(&context(vec![supervision(1, 1)]), 3);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec!["Les salles doivent être contiguës dans le secteur Secteur Test"]
        );
        assert_eq!(
            result.suggestions,
            vec!["Choisissez une salle adjacente aux salles déjà supervisées"]
        );
    }

    #[test]
    fn test_filling_the_gap_accepted() {
        let result = check(&context(vec![supervision(1, 1), supervision(1, 3)]), 2);
        assert!(result.is_valid());
    }

    #[test]
    fn test_first_room_always_valid() {
        let result = check(&context(vec![supervision(2, 1)]), 3);
        assert!(result.is_valid());
    }

    #[test]
    fn test_not_required_by_sector() {
        let sector = sector().with_rules(rules(2, false, vec![SectorType::General]));
        let ctx = ValidationContext::builder(1)
            .sectors([sector])
            .rooms(rooms())
            .assignments([supervision(1, 1)])
            .build();
        assert!(check(&ctx, 3).is_valid());
    }

    #[test]
    fn test_unnumbered_rooms_ignored() {
        let ctx = ValidationContext::builder(1)
            .sectors([sector()])
            .rooms([Room::new(1, "Salle 1", 1), Room::new(9, "Bloc Est", 1)])
            .assignments([supervision(1, 1)])
            .build();
        assert!(check(&ctx, 9).is_valid());
    }

    #[test]
    fn test_last_digit_run_is_used() {
        let ctx = ValidationContext::builder(1)
            .sectors([sector()])
            .rooms([Room::new(1, "Bloc 2 - Salle 4", 1), Room::new(2, "Bloc 2 - Salle 5", 1)])
            .assignments([supervision(1, 1)])
            .build();
        assert!(check(&ctx, 2).is_valid());
    }

    #[test]
    fn test_contiguity_property_over_room_sets() {
        let catalog = RuleCatalog::default();
        let numbered: Vec<Room> = (1..=6u32).map(|n| Room::new(n, format!("Salle {n}"), 1)).collect();

        for mask in 1..(1u32 << 6) {
            let held: Vec<u32> = (1..=6).filter(|n| mask & (1 << (n - 1)) != 0).collect();
            for room in 1..=6u32 {
                let ctx = ValidationContext::builder(1)
                    .sectors([sector()])
                    .rooms(numbered.iter().cloned())
                    .assignments(held.iter().map(|r| supervision(1, *r)))
                    .build();
                let result =
                    ContiguityValidator.validate(&catalog, &ctx, &candidate(room, SupervisionRole::Supervision));

                let mut set = held.clone();
                set.push(room);
                set.sort_unstable();
                set.dedup();
                let span = set[set.len() - 1] - set[0] + 1;
                let expected = span as usize == set.len();

                assert_eq!(result.is_valid(), expected, "held={held:?} candidate={room}");
            }
        }
    }
}
