//! Rooms-per-supervisor limit.

use super::{ConstraintValidator, sector_label};
use crate::catalog::RuleCatalog;
use crate::validation::{CandidateAssignment, ValidationContext, ValidationResult};

/// Counts the supervisor's rooms in the candidate's slot against the limit of
/// the candidate room's sector.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityValidator;

impl ConstraintValidator for CapacityValidator {
    fn name(&self) -> &'static str {
        "capacity"
    }

    fn validate(
        &self,
        catalog: &RuleCatalog,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();

        let existing = context
            .supervisor_assignments(candidate.day, candidate.period)
            .count() as u32;
        let max = catalog.max_rooms_for(context.sector_of_room(candidate.room_id));

        if existing >= max {
            result.push_error(format!(
                "Limite atteinte: {} salles maximum pour le secteur {}",
                max,
                sector_label(context, candidate)
            ));
            if catalog.allows_exceptional_supervision(existing) {
                result.push_suggestion(format!(
                    "Une {}ème salle est possible en mode supervision seule (sans anesthésie)",
                    existing + 1
                ));
            }
        } else if existing + 1 == max {
            result.push_warning(format!(
                "Attention: Vous atteignez la limite de {} salles pour ce secteur",
                max
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SectorType;
    use crate::planning::SupervisionRole;
    use crate::validation::validators::fixtures::*;

    #[test]
    fn test_second_room_within_default_limit() {
        let ctx = context(vec![supervision(1, 1)]);
        let result = CapacityValidator.validate(
            &RuleCatalog::default(),
            &ctx,
            &candidate(2, SupervisionRole::Supervision),
        );

        assert!(result.is_valid());
        assert!(result.errors.is_empty());
        assert_eq!(
            result.warnings,
            vec!["Attention: Vous atteignez la limite de 2 salles pour ce secteur"]
        );
    }

    #[test]
    fn test_third_room_rejected() {
        let ctx = context(vec![supervision(1, 1), supervision(1, 2)]);
        let result = CapacityValidator.validate(
            &RuleCatalog::default(),
            &ctx,
            &candidate(3, SupervisionRole::Supervision),
        );

        assert!(!result.is_valid());
        assert!(
            result
                .errors
                .contains(&"Limite atteinte: 2 salles maximum pour le secteur Secteur Test".to_string())
        );
        assert_eq!(
            result.suggestions,
            vec!["Une 3ème salle est possible en mode supervision seule (sans anesthésie)"]
        );
    }

    #[test]
    fn test_no_exceptional_suggestion_without_higher_ceiling() {
        let catalog = RuleCatalog {
            exceptional_max_rooms: 2,
            ..RuleCatalog::default()
        };
        let ctx = context(vec![supervision(1, 1), supervision(1, 2)]);
        let result =
            CapacityValidator.validate(&catalog, &ctx, &candidate(3, SupervisionRole::Supervision));

        assert!(!result.is_valid());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_first_room_is_silent() {
        let ctx = context(vec![]);
        let result = CapacityValidator.validate(
            &RuleCatalog::default(),
            &ctx,
            &candidate(1, SupervisionRole::Supervision),
        );
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_other_slots_and_supervisors_not_counted() {
        let mut other_period = supervision(1, 2);
        other_period.period = crate::planning::Period::Afternoon;
        let ctx = context(vec![other_period, supervision(2, 1), supervision(2, 3)]);
        let result = CapacityValidator.validate(
            &RuleCatalog::default(),
            &ctx,
            &candidate(1, SupervisionRole::Supervision),
        );
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_sector_limit_overrides_default() {
        let sector = sector().with_rules(rules(3, false, vec![SectorType::General]));
        let ctx = ValidationContext::builder(1)
            .sectors([sector])
            .rooms(rooms())
            .assignments([supervision(1, 1), supervision(1, 2)])
            .build();
        let result = CapacityValidator.validate(
            &RuleCatalog::default(),
            &ctx,
            &candidate(3, SupervisionRole::Supervision),
        );

        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec!["Attention: Vous atteignez la limite de 3 salles pour ce secteur"]
        );
    }

    #[test]
    fn test_limit_property_over_counts() {
        let catalog = RuleCatalog::default();
        for max in 1..=4u32 {
            for k in 0..=5u32 {
                let sector = sector().with_rules(rules(max, false, vec![SectorType::General]));
                let assignments = (0..k).map(|i| supervision(1, 10 + i));
                let ctx = ValidationContext::builder(1)
                    .sectors([sector])
                    .rooms(rooms())
                    .assignments(assignments)
                    .build();
                let result =
                    CapacityValidator.validate(&catalog, &ctx, &candidate(1, SupervisionRole::Supervision));

                assert_eq!(result.is_valid(), k + 1 <= max, "max={max} k={k}");
                assert_eq!(!result.warnings.is_empty(), k + 1 == max, "max={max} k={k}");
            }
        }
    }
}
