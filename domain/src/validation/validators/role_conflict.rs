//! Anesthesia exclusivity.

use super::ConstraintValidator;
use crate::catalog::RuleCatalog;
use crate::planning::SupervisionRole;
use crate::validation::{CandidateAssignment, ValidationContext, ValidationResult};

/// ANESTHESIA is exclusive per supervisor and per room within a slot.
///
/// A supervisor already covering two or more rooms in SUPERVISION who takes
/// on ANESTHESIA gets a workload warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleConflictValidator;

impl ConstraintValidator for RoleConflictValidator {
    fn name(&self) -> &'static str {
        "role-conflict"
    }

    fn validate(
        &self,
        _catalog: &RuleCatalog,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult {
        let mut result = ValidationResult::valid();
        if !candidate.role.is_anesthesia() {
            return result;
        }

        let (anesthesia, supervision): (Vec<&_>, Vec<&_>) = context
            .supervisor_assignments(candidate.day, candidate.period)
            .partition(|a| a.role.is_anesthesia());

        if !anesthesia.is_empty() {
            result.push_error("Un superviseur ne peut faire l'anesthésie que dans une seule salle");
        }

        let room_taken = context
            .room_assignments(candidate.room_id, candidate.day, candidate.period)
            .any(|a| a.role == SupervisionRole::Anesthesia);
        if room_taken {
            result.push_error("Cette salle a déjà un anesthésiste pour cette période");
        }

        if supervision.len() >= 2 {
            result.push_warning(format!(
                "Anesthésie en plus de {} salles en supervision: charge élevée",
                supervision.len()
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validators::fixtures::*;

    fn check(ctx: &ValidationContext, room: u32, role: SupervisionRole) -> ValidationResult {
        RoleConflictValidator.validate(&RuleCatalog::default(), ctx, &candidate(room, role))
    }

    #[test]
    fn test_second_anesthesia_for_supervisor_rejected() {
        let result = check(&context(vec![anesthesia(1, 1)]), 2, SupervisionRole::Anesthesia);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec!["Un superviseur ne peut faire l'anesthésie que dans une seule salle"]
        );
    }

    #[test]
    fn test_room_with_anesthetist_rejected_for_any_supervisor() {
        let result = check(&context(vec![anesthesia(2, 1)]), 1, SupervisionRole::Anesthesia);
        assert!(!result.is_valid());
        assert_eq!(
            result.errors,
            vec!["Cette salle a déjà un anesthésiste pour cette période"]
        );
    }

    #[test]
    fn test_supervision_never_conflicts() {
        let result = check(
            &context(vec![anesthesia(1, 1), anesthesia(2, 2)]),
            2,
            SupervisionRole::Supervision,
        );
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_anesthesia_on_top_of_supervision_warns() {
        let result = check(
            &context(vec![supervision(1, 1), supervision(1, 2)]),
            3,
            SupervisionRole::Anesthesia,
        );
        assert!(result.is_valid());
        assert_eq!(
            result.warnings,
            vec!["Anesthésie en plus de 2 salles en supervision: charge élevée"]
        );
    }

    #[test]
    fn test_single_supervision_room_no_warning() {
        let result = check(&context(vec![supervision(1, 1)]), 2, SupervisionRole::Anesthesia);
        assert_eq!(result, ValidationResult::valid());
    }
}
