//! Assignment Validation Engine - composes the constraint validators.

use super::context::{CandidateAssignment, ValidationContext};
use super::result::ValidationResult;
use super::validators::{
    CapacityValidator, ConstraintValidator, ContiguityValidator, RoleConflictValidator,
    SectorCompatibilityValidator,
};
use crate::catalog::RuleCatalog;
use crate::planning::{DayOfWeek, Period};
use std::fmt;

/// Runs every constraint validator against one candidate and merges their
/// verdicts.
///
/// Validators run in a fixed order (capacity, contiguity, sector
/// compatibility, role conflict) so that messages are reproducible. The
/// merged result is valid only if every validator passed.
///
/// # Example
///
/// ```
/// use supervision_domain::{
///     AssignmentValidationEngine, CandidateAssignment, DayOfWeek, Period, Room, RuleCatalog,
///     Sector, SectorType, SupervisionRole, ValidationContext,
/// };
///
/// let engine = AssignmentValidationEngine::new(RuleCatalog::default());
/// let context = ValidationContext::builder(1)
///     .sectors([Sector::new(1, "Secteur A", SectorType::General)])
///     .rooms([Room::new(1, "Salle 1", 1)])
///     .build();
/// let candidate =
///     CandidateAssignment::new(1, SupervisionRole::Supervision, DayOfWeek::Monday, Period::Morning);
///
/// assert!(engine.validate_assignment(&context, &candidate).is_valid());
/// ```
pub struct AssignmentValidationEngine {
    catalog: RuleCatalog,
    validators: Vec<Box<dyn ConstraintValidator>>,
}

impl AssignmentValidationEngine {
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog,
            validators: vec![
                Box::new(CapacityValidator),
                Box::new(ContiguityValidator),
                Box::new(SectorCompatibilityValidator),
                Box::new(RoleConflictValidator),
            ],
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Names of the validators in execution order.
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    pub fn validate_assignment(
        &self,
        context: &ValidationContext,
        candidate: &CandidateAssignment,
    ) -> ValidationResult {
        ValidationResult::merged(
            self.validators
                .iter()
                .map(|v| v.validate(&self.catalog, context, candidate)),
        )
    }

    /// One planning tip chosen from the supervisor's current load in the
    /// slot, independent of any verdict.
    pub fn get_suggestions(
        &self,
        context: &ValidationContext,
        day: DayOfWeek,
        period: Period,
    ) -> Vec<String> {
        let tip = match context.supervisor_assignments(day, period).count() {
            0 => "Commencez par les salles prioritaires ou complexes",
            1 => "Privilégiez une salle contiguë pour faciliter la supervision",
            _ => "Envisagez le mode supervision seule pour les salles supplémentaires",
        };
        vec![tip.to_string()]
    }
}

impl Default for AssignmentValidationEngine {
    fn default() -> Self {
        Self::new(RuleCatalog::default())
    }
}

impl fmt::Debug for AssignmentValidationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssignmentValidationEngine")
            .field("catalog", &self.catalog)
            .field("validators", &self.validator_names())
            .finish()
    }
}
