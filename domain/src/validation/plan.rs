//! Whole-plan validation.

use super::context::{CandidateAssignment, ValidationContext};
use super::engine::AssignmentValidationEngine;
use super::result::ValidationResult;
use crate::planning::{Assignment, BlocLayout, DayPlanning};

/// Validate every assignment of a day plan against the ones before it.
///
/// Assignments are replayed in plan order: each one is checked as a
/// candidate against the assignments that precede it, so the plan is valid
/// if and only if every incremental insertion is valid. Errors and warnings
/// are prefixed with the supervisor and slot they concern; suggestions are
/// de-duplicated.
pub fn validate_day_plan(
    engine: &AssignmentValidationEngine,
    layout: &BlocLayout,
    plan: &DayPlanning,
) -> ValidationResult {
    let mut report = ValidationResult::valid();
    let plan_day = plan.day_of_week();
    let mut accepted: Vec<Assignment> = Vec::with_capacity(plan.assignments.len());

    for assignment in &plan.assignments {
        let label = format!(
            "Superviseur {} ({} {})",
            assignment.supervisor_id, assignment.day, assignment.period
        );

        if assignment.day != plan_day {
            report.push_warning(format!(
                "{label}: le jour ne correspond pas à la date du planning ({plan_day})"
            ));
        }

        match layout.room(assignment.room_id) {
            None => {
                report.push_error(format!(
                    "{label}: La salle {} n'existe pas",
                    assignment.room_id
                ));
            }
            Some(room) => {
                if layout.sector(room.sector_id).is_none() {
                    report.push_warning(format!(
                        "{label}: le secteur {} de la salle {} est introuvable",
                        room.sector_id, room.name
                    ));
                }

                let context = ValidationContext::builder(assignment.supervisor_id)
                    .layout(layout)
                    .assignments(accepted.iter().copied())
                    .build();
                let verdict =
                    engine.validate_assignment(&context, &CandidateAssignment::from(assignment));

                for error in verdict.errors {
                    report.push_error(format!("{label}: {error}"));
                }
                for warning in verdict.warnings {
                    report.push_warning(format!("{label}: {warning}"));
                }
                for suggestion in verdict.suggestions {
                    if !report.suggestions.contains(&suggestion) {
                        report.push_suggestion(suggestion);
                    }
                }
            }
        }

        accepted.push(*assignment);
    }

    report
}
