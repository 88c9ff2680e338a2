//! Planning store adapters
//!
//! Implementations of the application-layer [`PlanningStore`] port. Both
//! adapters validate plans with whole-plan replay against the theatre layout
//! and stamp the plan status on save.
//!
//! [`PlanningStore`]: supervision_application::PlanningStore

mod in_memory;
mod json_file;

pub use in_memory::InMemoryPlanningStore;
pub use json_file::JsonFilePlanningStore;

use supervision_domain::{
    AssignmentValidationEngine, BlocLayout, DayPlanning, PlanningStatus, ValidationResult,
    validate_day_plan,
};

/// Validation engine plus the layout plans are checked against.
#[derive(Debug)]
pub(crate) struct PlanChecker {
    engine: AssignmentValidationEngine,
    layout: BlocLayout,
}

impl PlanChecker {
    pub fn new(engine: AssignmentValidationEngine, layout: BlocLayout) -> Self {
        Self { engine, layout }
    }

    pub fn layout(&self) -> &BlocLayout {
        &self.layout
    }

    pub fn check(&self, plan: &DayPlanning) -> ValidationResult {
        validate_day_plan(&self.engine, &self.layout, plan)
    }

    /// The plan as it will be stored: `Validated` when it passes, `Draft`
    /// otherwise. Valid published plans stay published.
    pub fn stamp(&self, plan: &DayPlanning) -> (DayPlanning, ValidationResult) {
        let verdict = self.check(plan);
        let mut stored = plan.clone();
        stored.status = match (verdict.is_valid(), plan.status) {
            (true, PlanningStatus::Published) => PlanningStatus::Published,
            (true, _) => PlanningStatus::Validated,
            (false, _) => PlanningStatus::Draft,
        };
        (stored, verdict)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;
    use supervision_domain::{
        Assignment, BlocLayout, DayOfWeek, DayPlanning, Period, Room, Sector, SectorType,
        SupervisionRole,
    };

    /// Monday 15 January 2024.
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    pub fn layout() -> BlocLayout {
        BlocLayout::new(
            vec![Sector::new(1, "Bloc central", SectorType::General)],
            vec![
                Room::new(1, "Salle 1", 1),
                Room::new(2, "Salle 2", 1),
                Room::new(3, "Salle 3", 1),
            ],
        )
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

    pub fn valid_plan() -> DayPlanning {
        DayPlanning::new(monday()).with_assignments([supervision(1, 1), supervision(1, 2)])
    }

    /// Three rooms for one supervisor exceeds the default limit.
    pub fn overloaded_plan() -> DayPlanning {
        valid_plan().with_assignments([supervision(1, 3)])
    }
}
