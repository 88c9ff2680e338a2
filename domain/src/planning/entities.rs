//! Planning entities: committed assignments and the day plan that owns them.

use super::value_objects::{DayOfWeek, Period, RoomId, SupervisionRole, SupervisorId};
use crate::core::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A committed (supervisor, room, day, period, role) fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub supervisor_id: SupervisorId,
    pub room_id: RoomId,
    pub day: DayOfWeek,
    pub period: Period,
    pub role: SupervisionRole,
}

impl Assignment {
    pub fn new(
        supervisor_id: impl Into<SupervisorId>,
        room_id: impl Into<RoomId>,
        day: DayOfWeek,
        period: Period,
        role: SupervisionRole,
    ) -> Self {
        Self {
            supervisor_id: supervisor_id.into(),
            room_id: room_id.into(),
            day,
            period,
            role,
        }
    }

    /// True if this assignment occupies the given slot.
    pub fn is_in_slot(&self, day: DayOfWeek, period: Period) -> bool {
        self.day == day && self.period == period
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "supervisor {} / room {} / {} {} / {}",
            self.supervisor_id, self.room_id, self.day, self.period, self.role
        )
    }
}

/// Lifecycle status of a day plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanningStatus {
    #[default]
    Draft,
    /// Saved after passing whole-plan validation.
    Validated,
    Published,
}

/// The operating-room plan of one date.
///
/// Loaded from storage, edited through [`add_assignment`](Self::add_assignment)
/// and [`remove_assignment`](Self::remove_assignment), then submitted to the
/// orchestrator's validate/save pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlanning {
    pub date: NaiveDate,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub status: PlanningStatus,
}

impl DayPlanning {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            assignments: Vec::new(),
            status: PlanningStatus::Draft,
        }
    }

    pub fn with_assignments(mut self, assignments: impl IntoIterator<Item = Assignment>) -> Self {
        self.assignments.extend(assignments);
        self
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.date.weekday().into()
    }

    /// Add an assignment, rejecting exact duplicates.
    ///
    /// Constraint checks are not run here; callers validate the candidate
    /// with the [`AssignmentValidationEngine`](crate::AssignmentValidationEngine) first.
    pub fn add_assignment(&mut self, assignment: Assignment) -> Result<(), DomainError> {
        if self.assignments.contains(&assignment) {
            return Err(DomainError::DuplicateAssignment(assignment.to_string()));
        }
        self.assignments.push(assignment);
        self.status = PlanningStatus::Draft;
        Ok(())
    }

    pub fn remove_assignment(&mut self, assignment: &Assignment) -> Result<(), DomainError> {
        let index = self
            .assignments
            .iter()
            .position(|a| a == assignment)
            .ok_or_else(|| DomainError::AssignmentNotFound(assignment.to_string()))?;
        self.assignments.remove(index);
        self.status = PlanningStatus::Draft;
        Ok(())
    }

    pub fn assignments_for(&self, day: DayOfWeek, period: Period) -> impl Iterator<Item = &Assignment> {
        self.assignments
            .iter()
            .filter(move |a| a.is_in_slot(day, period))
    }
}
