//! Validation context and its builder.
//!
//! A [`ValidationContext`] is a read-only snapshot assembled for a single
//! validation call: the candidate supervisor, every room and sector, and the
//! assignments already committed for the day being edited. Validators only
//! borrow it.

use crate::planning::{
    Assignment, BlocLayout, DayOfWeek, DayPlanning, Period, Room, RoomId, Sector, SectorId,
    SupervisionRole, SupervisorId,
};
use serde::{Deserialize, Serialize};

/// A proposed assignment for the context's supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateAssignment {
    pub room_id: RoomId,
    pub role: SupervisionRole,
    pub day: DayOfWeek,
    pub period: Period,
}

impl CandidateAssignment {
    pub fn new(room_id: impl Into<RoomId>, role: SupervisionRole, day: DayOfWeek, period: Period) -> Self {
        Self {
            room_id: room_id.into(),
            role,
            day,
            period,
        }
    }
}

impl From<&Assignment> for CandidateAssignment {
    fn from(assignment: &Assignment) -> Self {
        Self {
            room_id: assignment.room_id,
            role: assignment.role,
            day: assignment.day,
            period: assignment.period,
        }
    }
}

/// Read-only snapshot consumed by the constraint validators.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    supervisor_id: SupervisorId,
    rooms: Vec<Room>,
    sectors: Vec<Sector>,
    existing_assignments: Vec<Assignment>,
}

impl ValidationContext {
    pub fn builder(supervisor_id: impl Into<SupervisorId>) -> ValidationContextBuilder {
        ValidationContextBuilder::new(supervisor_id.into())
    }

    pub fn supervisor_id(&self) -> SupervisorId {
        self.supervisor_id
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn existing_assignments(&self) -> &[Assignment] {
        &self.existing_assignments
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    pub fn sector_of_room(&self, room: RoomId) -> Option<&Sector> {
        self.room(room).and_then(|r| self.sector(r.sector_id))
    }

    /// Assignments held by the context's supervisor in one slot.
    pub fn supervisor_assignments(
        &self,
        day: DayOfWeek,
        period: Period,
    ) -> impl Iterator<Item = &Assignment> {
        let supervisor = self.supervisor_id;
        self.existing_assignments
            .iter()
            .filter(move |a| a.supervisor_id == supervisor && a.is_in_slot(day, period))
    }

    /// Assignments of any supervisor in one room and slot.
    pub fn room_assignments(
        &self,
        room: RoomId,
        day: DayOfWeek,
        period: Period,
    ) -> impl Iterator<Item = &Assignment> {
        self.existing_assignments
            .iter()
            .filter(move |a| a.room_id == room && a.is_in_slot(day, period))
    }
}

/// Assembles a [`ValidationContext`].
///
/// # Example
///
/// ```
/// use supervision_domain::{Room, Sector, SectorType, ValidationContext};
///
/// let context = ValidationContext::builder(1)
///     .sectors([Sector::new(1, "Secteur A", SectorType::General)])
///     .rooms([Room::new(1, "Salle 1", 1)])
///     .build();
/// assert_eq!(context.rooms().len(), 1);
/// assert!(context.existing_assignments().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ValidationContextBuilder {
    supervisor_id: SupervisorId,
    rooms: Vec<Room>,
    sectors: Vec<Sector>,
    assignments: Vec<Assignment>,
}

impl ValidationContextBuilder {
    pub fn new(supervisor_id: SupervisorId) -> Self {
        Self {
            supervisor_id,
            rooms: Vec::new(),
            sectors: Vec::new(),
            assignments: Vec::new(),
        }
    }

    pub fn rooms(mut self, rooms: impl IntoIterator<Item = Room>) -> Self {
        self.rooms.extend(rooms);
        self
    }

    pub fn sectors(mut self, sectors: impl IntoIterator<Item = Sector>) -> Self {
        self.sectors.extend(sectors);
        self
    }

    /// Take every room and sector of a layout.
    pub fn layout(self, layout: &BlocLayout) -> Self {
        self.rooms(layout.rooms.iter().cloned())
            .sectors(layout.sectors.iter().cloned())
    }

    pub fn assignments(mut self, assignments: impl IntoIterator<Item = Assignment>) -> Self {
        self.assignments.extend(assignments);
        self
    }

    /// Take the committed assignments of a day plan.
    pub fn from_plan(self, plan: &DayPlanning) -> Self {
        self.assignments(plan.assignments.iter().copied())
    }

    pub fn build(self) -> ValidationContext {
        ValidationContext {
            supervisor_id: self.supervisor_id,
            rooms: self.rooms,
            sectors: self.sectors,
            existing_assignments: self.assignments,
        }
    }
}
