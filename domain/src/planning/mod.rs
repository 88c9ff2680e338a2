//! Operating-room planning model
//!
//! - [`layout`] - sectors, rooms and the theatre layout
//! - [`entities`] - committed assignments and day plans
//! - [`value_objects`] - identifiers, days, periods and roles

pub mod entities;
pub mod layout;
pub mod value_objects;

pub use entities::{Assignment, DayPlanning, PlanningStatus};
pub use layout::{BlocLayout, Room, Sector};
pub use value_objects::{DayOfWeek, Period, RoomId, SectorId, SupervisionRole, SupervisorId};
