//! Domain layer for bloc-supervision
//!
//! This crate contains the operating-room supervision model and the pure
//! validation logic applied to it. It has no dependencies on async runtimes,
//! storage or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Rule Catalog
//!
//! A single [`RuleCatalog`] value carries every global default (room limits,
//! sector compatibility, contiguity, rest durations). Sectors may override the
//! room-level defaults with their own [`SupervisionRules`].
//!
//! ## Assignment validation
//!
//! A candidate (supervisor, room, day, period, role) is checked against a
//! read-only [`ValidationContext`] by four independent constraint validators:
//!
//! - **Capacity**: rooms per supervisor and slot
//! - **Contiguity**: rooms supervised together must be numbered adjacently
//! - **Sector compatibility**: sector types that may be supervised together
//! - **Role conflict**: anesthesia is exclusive per supervisor and per room
//!
//! The [`AssignmentValidationEngine`] merges their verdicts in that order.

pub mod catalog;
pub mod config;
pub mod core;
pub mod planning;
pub mod rules;
pub mod validation;

// Re-export commonly used types
pub use catalog::{RuleCatalog, SectorType, SupervisionRules};
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::error::DomainError;
pub use planning::{
    Assignment, BlocLayout, DayOfWeek, DayPlanning, Period, PlanningStatus, Room, RoomId, Sector,
    SectorId, SupervisionRole, SupervisorId,
};
pub use rules::{RuleContext, RuleOutcome, RuleSeverity, ShiftSlot};
pub use validation::{
    AssignmentValidationEngine, CandidateAssignment, ConstraintValidator, ValidationContext,
    ValidationContextBuilder, ValidationResult, validate_day_plan,
};
