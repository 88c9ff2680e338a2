//! Assignment validation
//!
//! - [`context`] - the read-only snapshot and its builder
//! - [`validators`] - the four independent constraint checks
//! - [`engine`] - composition of the checks and planning tips
//! - [`plan`] - incremental validation of a whole day plan

pub mod context;
pub mod engine;
pub mod plan;
pub mod result;
pub mod validators;

pub use context::{CandidateAssignment, ValidationContext, ValidationContextBuilder};
pub use engine::AssignmentValidationEngine;
pub use plan::validate_day_plan;
pub use result::ValidationResult;
pub use validators::{
    CapacityValidator, ConstraintValidator, ContiguityValidator, RoleConflictValidator,
    SectorCompatibilityValidator,
};
