//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod leave_rules;
pub mod planning_orchestrator;
