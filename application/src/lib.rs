//! Application layer for bloc-supervision
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::OrchestratorParams;
pub use ports::{
    planning_store::{PlanningStore, StoreError, ensure_not_cancelled},
    rule_engine::{RuleEngine, RuleEngineError},
};
pub use use_cases::leave_rules::{LeaveRuleBridge, fold_outcomes};
pub use use_cases::planning_orchestrator::{
    CancelHandle, Lane, LaneOperation, PlanningError, PlanningOrchestrator, PlanningState,
};
