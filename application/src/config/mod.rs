//! Application-level configuration.
//!
//! - [`OrchestratorParams`] - collaborator timeout and save policy

pub mod orchestrator_params;

pub use orchestrator_params::OrchestratorParams;
