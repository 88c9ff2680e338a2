//! Rule engine port
//!
//! Narrow contract for the declarative staffing/leave rule engine. The
//! engine is initialised once, then evaluated against a [`RuleContext`].

use supervision_domain::{RuleContext, RuleOutcome};
use thiserror::Error;

/// Errors reported by a rule engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleEngineError {
    #[error("Rule engine initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid rule configuration: {0}")]
    InvalidConfig(String),
}

/// Pluggable rule engine
pub trait RuleEngine: Send + Sync {
    /// Prepare the engine. Called once before the first evaluation.
    fn initialize(&self) -> Result<(), RuleEngineError>;

    /// Evaluate every rule against the context.
    fn evaluate(&self, context: &RuleContext) -> Vec<RuleOutcome>;
}
