//! Orchestrator parameters.
//!
//! [`OrchestratorParams`] groups the static parameters that control how the
//! [`PlanningOrchestrator`](crate::use_cases::planning_orchestrator::PlanningOrchestrator)
//! drives its collaborator. These are application-layer concerns, not
//! domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Planning orchestrator control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchestratorParams {
    /// Upper bound on a single collaborator call. `None` waits forever.
    pub collaborator_timeout: Option<Duration>,
    /// Whether `save_day_planning` validates before writing.
    pub validate_before_save: bool,
}

impl Default for OrchestratorParams {
    fn default() -> Self {
        Self {
            collaborator_timeout: Some(Duration::from_secs(30)),
            validate_before_save: true,
        }
    }
}

impl OrchestratorParams {
    // ==================== Builder Methods ====================

    pub fn with_collaborator_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.collaborator_timeout = timeout;
        self
    }

    pub fn with_validate_before_save(mut self, validate: bool) -> Self {
        self.validate_before_save = validate;
        self
    }
}
