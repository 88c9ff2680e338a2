//! Observable orchestrator state and lane errors.

use super::lanes::Lane;
use crate::ports::planning_store::StoreError;
use supervision_domain::{DayPlanning, ValidationResult};
use std::time::Duration;
use thiserror::Error;

/// Failure recorded by a lane.
///
/// Invalid plans and collaborator failures are distinct variants so callers
/// can render them differently. Cancellation is never recorded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    #[error("Plan contains errors ({} error(s))", .errors.len())]
    InvalidPlan { errors: Vec<String> },

    #[error("{lane} failed: {message}")]
    Collaborator { lane: Lane, message: String },

    #[error("{lane} timed out after {timeout:?}")]
    Timeout { lane: Lane, timeout: Duration },
}

impl PlanningError {
    pub(crate) fn collaborator(lane: Lane, error: &StoreError) -> Self {
        PlanningError::Collaborator {
            lane,
            message: error.to_string(),
        }
    }

    /// True if the plan itself was rejected by validation
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, PlanningError::InvalidPlan { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PlanningError::Timeout { .. })
    }
}

/// Shared state owned by the orchestrator.
///
/// Mutated only by the lane that owns each field, and only after that lane
/// confirmed its token was not cancelled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanningState {
    pub day_planning: Option<DayPlanning>,
    pub validation_result: Option<ValidationResult>,
    /// Per-lane error tagged with its recording sequence number
    lane_errors: [Option<(u64, PlanningError)>; 3],
    next_sequence: u64,
}

impl PlanningState {
    pub fn lane_error(&self, lane: Lane) -> Option<&PlanningError> {
        self.lane_errors[lane.index()].as_ref().map(|(_, e)| e)
    }

    /// The most recently recorded error across all lanes.
    pub fn error(&self) -> Option<&PlanningError> {
        self.lane_errors
            .iter()
            .flatten()
            .max_by_key(|(sequence, _)| *sequence)
            .map(|(_, e)| e)
    }

    pub(crate) fn record_error(&mut self, lane: Lane, error: PlanningError) {
        self.next_sequence += 1;
        self.lane_errors[lane.index()] = Some((self.next_sequence, error));
    }

    /// Returns true if anything changed.
    pub(crate) fn clear_lane_error(&mut self, lane: Lane) -> bool {
        self.lane_errors[lane.index()].take().is_some()
    }

    pub(crate) fn clear_errors(&mut self) -> bool {
        let changed = self.lane_errors.iter().any(Option::is_some);
        self.lane_errors = [None, None, None];
        changed
    }
}
