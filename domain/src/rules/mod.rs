//! Leave-rule data
//!
//! Inputs and outputs of the pluggable rule engine used for staffing and
//! leave policies (rest periods, weekly load). The engine itself sits behind
//! a port in the application layer; only the data it exchanges lives here.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A worked interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ShiftSlot {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &ShiftSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Rest between two non-overlapping shifts, whichever comes first.
    ///
    /// Returns `None` when the shifts overlap.
    pub fn rest_between(&self, other: &ShiftSlot) -> Option<TimeDelta> {
        if self.overlaps(other) {
            None
        } else if self.end <= other.start {
            Some(other.start - self.end)
        } else {
            Some(self.start - other.end)
        }
    }
}

/// Input of one rule evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContext {
    /// Shift being requested, if any
    pub proposed_shift: Option<ShiftSlot>,
    /// Shifts already held by the same person
    #[serde(default)]
    pub existing_shifts: Vec<ShiftSlot>,
}

impl RuleContext {
    pub fn new(proposed_shift: ShiftSlot) -> Self {
        Self {
            proposed_shift: Some(proposed_shift),
            existing_shifts: Vec::new(),
        }
    }

    pub fn with_existing(mut self, shifts: impl IntoIterator<Item = ShiftSlot>) -> Self {
        self.existing_shifts.extend(shifts);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleSeverity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSeverity::Error => write!(f, "error"),
            RuleSeverity::Warning => write!(f, "warning"),
            RuleSeverity::Info => write!(f, "info"),
        }
    }
}

/// Verdict of one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule_id: String,
    pub passed: bool,
    pub severity: RuleSeverity,
    pub message: String,
}

impl RuleOutcome {
    pub fn pass(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: true,
            severity: RuleSeverity::Info,
            message: String::new(),
        }
    }

    pub fn fail(
        rule_id: impl Into<String>,
        severity: RuleSeverity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed: false,
            severity,
            message: message.into(),
        }
    }
}
