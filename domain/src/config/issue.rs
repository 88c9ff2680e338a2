//! Structured configuration issues.
//!
//! Configuration loaders never fail on questionable catalog values. They fall
//! back to the built-in [`RuleCatalog`](crate::RuleCatalog) default and report
//! a [`ConfigIssue`] so the caller can decide whether to abort.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default was substituted for the configured value.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A room limit was configured as zero.
    ZeroRoomLimit { field: String },
    /// The exceptional room limit is below the default room limit.
    ExceptionalBelowDefault { default_max: u32, exceptional_max: u32 },
    /// A sector type name could not be parsed.
    UnknownSectorType { value: String },
    /// The minimum rest duration was configured as zero.
    ZeroRestDuration,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    /// True if any issue in the slice is fatal.
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
