//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Constraint violations are not errors: they are reported through
/// [`ValidationResult`](crate::ValidationResult). These variants cover
/// malformed input and invalid plan edits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown sector type: {0}")]
    UnknownSectorType(String),

    #[error("Unknown period: {0}")]
    UnknownPeriod(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown day of week: {0}")]
    UnknownDay(String),

    #[error("Assignment already present in plan: {0}")]
    DuplicateAssignment(String),

    #[error("Assignment not found in plan: {0}")]
    AssignmentNotFound(String),
}

impl DomainError {
    /// Check if this error comes from parsing an enumerated value
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownSectorType(_)
                | DomainError::UnknownPeriod(_)
                | DomainError::UnknownRole(_)
                | DomainError::UnknownDay(_)
        )
    }
}
