//! Planning store port
//!
//! Defines the storage/service collaborator the planning orchestrator talks
//! to. Every operation accepts an optional cancellation token; adapters are
//! expected to observe it and abandon work promptly.

use async_trait::async_trait;
use chrono::NaiveDate;
use supervision_domain::{DayPlanning, ValidationResult};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors that can occur in planning store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt planning data: {0}")]
    Corrupt(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl StoreError {
    /// Check if this error is a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, StoreError::Cancelled)
    }
}

/// Storage collaborator for day plans
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait PlanningStore: Send + Sync {
    /// Fetch the plan of a date, `None` if none exists
    async fn get_day_planning(
        &self,
        date: NaiveDate,
        cancellation: Option<CancellationToken>,
    ) -> Result<Option<DayPlanning>, StoreError>;

    /// Run whole-plan validation
    async fn validate_day_planning(
        &self,
        plan: &DayPlanning,
        cancellation: Option<CancellationToken>,
    ) -> Result<ValidationResult, StoreError>;

    /// Persist a plan and return the stored version
    async fn save_day_planning(
        &self,
        plan: &DayPlanning,
        cancellation: Option<CancellationToken>,
    ) -> Result<DayPlanning, StoreError>;
}

/// Return `Err(StoreError::Cancelled)` if the token exists and is cancelled.
pub fn ensure_not_cancelled(token: Option<&CancellationToken>) -> Result<(), StoreError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(StoreError::Cancelled);
    }
    Ok(())
}
