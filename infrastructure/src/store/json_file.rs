//! JSON file planning store
//!
//! Persists one `YYYY-MM-DD.json` document per planned date:
//!
//! ```text
//! <data_dir>/
//! ├── 2024-01-15.json
//! └── 2024-01-16.json
//! ```

use super::PlanChecker;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use supervision_application::{PlanningStore, StoreError, ensure_not_cancelled};
use supervision_domain::{AssignmentValidationEngine, BlocLayout, DayPlanning, ValidationResult};
use tokio::fs;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Planning store backed by a directory of JSON files.
///
/// Writes go to a temporary file renamed into place, so a cancelled or
/// failed save never leaves a truncated plan behind.
#[derive(Debug)]
pub struct JsonFilePlanningStore {
    dir: PathBuf,
    checker: PlanChecker,
}

impl JsonFilePlanningStore {
    pub fn new(
        dir: impl Into<PathBuf>,
        engine: AssignmentValidationEngine,
        layout: BlocLayout,
    ) -> Self {
        Self {
            dir: dir.into(),
            checker: PlanChecker::new(engine, layout),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the plan of a date.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.json", date.format("%Y-%m-%d")))
    }
}

#[async_trait]
impl PlanningStore for JsonFilePlanningStore {
    async fn get_day_planning(
        &self,
        date: NaiveDate,
        cancellation: Option<CancellationToken>,
    ) -> Result<Option<DayPlanning>, StoreError> {
        ensure_not_cancelled(cancellation.as_ref())?;
        let path = self.path_for(date);

        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(%date, path = %path.display(), "No planning file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        ensure_not_cancelled(cancellation.as_ref())?;

        let plan: DayPlanning = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?;
        if plan.date != date {
            return Err(StoreError::Corrupt(format!(
                "{}: holds the plan of {}",
                path.display(),
                plan.date
            )));
        }

        debug!(%date, assignments = plan.assignments.len(), "Planning loaded");
        Ok(Some(plan))
    }

    async fn validate_day_planning(
        &self,
        plan: &DayPlanning,
        cancellation: Option<CancellationToken>,
    ) -> Result<ValidationResult, StoreError> {
        ensure_not_cancelled(cancellation.as_ref())?;
        Ok(self.checker.check(plan))
    }

    async fn save_day_planning(
        &self,
        plan: &DayPlanning,
        cancellation: Option<CancellationToken>,
    ) -> Result<DayPlanning, StoreError> {
        ensure_not_cancelled(cancellation.as_ref())?;
        let (stored, verdict) = self.checker.stamp(plan);
        let json = serde_json::to_vec_pretty(&stored)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(stored.date);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;

        if let Err(e) = ensure_not_cancelled(cancellation.as_ref()) {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }
        fs::rename(&tmp, &path).await?;

        info!(
            date = %stored.date,
            status = ?stored.status,
            errors = verdict.errors.len(),
            path = %path.display(),
            "Planning saved"
        );
        Ok(stored)
    }
}
