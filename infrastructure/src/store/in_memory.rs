//! In-memory planning store

use super::PlanChecker;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use supervision_application::{PlanningStore, StoreError, ensure_not_cancelled};
use supervision_domain::{AssignmentValidationEngine, BlocLayout, DayPlanning, ValidationResult};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Planning store keeping one plan per date in memory.
///
/// Useful for tests and short-lived sessions. The cancellation token is
/// checked before each step; a cancelled save leaves the map untouched.
#[derive(Debug)]
pub struct InMemoryPlanningStore {
    checker: PlanChecker,
    plannings: RwLock<HashMap<NaiveDate, DayPlanning>>,
}

impl InMemoryPlanningStore {
    pub fn new(engine: AssignmentValidationEngine, layout: BlocLayout) -> Self {
        Self {
            checker: PlanChecker::new(engine, layout),
            plannings: RwLock::new(HashMap::new()),
        }
    }

    /// Seed the store with existing plans, bypassing validation.
    pub fn with_plannings(mut self, plannings: impl IntoIterator<Item = DayPlanning>) -> Self {
        self.plannings
            .get_mut()
            .extend(plannings.into_iter().map(|p| (p.date, p)));
        self
    }

    pub fn layout(&self) -> &BlocLayout {
        self.checker.layout()
    }

    pub async fn len(&self) -> usize {
        self.plannings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.plannings.read().await.is_empty()
    }
}

#[async_trait]
impl PlanningStore for InMemoryPlanningStore {
    async fn get_day_planning(
        &self,
        date: NaiveDate,
        cancellation: Option<CancellationToken>,
    ) -> Result<Option<DayPlanning>, StoreError> {
        ensure_not_cancelled(cancellation.as_ref())?;
        let plan = self.plannings.read().await.get(&date).cloned();
        debug!(%date, found = plan.is_some(), "Planning looked up");
        Ok(plan)
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

        let mut plannings = self.plannings.write().await;
        ensure_not_cancelled(cancellation.as_ref())?;
        plannings.insert(stored.date, stored.clone());
        debug!(
            date = %stored.date,
            status = ?stored.status,
            errors = verdict.errors.len(),
            "Planning saved"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use std::sync::Arc;
    use supervision_application::{Lane, PlanningOrchestrator};
    use supervision_domain::PlanningStatus;

    fn store() -> InMemoryPlanningStore {
        InMemoryPlanningStore::new(AssignmentValidationEngine::default(), layout())
    }

    // ==================== Port ====================

    #[tokio::test]
    async fn test_missing_date_is_none() {
        let store = store();
        assert_eq!(store.get_day_planning(monday(), None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let store = store();
        let saved = store.save_day_planning(&valid_plan(), None).await.unwrap();
        assert_eq!(saved.status, PlanningStatus::Validated);

        let loaded = store.get_day_planning(monday(), None).await.unwrap();
        assert_eq!(loaded, Some(saved));
    }

    #[tokio::test]
    async fn test_save_invalid_plan_stores_draft() {
        let store = store();
        let saved = store
            .save_day_planning(&overloaded_plan(), None)
            .await
            .unwrap();
        assert_eq!(saved.status, PlanningStatus::Draft);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_validate_reports_capacity_error() {
        let store = store();
        let verdict = store
            .validate_day_planning(&overloaded_plan(), None)
            .await
            .unwrap();
        assert!(!verdict.is_valid());
        assert!(verdict.errors[0].starts_with("Superviseur 1 (MONDAY MORNING)"));
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let store = store();
        let token = CancellationToken::new();
        token.cancel();

        let err = store
            .save_day_planning(&valid_plan(), Some(token.clone()))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(store.is_empty().await);

        let err = store
            .get_day_planning(monday(), Some(token))
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_seeded_plannings() {
        let store = store().with_plannings([valid_plan()]);
        assert_eq!(
            store.get_day_planning(monday(), None).await.unwrap(),
            Some(valid_plan())
        );
    }

    // ==================== Orchestrator ====================

    #[tokio::test]
    async fn test_orchestrator_load_validate_save() {
        let store = Arc::new(store().with_plannings([valid_plan()]));
        let orchestrator = PlanningOrchestrator::new(Arc::clone(&store));

        let loaded = orchestrator.load_day_planning(monday()).await;
        assert_eq!(loaded, Some(valid_plan()));
        assert_eq!(orchestrator.day_planning(), Some(valid_plan()));

        let verdict = orchestrator.validate_planning(valid_plan()).await;
        assert!(verdict.is_some_and(|v| v.is_valid()));

        let saved = orchestrator.save_day_planning(valid_plan()).await.unwrap();
        assert_eq!(saved.status, PlanningStatus::Validated);
        assert_eq!(orchestrator.day_planning(), Some(saved));
        assert!(orchestrator.error().is_none());
    }

    #[tokio::test]
    async fn test_orchestrator_refuses_invalid_plan() {
        let store = Arc::new(store());
        let orchestrator = PlanningOrchestrator::new(Arc::clone(&store));

        let saved = orchestrator.save_day_planning(overloaded_plan()).await;
        assert!(saved.is_none());
        assert!(store.is_empty().await);

        let error = orchestrator.lane_error(Lane::Save).unwrap();
        assert!(error.is_validation_failure());
        assert!(orchestrator.validation_result().is_some_and(|v| !v.is_valid()));
    }
}
