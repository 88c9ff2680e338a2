//! Planning Orchestrator use case
//!
//! Owns the day-plan state and drives the [`PlanningStore`] collaborator
//! through three independently cancellable lanes: load, validate and save.
//!
//! ```text
//! issue ──▶ begin(lane) ──▶ spawn task ──▶ collaborator call
//!   │         cancels the                       │
//!   │         lane's previous token              ▼
//!   │                                  token cancelled? ──yes──▶ discard
//!   ▼                                            │ no
//! LaneOperation { outcome, cancel }              ▼
//!                                      commit to PlanningState
//! ```
//!
//! Cancellation is cooperative: the collaborator receives the lane token and
//! is expected to abandon work, but a collaborator that ignores it simply has
//! its result discarded. The token is checked inside the state write lock
//! immediately before every state mutation.

mod lanes;
mod state;

pub use lanes::{CancelHandle, Lane, LaneOperation};
pub use state::{PlanningError, PlanningState};

use crate::config::OrchestratorParams;
use crate::ports::planning_store::{PlanningStore, StoreError};
use chrono::NaiveDate;
use lanes::{LaneRegistry, LaneTicket};
use std::future::Future;
use std::sync::Arc;
use supervision_domain::{DayPlanning, ValidationResult};
use tokio::sync::watch;
use tracing::{debug, info, warn};

struct Shared<S: ?Sized> {
    store: Arc<S>,
    lanes: LaneRegistry,
    state: watch::Sender<PlanningState>,
    params: OrchestratorParams,
}

impl<S: PlanningStore + ?Sized> Shared<S> {
    /// Register a new operation and reset the lane's error.
    fn begin(&self, lane: Lane) -> LaneTicket {
        let ticket = self.lanes.begin(lane);
        self.state.send_if_modified(|s| s.clear_lane_error(lane));
        debug!(lane = %lane, generation = ticket.generation, "Operation issued");
        ticket
    }

    /// Await a collaborator call, bounded by the configured timeout.
    async fn call<T>(
        &self,
        lane: Lane,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, PlanningError> {
        let result = match self.params.collaborator_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => return Err(PlanningError::Timeout { lane, timeout: limit }),
            },
            None => call.await,
        };
        result.map_err(|e| PlanningError::collaborator(lane, &e))
    }

    /// Apply `mutate` to the state if the ticket still owns its lane.
    ///
    /// The lane check runs inside the watch write lock, so the state lock is
    /// always taken before the registry lock and a superseding `begin` is
    /// ordered either wholly before or wholly after the mutation.
    fn publish(&self, ticket: &LaneTicket, mutate: impl FnOnce(&mut PlanningState)) -> bool {
        let mut committed = false;
        self.state.send_if_modified(|s| {
            committed = self.lanes.is_current(ticket);
            if committed {
                mutate(s);
            }
            committed
        });
        committed
    }

    /// Commit a lane outcome unless the ticket was cancelled or superseded,
    /// then release the lane.
    fn settle<T>(
        &self,
        ticket: &LaneTicket,
        result: Result<T, PlanningError>,
        apply: impl FnOnce(&mut PlanningState, &T),
    ) -> Option<T> {
        let lane = ticket.lane;
        let outcome = match result {
            Ok(value) => {
                if !self.publish(ticket, |s| apply(s, &value)) {
                    return self.discard(ticket);
                }
                Some(value)
            }
            Err(error) => {
                let message = error.to_string();
                if !self.publish(ticket, |s| s.record_error(lane, error)) {
                    return self.discard(ticket);
                }
                warn!(lane = %lane, error = %message, "Operation failed");
                None
            }
        };
        self.lanes.finish(ticket);
        debug!(lane = %lane, committed = outcome.is_some(), "Operation settled");
        outcome
    }

    /// Release the lane without touching the state.
    fn discard<T>(&self, ticket: &LaneTicket) -> Option<T> {
        self.lanes.finish(ticket);
        debug!(lane = %ticket.lane, generation = ticket.generation, "Discarding cancelled operation");
        None
    }
}

/// Coordinates load/validate/save of a day plan.
///
/// At most one operation per lane is live: issuing a new one cancels the
/// previous one in the same lane and leaves the other lanes untouched.
/// Dropping the orchestrator (or calling [`shutdown`](Self::shutdown))
/// cancels every lane.
///
/// Operations are spawned onto the current Tokio runtime.
pub struct PlanningOrchestrator<S: PlanningStore + ?Sized + 'static> {
    shared: Arc<Shared<S>>,
}

impl<S: PlanningStore + ?Sized + 'static> PlanningOrchestrator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_params(store, OrchestratorParams::default())
    }

    pub fn with_params(store: Arc<S>, params: OrchestratorParams) -> Self {
        let (state, _) = watch::channel(PlanningState::default());
        Self {
            shared: Arc::new(Shared {
                store,
                lanes: LaneRegistry::new(),
                state,
                params,
            }),
        }
    }

    pub fn params(&self) -> &OrchestratorParams {
        &self.shared.params
    }

    // ==================== Operations ====================

    /// Fetch the plan of a date and make it the current plan.
    ///
    /// A date without a plan clears the current plan and yields `None`.
    pub fn load_day_planning(&self, date: NaiveDate) -> LaneOperation<DayPlanning> {
        let ticket = self.shared.begin(Lane::Load);
        let cancel = ticket.cancel_handle();
        let shared = Arc::clone(&self.shared);

        LaneOperation::spawn(cancel, async move {
            info!(%date, "Loading day planning");
            let token = ticket.token.clone();
            let result = shared
                .call(Lane::Load, shared.store.get_day_planning(date, Some(token)))
                .await;
            shared
                .settle(&ticket, result, |s, plan| s.day_planning = plan.clone())
                .flatten()
        })
    }

    /// Validate a plan and publish the verdict.
    ///
    /// An invalid plan is not an error: the verdict is committed and returned
    /// like any other.
    pub fn validate_planning(&self, plan: DayPlanning) -> LaneOperation<ValidationResult> {
        let ticket = self.shared.begin(Lane::Validate);
        let cancel = ticket.cancel_handle();
        let shared = Arc::clone(&self.shared);

        LaneOperation::spawn(cancel, async move {
            info!(date = %plan.date, "Validating day planning");
            let token = ticket.token.clone();
            let result = shared
                .call(
                    Lane::Validate,
                    shared.store.validate_day_planning(&plan, Some(token)),
                )
                .await;
            shared.settle(&ticket, result, |s, verdict| {
                s.validation_result = Some(verdict.clone())
            })
        })
    }

    /// Save a plan, validating it first unless disabled in the parameters.
    pub fn save_day_planning(&self, plan: DayPlanning) -> LaneOperation<DayPlanning> {
        self.save_day_planning_with(plan, self.shared.params.validate_before_save)
    }

    /// Save a plan, optionally validating it first.
    ///
    /// With validation, the plan is checked through a sub-call carrying its
    /// own child token of the save token; its verdict is published as the
    /// current validation result. An invalid plan is never written: the save
    /// lane records [`PlanningError::InvalidPlan`] and the outcome is `None`.
    pub fn save_day_planning_with(
        &self,
        plan: DayPlanning,
        validate_before_save: bool,
    ) -> LaneOperation<DayPlanning> {
        let ticket = self.shared.begin(Lane::Save);
        let cancel = ticket.cancel_handle();
        let shared = Arc::clone(&self.shared);

        LaneOperation::spawn(cancel, async move {
            info!(date = %plan.date, validate_before_save, "Saving day planning");

            if validate_before_save {
                let sub_token = ticket.token.child_token();
                let verdict = shared
                    .call(
                        Lane::Save,
                        shared.store.validate_day_planning(&plan, Some(sub_token)),
                    )
                    .await;

                let verdict = match verdict {
                    Ok(verdict) => verdict,
                    Err(error) => return shared.settle::<DayPlanning>(&ticket, Err(error), |_, _| {}),
                };

                let valid = verdict.is_valid();
                let errors = verdict.errors.clone();
                if !shared.publish(&ticket, |s| s.validation_result = Some(verdict)) {
                    return shared.discard(&ticket);
                }

                if !valid {
                    info!(date = %plan.date, errors = errors.len(), "Plan rejected before save");
                    return shared.settle::<DayPlanning>(
                        &ticket,
                        Err(PlanningError::InvalidPlan { errors }),
                        |_, _| {},
                    );
                }
            }

            let token = ticket.token.clone();
            let result = shared
                .call(Lane::Save, shared.store.save_day_planning(&plan, Some(token)))
                .await;
            shared.settle(&ticket, result, |s, saved| s.day_planning = Some(saved.clone()))
        })
    }

    // ==================== State ====================

    pub fn clear_error(&self) {
        self.shared.state.send_if_modified(PlanningState::clear_errors);
    }

    pub fn clear_validation_result(&self) {
        self.shared
            .state
            .send_if_modified(|s| s.validation_result.take().is_some());
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PlanningState {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every committed change.
    pub fn subscribe(&self) -> watch::Receiver<PlanningState> {
        self.shared.state.subscribe()
    }

    pub fn day_planning(&self) -> Option<DayPlanning> {
        self.shared.state.borrow().day_planning.clone()
    }

    pub fn validation_result(&self) -> Option<ValidationResult> {
        self.shared.state.borrow().validation_result.clone()
    }

    /// The most recently recorded error across all lanes.
    pub fn error(&self) -> Option<PlanningError> {
        self.shared.state.borrow().error().cloned()
    }

    pub fn lane_error(&self, lane: Lane) -> Option<PlanningError> {
        self.shared.state.borrow().lane_error(lane).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.lanes.is_in_flight(Lane::Load)
    }

    pub fn is_validating(&self) -> bool {
        self.shared.lanes.is_in_flight(Lane::Validate)
    }

    pub fn is_saving(&self) -> bool {
        self.shared.lanes.is_in_flight(Lane::Save)
    }

    /// Cancel every lane. Later operations are cancelled on issue.
    pub fn shutdown(&self) {
        if !self.shared.lanes.is_shut_down() {
            info!("Shutting down planning orchestrator");
        }
        self.shared.lanes.cancel_all();
    }
}

impl<S: PlanningStore + ?Sized + 'static> Drop for PlanningOrchestrator<S> {
    fn drop(&mut self) {
        self.shared.lanes.cancel_all();
    }
}
