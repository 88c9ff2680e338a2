//! Operation lanes and their cancellation tokens.
//!
//! Each [`Lane`] holds at most one live token. Issuing an operation cancels
//! the lane's previous token and installs a fresh child of the orchestrator's
//! root token, so cancelling the root tears every lane down at once.

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// One of the three independently cancellable operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Load,
    Validate,
    Save,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Load, Lane::Validate, Lane::Save];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Load => "load",
            Lane::Validate => "validate",
            Lane::Save => "save",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Lane::Load => 0,
            Lane::Validate => 1,
            Lane::Save => 2,
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-side handle that aborts one issued operation.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    lane: Lane,
    token: CancellationToken,
}

impl CancelHandle {
    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Request cancellation. The outcome of the operation is discarded.
    pub fn cancel(&self) {
        if !self.token.is_cancelled() {
            debug!(lane = %self.lane, "Operation cancelled by caller");
        }
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// An issued lane operation: its eventual outcome plus a cancel handle.
///
/// The work runs on its own task whether or not this value is awaited.
/// Awaiting yields `Some` only when the result was committed to the
/// orchestrator state; failed, invalid, superseded and cancelled operations
/// yield `None`.
pub struct LaneOperation<T> {
    cancel: CancelHandle,
    outcome: BoxFuture<'static, Option<T>>,
}

impl<T: Send + 'static> LaneOperation<T> {
    pub(crate) fn spawn<F>(cancel: CancelHandle, task: F) -> Self
    where
        F: Future<Output = Option<T>> + Send + 'static,
    {
        let lane = cancel.lane;
        let handle = tokio::spawn(task);
        let outcome = async move {
            handle.await.unwrap_or_else(|e| {
                warn!(lane = %lane, error = %e, "Lane task aborted");
                None
            })
        }
        .boxed();
        Self { cancel, outcome }
    }
}

impl<T> LaneOperation<T> {
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Split into the outcome future and the cancel handle.
    pub fn into_parts(self) -> (BoxFuture<'static, Option<T>>, CancelHandle) {
        (self.outcome, self.cancel)
    }
}

impl<T> Future for LaneOperation<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.outcome.poll_unpin(cx)
    }
}

impl<T> fmt::Debug for LaneOperation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaneOperation")
            .field("cancel", &self.cancel)
            .finish_non_exhaustive()
    }
}

/// Identity of one issued operation.
#[derive(Debug, Clone)]
pub(crate) struct LaneTicket {
    pub lane: Lane,
    pub generation: u64,
    pub token: CancellationToken,
}

impl LaneTicket {
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            lane: self.lane,
            token: self.token.clone(),
        }
    }
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    token: CancellationToken,
}

/// Live token per lane.
#[derive(Debug)]
pub(crate) struct LaneRegistry {
    root: CancellationToken,
    slots: Mutex<[Option<Slot>; 3]>,
    next_generation: AtomicU64,
}

impl LaneRegistry {
    pub fn new() -> Self {
        Self {
            root: CancellationToken::new(),
            slots: Mutex::new([None, None, None]),
            next_generation: AtomicU64::new(1),
        }
    }

    fn slots(&self) -> MutexGuard<'_, [Option<Slot>; 3]> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cancel whatever runs in the lane and register a new operation.
    pub fn begin(&self, lane: Lane) -> LaneTicket {
        let mut slots = self.slots();
        if let Some(previous) = slots[lane.index()].take()
            && !previous.token.is_cancelled()
        {
            debug!(lane = %lane, generation = previous.generation, "Superseding in-flight operation");
            previous.token.cancel();
        }

        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        let token = self.root.child_token();
        slots[lane.index()] = Some(Slot {
            generation,
            token: token.clone(),
        });

        LaneTicket {
            lane,
            generation,
            token,
        }
    }

    /// True while the lane's latest operation runs and was not cancelled.
    pub fn is_in_flight(&self, lane: Lane) -> bool {
        self.slots()[lane.index()]
            .as_ref()
            .is_some_and(|slot| !slot.token.is_cancelled())
    }

    /// True if the ticket is still the lane's live, uncancelled operation.
    ///
    /// The registry lock is released before returning. Callers that must
    /// mutate state atomically with this check make it while holding the
    /// state lock, never the other way round.
    pub fn is_current(&self, ticket: &LaneTicket) -> bool {
        let slots = self.slots();
        let current = slots[ticket.lane.index()]
            .as_ref()
            .is_some_and(|slot| slot.generation == ticket.generation);
        current && !ticket.token.is_cancelled()
    }

    /// Release the lane if the ticket still owns it.
    pub fn finish(&self, ticket: &LaneTicket) {
        let mut slots = self.slots();
        let slot = &mut slots[ticket.lane.index()];
        if slot
            .as_ref()
            .is_some_and(|s| s.generation == ticket.generation)
        {
            *slot = None;
        }
    }

    /// Cancel every lane, now and for any later operation.
    pub fn cancel_all(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_supersedes_previous() {
        let registry = LaneRegistry::new();
        let first = registry.begin(Lane::Load);
        let second = registry.begin(Lane::Load);

        assert!(first.token.is_cancelled());
        assert!(!second.token.is_cancelled());
        assert!(registry.is_in_flight(Lane::Load));
    }

    #[test]
    fn test_lanes_are_independent() {
        let registry = LaneRegistry::new();
        let load = registry.begin(Lane::Load);
        let _validate = registry.begin(Lane::Validate);
        let _save = registry.begin(Lane::Save);

        registry.begin(Lane::Validate);
        assert!(!load.token.is_cancelled());
        assert!(registry.is_in_flight(Lane::Save));
    }

    #[test]
    fn test_stale_ticket_is_not_current() {
        let registry = LaneRegistry::new();
        let first = registry.begin(Lane::Save);
        let second = registry.begin(Lane::Save);

        assert!(!registry.is_current(&first));
        assert!(registry.is_current(&second));
    }

    #[test]
    fn test_cancelled_ticket_is_not_current() {
        let registry = LaneRegistry::new();
        let ticket = registry.begin(Lane::Load);
        ticket.cancel_handle().cancel();

        assert!(!registry.is_in_flight(Lane::Load));
        assert!(!registry.is_current(&ticket));
    }

    #[test]
    fn test_finish_ignores_stale_ticket() {
        let registry = LaneRegistry::new();
        let first = registry.begin(Lane::Load);
        let _second = registry.begin(Lane::Load);

        registry.finish(&first);
        assert!(registry.is_in_flight(Lane::Load));
    }

    #[test]
    fn test_cancel_all_reaches_every_lane() {
        let registry = LaneRegistry::new();
        let tickets: Vec<_> = Lane::ALL.iter().map(|l| registry.begin(*l)).collect();

        registry.cancel_all();
        assert!(tickets.iter().all(|t| t.token.is_cancelled()));
        assert!(registry.is_shut_down());
        assert!(registry.begin(Lane::Load).token.is_cancelled());
    }
}
