//! Leave-rule bridge use case
//!
//! Adapts a pluggable [`RuleEngine`] to the validation vocabulary used by
//! the rest of the planner: failed rule outcomes become errors or warnings
//! of a [`ValidationResult`].

use crate::ports::rule_engine::{RuleEngine, RuleEngineError};
use std::sync::{Mutex, PoisonError};
use supervision_domain::{RuleContext, RuleOutcome, RuleSeverity, ValidationResult};
use tracing::{debug, warn};

/// Evaluates staffing/leave rules through an injected engine.
///
/// The engine is initialised lazily on the first evaluation. A failed
/// initialisation is reported and retried on the next call.
pub struct LeaveRuleBridge<R: RuleEngine> {
    engine: R,
    initialized: Mutex<bool>,
}

impl<R: RuleEngine> LeaveRuleBridge<R> {
    pub fn new(engine: R) -> Self {
        Self {
            engine,
            initialized: Mutex::new(false),
        }
    }

    pub fn engine(&self) -> &R {
        &self.engine
    }

    fn ensure_initialized(&self) -> Result<(), RuleEngineError> {
        let mut initialized = self
            .initialized
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if !*initialized {
            self.engine.initialize().inspect_err(|e| {
                warn!(error = %e, "Rule engine initialization failed");
            })?;
            debug!("Rule engine initialized");
            *initialized = true;
        }
        Ok(())
    }

    /// Evaluate every rule and fold the failures into a verdict.
    pub fn evaluate(&self, context: &RuleContext) -> Result<ValidationResult, RuleEngineError> {
        self.ensure_initialized()?;
        let outcomes = self.engine.evaluate(context);
        debug!(rules = outcomes.len(), "Rules evaluated");
        Ok(fold_outcomes(&outcomes))
    }
}

/// Failed `Error` outcomes become errors; other failed outcomes become
/// warnings. Passed outcomes are dropped.
pub fn fold_outcomes(outcomes: &[RuleOutcome]) -> ValidationResult {
    let mut result = ValidationResult::valid();
    for outcome in outcomes.iter().filter(|o| !o.passed) {
        match outcome.severity {
            RuleSeverity::Error => result.push_error(outcome.message.clone()),
            RuleSeverity::Warning | RuleSeverity::Info => {
                result.push_warning(outcome.message.clone())
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct MockEngine {
        outcomes: Vec<RuleOutcome>,
        fail_init: AtomicBool,
        init_calls: AtomicUsize,
    }

    impl MockEngine {
        fn new(outcomes: Vec<RuleOutcome>) -> Self {
            Self {
                outcomes,
                fail_init: AtomicBool::new(false),
                init_calls: AtomicUsize::new(0),
            }
        }
    }

    impl RuleEngine for MockEngine {
        fn initialize(&self) -> Result<(), RuleEngineError> {
            self.init_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_init.load(Ordering::SeqCst) {
                return Err(RuleEngineError::Initialization("rules missing".to_string()));
            }
            Ok(())
        }

        fn evaluate(&self, _context: &RuleContext) -> Vec<RuleOutcome> {
            self.outcomes.clone()
        }
    }

    #[test]
    fn test_fold_outcomes_by_severity() {
        let result = fold_outcomes(&[
            RuleOutcome::pass("ok"),
            RuleOutcome::fail("rest", RuleSeverity::Error, "repos insuffisant"),
            RuleOutcome::fail("load", RuleSeverity::Warning, "charge élevée"),
            RuleOutcome::fail("note", RuleSeverity::Info, "information"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(result.errors, vec!["repos insuffisant"]);
        assert_eq!(result.warnings, vec!["charge élevée", "information"]);
    }

    #[test]
    fn test_all_passed_is_valid() {
        let bridge = LeaveRuleBridge::new(MockEngine::new(vec![RuleOutcome::pass("rest")]));
        let result = bridge.evaluate(&RuleContext::default()).unwrap();
        assert_eq!(result, ValidationResult::valid());
    }

    #[test]
    fn test_initializes_once() {
        let bridge = LeaveRuleBridge::new(MockEngine::new(vec![]));
        bridge.evaluate(&RuleContext::default()).unwrap();
        bridge.evaluate(&RuleContext::default()).unwrap();
        assert_eq!(bridge.engine().init_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_initialization_is_retried() {
        let engine = MockEngine::new(vec![]);
        engine.fail_init.store(true, Ordering::SeqCst);
        let bridge = LeaveRuleBridge::new(engine);

        assert_eq!(
            bridge.evaluate(&RuleContext::default()),
            Err(RuleEngineError::Initialization("rules missing".to_string()))
        );

        bridge.engine().fail_init.store(false, Ordering::SeqCst);
        assert!(bridge.evaluate(&RuleContext::default()).is_ok());
        assert_eq!(bridge.engine().init_calls.load(Ordering::SeqCst), 2);
    }
}
