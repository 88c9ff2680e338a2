//! Rule engine backed by the rule catalog
//!
//! Implements the two staffing rules whose parameters live in the
//! [`RuleCatalog`]: minimum rest between shifts and maximum shifts per ISO
//! week.

use chrono::Datelike;
use supervision_application::{RuleEngine, RuleEngineError};
use supervision_domain::{RuleCatalog, RuleContext, RuleOutcome, RuleSeverity, ShiftSlot};
use tracing::debug;

pub const MIN_REST_RULE: &str = "min-rest-period";
pub const WEEKLY_MAX_RULE: &str = "max-shifts-per-week";

/// Rest and weekly-load rules parameterised by a [`RuleCatalog`].
///
/// Insufficient rest is an error; exceeding the weekly maximum is a warning
/// the planner may override.
#[derive(Debug, Clone)]
pub struct CatalogRuleEngine {
    minimum_rest_hours: u32,
    max_shifts_per_week: u32,
}

impl CatalogRuleEngine {
    pub fn new(catalog: &RuleCatalog) -> Self {
        Self {
            minimum_rest_hours: catalog.minimum_rest_hours,
            max_shifts_per_week: catalog.max_shifts_per_week,
        }
    }

    fn evaluate_rest(&self, proposed: &ShiftSlot, existing: &[ShiftSlot]) -> RuleOutcome {
        let min = self.minimum_rest_hours;
        for shift in existing {
            let Some(rest) = proposed.rest_between(shift) else {
                return RuleOutcome::fail(
                    MIN_REST_RULE,
                    RuleSeverity::Error,
                    format!(
                        "Chevauchement avec un service existant ({} - {})",
                        shift.start.format("%Y-%m-%d %H:%M"),
                        shift.end.format("%Y-%m-%d %H:%M")
                    ),
                );
            };
            let hours = rest.num_hours();
            if hours < i64::from(min) {
                return RuleOutcome::fail(
                    MIN_REST_RULE,
                    RuleSeverity::Error,
                    format!("Période de repos insuffisante ({hours}h < {min}h requis)"),
                );
            }
        }
        RuleOutcome::pass(MIN_REST_RULE)
    }

    fn evaluate_weekly(&self, proposed: &ShiftSlot, existing: &[ShiftSlot]) -> RuleOutcome {
        let week = proposed.start.iso_week();
        let in_week = existing
            .iter()
            .filter(|s| s.start.iso_week() == week)
            .count();

        if in_week >= self.max_shifts_per_week as usize {
            return RuleOutcome::fail(
                WEEKLY_MAX_RULE,
                RuleSeverity::Warning,
                format!(
                    "Maximum de {} gardes par semaine dépassé (semaine {} de {})",
                    self.max_shifts_per_week,
                    week.week(),
                    week.year()
                ),
            );
        }
        RuleOutcome::pass(WEEKLY_MAX_RULE)
    }
}

impl RuleEngine for CatalogRuleEngine {
    fn initialize(&self) -> Result<(), RuleEngineError> {
        if self.minimum_rest_hours == 0 {
            return Err(RuleEngineError::InvalidConfig(
                "minimum_rest_hours must be at least 1".to_string(),
            ));
        }
        if self.max_shifts_per_week == 0 {
            return Err(RuleEngineError::InvalidConfig(
                "max_shifts_per_week must be at least 1".to_string(),
            ));
        }
        debug!(
            minimum_rest_hours = self.minimum_rest_hours,
            max_shifts_per_week = self.max_shifts_per_week,
            "Catalog rule engine ready"
        );
        Ok(())
    }

    fn evaluate(&self, context: &RuleContext) -> Vec<RuleOutcome> {
        let Some(proposed) = &context.proposed_shift else {
            return vec![RuleOutcome::pass(MIN_REST_RULE), RuleOutcome::pass(WEEKLY_MAX_RULE)];
        };
        vec![
            self.evaluate_rest(proposed, &context.existing_shifts),
            self.evaluate_weekly(proposed, &context.existing_shifts),
        ]
    }
}
