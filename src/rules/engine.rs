//! Ordered rule chain.
//!
//! The engine holds its rules in evaluation order and stops at the first
//! rejection. It has no state beyond the chain itself.

use std::sync::Arc;

use super::{
    Decision, NightBeforeMorning, NightBeforeTwentyFour, RuleConfig, SameDayExclusivity,
    ShiftRule, TwelveHourRest, TwentyFourBlackout,
};
use crate::models::{Day, Person, Shift, Slot};
use crate::store::AssignmentIndex;

/// Decides whether a person may take a (day, shift) slot.
///
/// # Example
/// ```
/// use shift_roster::rules::{RuleConfig, RuleEngine};
///
/// let engine = RuleEngine::standard(RuleConfig::default());
/// assert_eq!(engine.rule_names(), vec![
///     "same-day-exclusivity",
///     "night-before-morning",
///     "night-before-24h",
///     "12h-rest",
///     "24h-blackout",
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn ShiftRule>>,
}

impl RuleEngine {
    /// Creates an engine with no rules (accepts everything).
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The ward rule chain, in policy order.
    pub fn standard(config: RuleConfig) -> Self {
        Self::empty()
            .with_rule(SameDayExclusivity)
            .with_rule(NightBeforeMorning)
            .with_rule(NightBeforeTwentyFour)
            .with_rule(TwelveHourRest {
                days: config.twelve_hour_rest_days,
            })
            .with_rule(TwentyFourBlackout {
                days: config.twenty_four_blackout_days,
            })
    }

    /// Appends a rule to the end of the chain.
    pub fn with_rule<R: ShiftRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Evaluates placing `person` at (`day`, `shift`).
    ///
    /// `index` must be derived from the grid the assignment would go into.
    pub fn evaluate(
        &self,
        person: &Person,
        day: Day,
        shift: Shift,
        index: &AssignmentIndex,
    ) -> Decision {
        let target = Slot::new(day, shift);
        self.rules
            .iter()
            .find_map(|rule| rule.check(&person.id, target, index))
            .map_or(Decision::Accept, Decision::Reject)
    }

    /// Shorthand for `evaluate(..).is_accepted()`.
    pub fn can_assign(
        &self,
        person: &Person,
        day: Day,
        shift: Shift,
        index: &AssignmentIndex,
    ) -> bool {
        self.evaluate(person, day, shift, index).is_accepted()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::standard(RuleConfig::default())
    }
}
