//! Built-in ward rules.
//!
//! # Lookback
//! Rules that look at earlier days use [`Day::days_before`], which stops at
//! Monday. A Sunday assignment never affects the following Monday.

use super::{RejectReason, Rejection, ShiftRule};
use crate::models::{Day, Shift, Slot};
use crate::store::AssignmentIndex;

/// Finds a held shift on `day` (if that day exists) matching `pred`.
fn held_on(
    index: &AssignmentIndex,
    person_id: &str,
    day: Option<Day>,
    pred: impl Fn(Shift) -> bool,
) -> Option<Slot> {
    let day = day?;
    index
        .shifts_on(person_id, day)
        .find(|s| pred(*s))
        .map(|shift| Slot::new(day, shift))
}

/// Same-day exclusivity.
///
/// For each block the person already holds on the target day:
/// - the same block cannot be taken twice;
/// - a long block excludes every other block;
/// - touching standard blocks (Morning–Afternoon, Afternoon–Night) clash.
///
/// Held blocks are checked in column order and the checks above run in
/// that order per block.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameDayExclusivity;

impl ShiftRule for SameDayExclusivity {
    fn name(&self) -> &'static str {
        "same-day-exclusivity"
    }

    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection> {
        index.shifts_on(person_id, target.day).find_map(|held| {
            let reason = if held == target.shift {
                RejectReason::DuplicateShift
            } else if held.is_long() || target.shift.is_long() {
                RejectReason::LongBlockExclusive
            } else if held.is_consecutive_with(target.shift) {
                RejectReason::ConsecutiveShift
            } else {
                return None;
            };
            Some(Rejection::new(reason, Slot::new(target.day, held)))
        })
    }
}

/// No Morning the day after a Night.
#[derive(Debug, Clone, Copy, Default)]
pub struct NightBeforeMorning;

impl ShiftRule for NightBeforeMorning {
    fn name(&self) -> &'static str {
        "night-before-morning"
    }

    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection> {
        if target.shift != Shift::MORNING {
            return None;
        }
        held_on(index, person_id, target.day.previous(), |s| s == Shift::NIGHT)
            .map(|slot| Rejection::new(RejectReason::NightBeforeMorning, slot))
    }
}

/// No 24h block the day after a Night.
#[derive(Debug, Clone, Copy, Default)]
pub struct NightBeforeTwentyFour;

impl ShiftRule for NightBeforeTwentyFour {
    fn name(&self) -> &'static str {
        "night-before-24h"
    }

    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection> {
        if target.shift != Shift::TWENTY_FOUR {
            return None;
        }
        held_on(index, person_id, target.day.previous(), |s| s == Shift::NIGHT)
            .map(|slot| Rejection::new(RejectReason::NightBeforeTwentyFour, slot))
    }
}

/// A 12h block (day or night) blacks out the following `days` days.
///
/// The ward policy is one day. Zero disables the rule.
#[derive(Debug, Clone, Copy)]
pub struct TwelveHourRest {
    pub days: usize,
}

impl Default for TwelveHourRest {
    fn default() -> Self {
        Self { days: 1 }
    }
}

impl ShiftRule for TwelveHourRest {
    fn name(&self) -> &'static str {
        "12h-rest"
    }

    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection> {
        (1..=self.days).find_map(|n| {
            held_on(index, person_id, target.day.days_before(n), Shift::is_twelve_hour)
                .map(|slot| Rejection::new(RejectReason::TwelveHourRest, slot))
        })
    }
}

/// A 24h block blacks out the following `days` days.
///
/// The ward policy is three days. Zero disables the rule.
#[derive(Debug, Clone, Copy)]
pub struct TwentyFourBlackout {
    pub days: usize,
}

impl Default for TwentyFourBlackout {
    fn default() -> Self {
        Self { days: 3 }
    }
}

impl ShiftRule for TwentyFourBlackout {
    fn name(&self) -> &'static str {
        "24h-blackout"
    }

    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection> {
        (1..=self.days).find_map(|n| {
            held_on(index, person_id, target.day.days_before(n), |s| s == Shift::TWENTY_FOUR)
                .map(|slot| Rejection::new(RejectReason::TwentyFourBlackout, slot))
        })
    }
}
