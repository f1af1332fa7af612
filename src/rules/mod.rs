//! Shift-compatibility rules and the rule engine.
//!
//! Every rule looks only at the candidate's own assignments, through an
//! [`AssignmentIndex`]. Rules are evaluated in a fixed order and the first
//! one that objects decides the outcome:
//!
//! 1. Same-day exclusivity (duplicate block, long-block exclusivity,
//!    consecutive standard blocks)
//! 2. Night → next-day Morning rest
//! 3. Night → next-day 24h rest
//! 4. 12h block → whole next day blacked out
//! 5. 24h block → next three days blacked out
//!
//! Day lookbacks are linear over Monday..Sunday with no wraparound.
//!
//! # Usage
//!
//! ```
//! use shift_roster::models::{Day, Person, Roster, Shift};
//! use shift_roster::rules::RuleEngine;
//! use shift_roster::store::AssignmentStore;
//!
//! let roster = Roster::new(vec![Person::nurse("E1")]);
//! let mut store = AssignmentStore::for_roster(&roster);
//! store.add("E1", Day::Monday, Shift::NIGHT).unwrap();
//!
//! let engine = RuleEngine::default();
//! let e1 = roster.get("E1").unwrap();
//! assert!(!engine.can_assign(e1, Day::Tuesday, Shift::MORNING, store.index()));
//! assert!(engine.can_assign(e1, Day::Tuesday, Shift::AFTERNOON, store.index()));
//! ```

mod builtin;
mod config;
mod engine;

pub use builtin::{
    NightBeforeMorning, NightBeforeTwentyFour, SameDayExclusivity, TwelveHourRest,
    TwentyFourBlackout,
};
pub use config::RuleConfig;
pub use engine::RuleEngine;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::Slot;
use crate::store::AssignmentIndex;

/// A single shift-compatibility rule.
///
/// Implementations must be pure: the same inputs always yield the same
/// answer.
pub trait ShiftRule: Send + Sync + Debug {
    /// Rule name, for logs.
    fn name(&self) -> &'static str;

    /// Checks placing `person_id` at `target`, given the person's current
    /// assignments. Returns `Some` if the rule forbids it.
    fn check(&self, person_id: &str, target: Slot, index: &AssignmentIndex) -> Option<Rejection>;
}

/// Outcome of evaluating a candidate assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Accept,
    Reject(Rejection),
}

impl Decision {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accept)
    }

    /// The rejection, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Decision::Accept => None,
            Decision::Reject(r) => Some(r),
        }
    }
}

/// Why a candidate assignment was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// The specific rule that fired.
    pub reason: RejectReason,
    /// The already-held slot that conflicts with the target.
    pub conflict: Slot,
}

impl Rejection {
    pub fn new(reason: RejectReason, conflict: Slot) -> Self {
        Self { reason, conflict }
    }

    /// Broad rule family, for user-facing messages.
    pub fn category(&self) -> RuleCategory {
        self.reason.category()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (conflicts with {})", self.reason, self.conflict)
    }
}

/// The specific rule that refused an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The person already holds this exact block.
    DuplicateShift,
    /// A 12h/24h block cannot share a day with any other block.
    LongBlockExclusive,
    /// Morning–Afternoon or Afternoon–Night on the same day.
    ConsecutiveShift,
    /// Morning right after a Night.
    NightBeforeMorning,
    /// 24h right after a Night.
    NightBeforeTwentyFour,
    /// Day blacked out by a preceding 12h block.
    TwelveHourRest,
    /// Day blacked out by a recent 24h block.
    TwentyFourBlackout,
}

impl RejectReason {
    /// Stable label, for logs and callers mapping reasons to messages.
    pub fn label(self) -> &'static str {
        match self {
            RejectReason::DuplicateShift => "duplicate-shift",
            RejectReason::LongBlockExclusive => "long-block-exclusive",
            RejectReason::ConsecutiveShift => "consecutive-shift",
            RejectReason::NightBeforeMorning => "night-before-morning",
            RejectReason::NightBeforeTwentyFour => "night-before-24h",
            RejectReason::TwelveHourRest => "12h-rest",
            RejectReason::TwentyFourBlackout => "24h-blackout",
        }
    }

    pub fn category(self) -> RuleCategory {
        match self {
            RejectReason::DuplicateShift
            | RejectReason::LongBlockExclusive
            | RejectReason::ConsecutiveShift => RuleCategory::SameDayExclusivity,
            RejectReason::NightBeforeMorning | RejectReason::NightBeforeTwentyFour => {
                RuleCategory::Rest
            }
            RejectReason::TwelveHourRest => RuleCategory::LongShiftBlackout,
            RejectReason::TwentyFourBlackout => RuleCategory::TwentyFourBlackout,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rule families reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleCategory {
    SameDayExclusivity,
    Rest,
    LongShiftBlackout,
    TwentyFourBlackout,
}
