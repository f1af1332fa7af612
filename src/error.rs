//! Crate error type.
//!
//! Errors are reserved for invalid references and malformed input.
//! A request that is well-formed but breaks a shift rule is not an
//! error; it comes back as [`Decision::Reject`](crate::rules::Decision).

use thiserror::Error;

use crate::models::Slot;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("unknown person: {0}")]
    UnknownPerson(String),

    #[error("unknown day: {0}")]
    UnknownDay(String),

    #[error("unknown shift: {0}")]
    UnknownShift(String),

    #[error("{person} appears more than once in {slot}")]
    DuplicateInCell { person: String, slot: Slot },

    #[error("invalid roster ({} issue(s))", .0.len())]
    InvalidRoster(Vec<ValidationError>),

    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
