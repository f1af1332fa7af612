//! Weekly staff rostering core.
//!
//! Places physicians and nurses on a 7-day × 6-shift grid and refuses
//! placements that break the ward's shift-compatibility rules (rest after
//! nights, exclusive long blocks, blackouts after 12h/24h blocks, no
//! touching standard blocks on one day).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `Shift`, `Slot`, `Person`, `Roster`,
//!   `WeekGrid`
//! - **`store`**: `AssignmentStore`, sole owner of the grid, and the derived
//!   `AssignmentIndex`
//! - **`rules`**: `RuleEngine` and the ordered built-in `ShiftRule`s
//! - **`planner`**: `WeekPlanner`, validate-then-commit entry point for an
//!   input layer
//! - **`summary`**: Per-person booked hours and per-cell role counts
//! - **`validation`**: Roster integrity checks
//!
//! # Scope
//!
//! Rendering, drag-and-drop, search, spreadsheet export and notifications
//! live outside this crate. They read the grid through `&WeekGrid` and
//! call into [`planner::WeekPlanner`].
//!
//! # Example
//!
//! ```
//! use shift_roster::models::{Day, Roster, Shift};
//! use shift_roster::planner::WeekPlanner;
//! use shift_roster::rules::RejectReason;
//!
//! let mut planner = WeekPlanner::new(Roster::sample()).unwrap();
//! assert!(planner.assign("E1", Day::Monday, Shift::NIGHT).unwrap().is_accepted());
//!
//! let decision = planner.assign("E1", Day::Tuesday, Shift::MORNING).unwrap();
//! assert_eq!(
//!     decision.rejection().map(|r| r.reason),
//!     Some(RejectReason::NightBeforeMorning)
//! );
//! ```

pub mod error;
pub mod models;
pub mod planner;
pub mod rules;
pub mod store;
pub mod summary;
pub mod validation;

pub use error::{Result, ScheduleError};
