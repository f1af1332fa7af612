//! Rostering domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Day` | One of seven fixed week days, Monday first |
//! | `Shift` | Standard 8h block or long (12h/24h) block |
//! | `Slot` | A (day, shift) cell coordinate |
//! | `Person` / `Roster` | Staff and the read-only staff list |
//! | `WeekGrid` | Slot → ordered, duplicate-free person IDs |

mod grid;
mod person;
mod week;

pub use grid::{ExportRow, WeekGrid};
pub use person::{ContractKind, Person, Role, Roster, MAX_RATING, MIN_RATING};
pub use week::{Day, LongBlock, Shift, Slot, StandardShift};
