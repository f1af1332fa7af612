//! Assignment store.
//!
//! [`AssignmentStore`] is the sole owner of the week grid. It applies
//! add/remove/reset and re-derives the [`AssignmentIndex`] inside the same
//! call, so an index read through the store always matches the grid.
//!
//! The store does not consult the rule engine: validation is the caller's
//! job (see [`WeekPlanner`](crate::planner::WeekPlanner)).

mod index;

pub use index::AssignmentIndex;

use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::{Result, ScheduleError};
use crate::models::{Day, Roster, Shift, WeekGrid};

/// Owns the week grid and its derived index.
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    known: HashSet<String>,
    grid: WeekGrid,
    index: AssignmentIndex,
}

impl AssignmentStore {
    /// Creates an empty store accepting the people of `roster`.
    pub fn for_roster(roster: &Roster) -> Self {
        Self {
            known: roster.people().iter().map(|p| p.id.clone()).collect(),
            grid: WeekGrid::new(),
            index: AssignmentIndex::default(),
        }
    }

    /// Assigns a person to a cell.
    ///
    /// Adding a person already in the cell is a no-op.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownPerson`] if the ID is not on the roster.
    pub fn add(&mut self, person_id: &str, day: Day, shift: Shift) -> Result<&WeekGrid> {
        self.check_known(person_id)?;
        if self.grid.insert(person_id, day, shift) {
            debug!(person = person_id, %day, %shift, "assignment added");
            self.reindex();
        }
        Ok(&self.grid)
    }

    /// Removes a person from a cell. Removing someone who is not there
    /// is a no-op.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownPerson`] if the ID is not on the roster.
    pub fn remove(&mut self, person_id: &str, day: Day, shift: Shift) -> Result<&WeekGrid> {
        self.check_known(person_id)?;
        if self.grid.remove(person_id, day, shift) {
            debug!(person = person_id, %day, %shift, "assignment removed");
            self.reindex();
        }
        Ok(&self.grid)
    }

    /// Replaces the grid with an empty one.
    pub fn reset(&mut self) {
        info!(cleared = self.grid.assignment_count(), "week grid reset");
        self.grid = WeekGrid::new();
        self.reindex();
    }

    /// The current per-person index.
    pub fn index(&self) -> &AssignmentIndex {
        &self.index
    }

    /// Read-only view of the current grid.
    pub fn snapshot(&self) -> &WeekGrid {
        &self.grid
    }

    /// Whether the ID belongs to the roster this store was built for.
    pub fn is_known(&self, person_id: &str) -> bool {
        self.known.contains(person_id)
    }

    fn check_known(&self, person_id: &str) -> Result<()> {
        if self.is_known(person_id) {
            Ok(())
        } else {
            Err(ScheduleError::UnknownPerson(person_id.to_string()))
        }
    }

    fn reindex(&mut self) {
        self.index = AssignmentIndex::derive(&self.grid);
    }
}
