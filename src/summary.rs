//! Weekly roster summary.
//!
//! Descriptive figures for a grid: how many hours each person is booked
//! for against their contract, and how many physicians and nurses sit in
//! each cell. Nothing here judges whether a cell is adequately staffed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Shifts | Number of slots a person holds |
//! | Booked hours | Sum of the nominal hours of those slots (8/12/24) |
//! | Contract gap | Booked hours − contracted weekly hours |
//! | Cell staffing | Physicians and nurses per (day, shift) |

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Day, Role, Roster, Shift, Slot, WeekGrid};

/// Per-person booking figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonLoad {
    /// Number of slots held.
    pub shifts: usize,
    /// Nominal hours of the held slots.
    pub booked_hours: u32,
    /// Contracted hours per week.
    pub contracted_hours: u32,
}

impl PersonLoad {
    /// Booked minus contracted hours (positive = over contract).
    pub fn contract_gap(&self) -> i64 {
        i64::from(self.booked_hours) - i64::from(self.contracted_hours)
    }
}

/// Role headcount in one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CellStaffing {
    pub physicians: usize,
    pub nurses: usize,
}

/// Summary of a week grid against a roster.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    /// Load per roster person, keyed by ID. People with no shifts are
    /// included with zero load.
    pub load_by_person: BTreeMap<String, PersonLoad>,
    /// Role headcount per cell, in scan order.
    pub staffing: Vec<(Slot, CellStaffing)>,
    /// Sum of booked hours across all people.
    pub total_booked_hours: u32,
}

impl WeekSummary {
    /// Computes the summary. IDs in the grid that are not on the roster
    /// are ignored.
    pub fn calculate(grid: &WeekGrid, roster: &Roster) -> Self {
        let mut load_by_person: BTreeMap<String, PersonLoad> = roster
            .people()
            .iter()
            .map(|p| {
                (
                    p.id.clone(),
                    PersonLoad {
                        shifts: 0,
                        booked_hours: 0,
                        contracted_hours: p.weekly_hours,
                    },
                )
            })
            .collect();

        let mut staffing = Vec::with_capacity(Day::ALL.len() * Shift::ALL.len());
        let mut total_booked_hours = 0;

        for (slot, ids) in grid.iter() {
            let mut cell = CellStaffing::default();
            for id in ids {
                let Some(person) = roster.get(id) else {
                    continue;
                };
                match person.role {
                    Role::Physician => cell.physicians += 1,
                    Role::Nurse => cell.nurses += 1,
                }
                if let Some(load) = load_by_person.get_mut(id) {
                    load.shifts += 1;
                    load.booked_hours += slot.shift.hours();
                }
                total_booked_hours += slot.shift.hours();
            }
            staffing.push((slot, cell));
        }

        Self {
            load_by_person,
            staffing,
            total_booked_hours,
        }
    }

    /// Role headcount for a cell.
    pub fn staffing_at(&self, day: Day, shift: Shift) -> CellStaffing {
        let slot = Slot::new(day, shift);
        self.staffing
            .iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, c)| *c)
            .unwrap_or_default()
    }

    /// Load for a person.
    pub fn load(&self, person_id: &str) -> Option<&PersonLoad> {
        self.load_by_person.get(person_id)
    }

    /// IDs of people booked above their contracted hours.
    pub fn over_contract(&self) -> Vec<&str> {
        self.load_by_person
            .iter()
            .filter(|(_, l)| l.contract_gap() > 0)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
