//! Week grid model.
//!
//! The grid maps every (day, shift) slot to the ordered list of people
//! assigned there. All 42 cells always exist; a fresh grid has every
//! cell empty. Within a cell, IDs are unique and keep insertion order.
//!
//! Only [`AssignmentStore`](crate::store::AssignmentStore) mutates a grid.
//! Everyone else sees it through `&WeekGrid`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Day, Roster, Shift, Slot};
use crate::error::ScheduleError;

const DAYS: usize = Day::ALL.len();
const SHIFTS: usize = Shift::ALL.len();

/// The full week of assignment cells.
///
/// Deserializing rejects a grid whose cells repeat an ID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridCells")]
pub struct WeekGrid {
    /// `cells[day][shift]`, indexed by [`Day::index`] and [`Shift::index`].
    cells: [[Vec<String>; SHIFTS]; DAYS],
}

/// Unchecked wire form of a [`WeekGrid`].
#[derive(Deserialize)]
struct GridCells {
    cells: [[Vec<String>; SHIFTS]; DAYS],
}

impl TryFrom<GridCells> for WeekGrid {
    type Error = ScheduleError;

    fn try_from(raw: GridCells) -> Result<Self, Self::Error> {
        let grid = WeekGrid { cells: raw.cells };
        for (slot, ids) in grid.iter() {
            let mut seen = HashSet::new();
            if let Some(dup) = ids.iter().find(|id| !seen.insert(id.as_str())) {
                return Err(ScheduleError::DuplicateInCell {
                    person: dup.clone(),
                    slot,
                });
            }
        }
        Ok(grid)
    }
}

/// One row of a report: a cell with its people resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub day: Day,
    pub shift: Shift,
    /// Display names in assignment order. Unknown IDs are kept verbatim.
    pub names: Vec<String>,
}

impl WeekGrid {
    /// Creates a grid with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// People assigned to a cell, in assignment order.
    pub fn cell(&self, day: Day, shift: Shift) -> &[String] {
        &self.cells[day.index()][shift.index()]
    }

    /// Whether a person is assigned to a cell.
    pub fn contains(&self, person_id: &str, day: Day, shift: Shift) -> bool {
        self.cell(day, shift).iter().any(|id| id == person_id)
    }

    /// Iterates all 42 cells in scan order (day-major, then shift).
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &[String])> {
        Slot::all().map(move |slot| (slot, self.cell(slot.day, slot.shift)))
    }

    /// Total number of (person, slot) assignments.
    pub fn assignment_count(&self) -> usize {
        self.iter().map(|(_, ids)| ids.len()).sum()
    }

    /// Whether no cell holds anyone.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, ids)| ids.is_empty())
    }

    /// Distinct person IDs present anywhere in the grid, in order of
    /// first appearance during a scan.
    pub fn scheduled_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .flat_map(|(_, ids)| ids.iter())
            .map(String::as_str)
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// One row per cell in scan order, for export collaborators.
    pub fn rows(&self, roster: &Roster) -> Vec<ExportRow> {
        self.iter()
            .map(|(slot, ids)| ExportRow {
                day: slot.day,
                shift: slot.shift,
                names: ids
                    .iter()
                    .map(|id| {
                        roster
                            .get(id)
                            .map(|p| p.display_name().to_string())
                            .unwrap_or_else(|| id.clone())
                    })
                    .collect(),
            })
            .collect()
    }

    /// Appends a person to a cell. Returns `false` if already present.
    pub(crate) fn insert(&mut self, person_id: &str, day: Day, shift: Shift) -> bool {
        let cell = &mut self.cells[day.index()][shift.index()];
        if cell.iter().any(|id| id == person_id) {
            return false;
        }
        cell.push(person_id.to_string());
        true
    }

    /// Removes a person from a cell. Returns `false` if absent.
    pub(crate) fn remove(&mut self, person_id: &str, day: Day, shift: Shift) -> bool {
        let cell = &mut self.cells[day.index()][shift.index()];
        let before = cell.len();
        cell.retain(|id| id != person_id);
        cell.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;

    fn sample_grid() -> WeekGrid {
        let mut g = WeekGrid::new();
        g.insert("E1", Day::Monday, Shift::NIGHT);
        g.insert("D1", Day::Monday, Shift::NIGHT);
        g.insert("E2", Day::Monday, Shift::MORNING);
        g.insert("E1", Day::Wednesday, Shift::AFTERNOON);
        g
    }

    #[test]
    fn test_new_grid_has_all_cells_empty() {
        let g = WeekGrid::new();
        assert_eq!(g.iter().count(), 42);
        assert!(g.is_empty());
        assert_eq!(g.assignment_count(), 0);
    }

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut g = sample_grid();
        assert!(!g.insert("E1", Day::Monday, Shift::NIGHT));
        assert_eq!(g.cell(Day::Monday, Shift::NIGHT), ["E1", "D1"]);
        assert_eq!(g.assignment_count(), 4);
    }

    #[test]
    fn test_remove() {
        let mut g = sample_grid();
        assert!(g.remove("E1", Day::Monday, Shift::NIGHT));
        assert!(!g.remove("E1", Day::Monday, Shift::NIGHT));
        assert_eq!(g.cell(Day::Monday, Shift::NIGHT), ["D1"]);
        assert!(!g.contains("E1", Day::Monday, Shift::NIGHT));
        assert!(g.contains("E1", Day::Wednesday, Shift::AFTERNOON));
    }

    #[test]
    fn test_scheduled_ids_deduplicated_in_scan_order() {
        let g = sample_grid();
        // Monday Morning is scanned before Monday Night
        assert_eq!(g.scheduled_ids(), vec!["E2", "E1", "D1"]);
    }

    #[test]
    fn test_rows_resolve_names() {
        let roster = Roster::new(vec![Person::nurse("E1").with_name("Ana Pérez")]);
        let rows = sample_grid().rows(&roster);
        assert_eq!(rows.len(), 42);

        let night = rows
            .iter()
            .find(|r| r.day == Day::Monday && r.shift == Shift::NIGHT)
            .unwrap();
        assert_eq!(night.names, vec!["Ana Pérez".to_string(), "D1".to_string()]);
        assert!(rows.last().unwrap().names.is_empty());
    }

    #[test]
    fn test_grid_serde_roundtrip() {
        let g = sample_grid();
        let json = serde_json::to_string(&g).unwrap();
        let back: WeekGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_in_cell() {
        let mut json = serde_json::to_value(WeekGrid::new()).unwrap();
        json["cells"][0][2] = serde_json::json!(["E1", "D1", "E1"]);
        let err = serde_json::from_value::<WeekGrid>(json).unwrap_err();
        assert!(err.to_string().contains("E1"));
        assert!(err.to_string().contains("Monday Night"));
    }
}
