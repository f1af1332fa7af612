//! Per-person assignment index.
//!
//! The index is the inverse of a [`WeekGrid`]: person ID → the slots that
//! person currently holds. It is never edited directly; it is derived
//! from a grid by a full scan.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Day, Shift, Slot, WeekGrid};

/// Person ID → held slots, in scan order (day-major, then shift).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssignmentIndex {
    by_person: BTreeMap<String, Vec<Slot>>,
}

impl AssignmentIndex {
    /// Derives the index from a grid.
    pub fn derive(grid: &WeekGrid) -> Self {
        let mut by_person: BTreeMap<String, Vec<Slot>> = BTreeMap::new();
        for (slot, ids) in grid.iter() {
            for id in ids {
                by_person.entry(id.clone()).or_default().push(slot);
            }
        }
        Self { by_person }
    }

    /// Slots held by a person (empty if none).
    pub fn slots_for(&self, person_id: &str) -> &[Slot] {
        self.by_person
            .get(person_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Shifts a person holds on a given day.
    pub fn shifts_on(&self, person_id: &str, day: Day) -> impl Iterator<Item = Shift> + '_ {
        self.slots_for(person_id)
            .iter()
            .filter(move |s| s.day == day)
            .map(|s| s.shift)
    }

    /// Whether a person holds a specific slot.
    pub fn holds(&self, person_id: &str, day: Day, shift: Shift) -> bool {
        self.slots_for(person_id).contains(&Slot::new(day, shift))
    }

    /// Whether a person holds a shift matching `pred` on `day`.
    pub fn holds_any_on(&self, person_id: &str, day: Day, pred: impl Fn(Shift) -> bool) -> bool {
        self.shifts_on(person_id, day).any(pred)
    }

    /// People with at least one assignment, in ID order.
    pub fn people(&self) -> impl Iterator<Item = &str> {
        self.by_person.keys().map(String::as_str)
    }

    /// Iterates (person ID, slots) pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Slot])> {
        self.by_person
            .iter()
            .map(|(id, slots)| (id.as_str(), slots.as_slice()))
    }

    /// Number of people with at least one assignment.
    pub fn len(&self) -> usize {
        self.by_person.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_person.is_empty()
    }
}
