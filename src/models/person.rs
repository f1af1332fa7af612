//! Staff model.
//!
//! A person is a physician or nurse who can be placed on shifts. People
//! are loaded once into a [`Roster`] at the start of a planning session
//! and are never mutated by the planner.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Lowest quality rating.
pub const MIN_RATING: u8 = 1;
/// Highest quality rating.
pub const MAX_RATING: u8 = 5;

/// A staff member who can be assigned to shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique person identifier (e.g. "D1", "E4").
    pub id: String,
    /// Display name.
    pub name: String,
    /// Clinical role.
    pub role: Role,
    /// Quality rating, [`MIN_RATING`]..=[`MAX_RATING`].
    pub rating: u8,
    /// Contract category.
    pub contract: ContractKind,
    /// Contracted hours per week.
    pub weekly_hours: u32,
}

/// Clinical role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Physician,
    Nurse,
}

/// Contract category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractKind {
    /// Employed on a regular contract.
    Salaried,
    /// Paid per service rendered.
    FeeForService,
}

impl Person {
    /// Creates a person with default rating, a salaried contract and
    /// a 40-hour week.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            role,
            rating: 3,
            contract: ContractKind::Salaried,
            weekly_hours: 40,
        }
    }

    /// Creates a physician.
    pub fn physician(id: impl Into<String>) -> Self {
        Self::new(id, Role::Physician)
    }

    /// Creates a nurse.
    pub fn nurse(id: impl Into<String>) -> Self {
        Self::new(id, Role::Nurse)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the quality rating. Not clamped; see
    /// [`validate_roster`](crate::validation::validate_roster).
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the contract category.
    pub fn with_contract(mut self, contract: ContractKind) -> Self {
        self.contract = contract;
        self
    }

    /// Sets the contracted weekly hours.
    pub fn with_weekly_hours(mut self, hours: u32) -> Self {
        self.weekly_hours = hours;
        self
    }

    /// Display name, or the ID when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// The read-only staff list for a planning session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Creates a roster. Use
    /// [`validate_roster`](crate::validation::validate_roster) to check it.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// Parses a roster from a JSON array of people.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Looks up a person by ID.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Whether a person with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// People with the given role, in roster order.
    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(move |p| p.role == role)
    }

    /// All people, in roster order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// The ward's seed staff: six physicians (D1–D6) and ten nurses (E1–E10).
    pub fn sample() -> Self {
        use ContractKind::{FeeForService, Salaried};

        let physicians = [
            ("D1", "Dr. Roberto Gómez", 5, Salaried, 36),
            ("D2", "Dra. Laura Fernández", 4, Salaried, 36),
            ("D3", "Dr. Jorge Castro", 3, FeeForService, 24),
            ("D4", "Dra. Claudia Silva", 2, Salaried, 24),
            ("D5", "Dr. Manuel Rojas", 5, Salaried, 44),
            ("D6", "Dra. Andrea Soto", 4, FeeForService, 30),
        ];
        let nurses = [
            ("E1", "Ana Pérez", 4, Salaried, 40),
            ("E2", "Carlos Soto", 3, Salaried, 36),
            ("E3", "Luisa Morales", 2, FeeForService, 28),
            ("E4", "Javier Ríos", 1, Salaried, 30),
            ("E5", "Sofía Castro", 5, Salaried, 44),
            ("E6", "Miguel Ángel", 4, Salaried, 40),
            ("E7", "Valentina Gómez", 3, Salaried, 36),
            ("E8", "Diego Fernández", 2, Salaried, 32),
            ("E9", "Camila Díaz", 5, Salaried, 44),
            ("E10", "Benjamín Núñez", 3, FeeForService, 28),
        ];

        let people = physicians
            .into_iter()
            .map(|row| (Role::Physician, row))
            .chain(nurses.into_iter().map(|row| (Role::Nurse, row)))
            .map(|(role, (id, name, rating, contract, hours))| {
                Person::new(id, role)
                    .with_name(name)
                    .with_rating(rating)
                    .with_contract(contract)
                    .with_weekly_hours(hours)
            })
            .collect();

        Self::new(people)
    }
}
