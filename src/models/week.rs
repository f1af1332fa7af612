//! Week structure: days, shifts and slots.
//!
//! The week is a fixed linear sequence of seven days (Monday = 0 ..
//! Sunday = 6). Lookbacks never wrap: Monday has no preceding day.
//!
//! Each day carries six shifts. Three are 8-hour standard blocks with an
//! adjacency relation (Morning–Afternoon, Afternoon–Night); three are long
//! blocks (12h day, 12h night, 24h) that are exclusive of every other
//! shift on their day.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// A day of the scheduling week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Position in the week (0 = Monday).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day at a given week position.
    pub fn from_index(index: usize) -> Option<Day> {
        Self::ALL.get(index).copied()
    }

    /// The day `n` days earlier in the same week, if any.
    ///
    /// No wraparound: `Day::Monday.days_before(1)` is `None`.
    pub fn days_before(self, n: usize) -> Option<Day> {
        self.index().checked_sub(n).and_then(Self::from_index)
    }

    /// The immediately preceding day, if any.
    pub fn previous(self) -> Option<Day> {
        self.days_before(1)
    }

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = ScheduleError;

    /// Parses a canonical label, case-insensitively. Spanish day names
    /// (`Lunes` .. `Domingo`) are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match s.trim().to_lowercase().as_str() {
            "monday" | "lunes" => Day::Monday,
            "tuesday" | "martes" => Day::Tuesday,
            "wednesday" | "miércoles" | "miercoles" => Day::Wednesday,
            "thursday" | "jueves" => Day::Thursday,
            "friday" | "viernes" => Day::Friday,
            "saturday" | "sábado" | "sabado" => Day::Saturday,
            "sunday" | "domingo" => Day::Sunday,
            _ => return Err(ScheduleError::UnknownDay(s.to_string())),
        };
        Ok(day)
    }
}

impl From<Day> for String {
    fn from(day: Day) -> Self {
        day.label().to_string()
    }
}

impl TryFrom<String> for Day {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An 8-hour standard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardShift {
    Morning,
    Afternoon,
    Night,
}

/// A long block, exclusive of every other shift on its day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LongBlock {
    TwelveDay,
    TwelveNight,
    TwentyFour,
}

/// A shift within a day.
///
/// Ordering follows the grid's column order: Morning, Afternoon, Night,
/// 12h-Day, 12h-Night, 24h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Shift {
    Standard(StandardShift),
    Long(LongBlock),
}

impl Shift {
    pub const MORNING: Shift = Shift::Standard(StandardShift::Morning);
    pub const AFTERNOON: Shift = Shift::Standard(StandardShift::Afternoon);
    pub const NIGHT: Shift = Shift::Standard(StandardShift::Night);
    pub const TWELVE_DAY: Shift = Shift::Long(LongBlock::TwelveDay);
    pub const TWELVE_NIGHT: Shift = Shift::Long(LongBlock::TwelveNight);
    pub const TWENTY_FOUR: Shift = Shift::Long(LongBlock::TwentyFour);

    /// All shifts in column order.
    pub const ALL: [Shift; 6] = [
        Shift::MORNING,
        Shift::AFTERNOON,
        Shift::NIGHT,
        Shift::TWELVE_DAY,
        Shift::TWELVE_NIGHT,
        Shift::TWENTY_FOUR,
    ];

    /// Column position within a day (0..6).
    pub fn index(self) -> usize {
        match self {
            Shift::Standard(StandardShift::Morning) => 0,
            Shift::Standard(StandardShift::Afternoon) => 1,
            Shift::Standard(StandardShift::Night) => 2,
            Shift::Long(LongBlock::TwelveDay) => 3,
            Shift::Long(LongBlock::TwelveNight) => 4,
            Shift::Long(LongBlock::TwentyFour) => 5,
        }
    }

    /// Whether this is a 12h or 24h block.
    #[inline]
    pub fn is_long(self) -> bool {
        matches!(self, Shift::Long(_))
    }

    /// Whether this is one of the two 12h blocks.
    #[inline]
    pub fn is_twelve_hour(self) -> bool {
        matches!(
            self,
            Shift::Long(LongBlock::TwelveDay) | Shift::Long(LongBlock::TwelveNight)
        )
    }

    /// Whether two shifts touch on the same day.
    ///
    /// Only standard blocks have an adjacency: Morning–Afternoon and
    /// Afternoon–Night, in either direction.
    pub fn is_consecutive_with(self, other: Shift) -> bool {
        use StandardShift::*;
        match (self, other) {
            (Shift::Standard(a), Shift::Standard(b)) => matches!(
                (a, b),
                (Morning, Afternoon)
                    | (Afternoon, Morning)
                    | (Afternoon, Night)
                    | (Night, Afternoon)
            ),
            _ => false,
        }
    }

    /// Nominal length of the block in hours.
    pub fn hours(self) -> u32 {
        match self {
            Shift::Standard(_) => 8,
            Shift::Long(LongBlock::TwentyFour) => 24,
            Shift::Long(_) => 12,
        }
    }

    /// Canonical label.
    pub fn label(self) -> &'static str {
        match self {
            Shift::Standard(StandardShift::Morning) => "Morning",
            Shift::Standard(StandardShift::Afternoon) => "Afternoon",
            Shift::Standard(StandardShift::Night) => "Night",
            Shift::Long(LongBlock::TwelveDay) => "12h-Day",
            Shift::Long(LongBlock::TwelveNight) => "12h-Night",
            Shift::Long(LongBlock::TwentyFour) => "24h",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = ScheduleError;

    /// Parses a canonical label, case-insensitively. The Spanish labels
    /// used by the ward sheets (`Mañana`, `Tarde`, `Noche`, `12h Día`,
    /// `12h Noche`) are accepted as aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shift = match s.trim().to_lowercase().as_str() {
            "morning" | "mañana" | "manana" => Shift::MORNING,
            "afternoon" | "tarde" => Shift::AFTERNOON,
            "night" | "noche" => Shift::NIGHT,
            "12h-day" | "12h day" | "12h día" | "12h dia" => Shift::TWELVE_DAY,
            "12h-night" | "12h night" | "12h noche" => Shift::TWELVE_NIGHT,
            "24h" => Shift::TWENTY_FOUR,
            _ => return Err(ScheduleError::UnknownShift(s.to_string())),
        };
        Ok(shift)
    }
}

impl From<Shift> for String {
    fn from(shift: Shift) -> Self {
        shift.label().to_string()
    }
}

impl TryFrom<String> for Shift {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A (day, shift) cell coordinate.
///
/// Orders day-major, then by shift column, matching a full grid scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub shift: Shift,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Day, shift: Shift) -> Self {
        Self { day, shift }
    }

    /// All 42 slots of the week in scan order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Shift::ALL.into_iter().map(move |shift| Slot::new(day, shift)))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}
