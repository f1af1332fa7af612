//! Week planner.
//!
//! [`WeekPlanner`] is the entry point for an input layer (UI, CLI, test
//! driver). It owns the roster, the [`AssignmentStore`] and a
//! [`RuleEngine`], and runs every request as validate-then-commit within
//! one `&mut self` call, so no rule is ever checked against a stale index.

use tracing::{debug, info};

use crate::error::{Result, ScheduleError};
use crate::models::{Day, Person, Roster, Shift, Slot, WeekGrid};
use crate::rules::{Decision, RuleConfig, RuleEngine};
use crate::store::{AssignmentIndex, AssignmentStore};
use crate::summary::WeekSummary;
use crate::validation::validate_roster;

/// A planning session for one week.
#[derive(Debug, Clone)]
pub struct WeekPlanner {
    roster: Roster,
    store: AssignmentStore,
    engine: RuleEngine,
}

impl WeekPlanner {
    /// Starts a session with the standard ward rules.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidRoster`] if the roster fails validation.
    pub fn new(roster: Roster) -> Result<Self> {
        Self::with_engine(roster, RuleEngine::default())
    }

    /// Starts a session with the standard rules tuned by `config`.
    pub fn with_config(roster: Roster, config: RuleConfig) -> Result<Self> {
        Self::with_engine(roster, RuleEngine::standard(config))
    }

    /// Starts a session with a custom rule chain.
    pub fn with_engine(roster: Roster, engine: RuleEngine) -> Result<Self> {
        validate_roster(roster.people()).map_err(ScheduleError::InvalidRoster)?;
        info!(people = roster.len(), rules = ?engine.rule_names(), "planning session started");
        Ok(Self {
            store: AssignmentStore::for_roster(&roster),
            roster,
            engine,
        })
    }

    /// Evaluates an assignment against the current grid without applying it.
    pub fn check(&self, person_id: &str, day: Day, shift: Shift) -> Result<Decision> {
        let person = self.person(person_id)?;
        Ok(self.engine.evaluate(person, day, shift, self.store.index()))
    }

    /// Assigns a person if the rules allow it.
    ///
    /// On [`Decision::Reject`] the grid is left untouched.
    pub fn assign(&mut self, person_id: &str, day: Day, shift: Shift) -> Result<Decision> {
        let decision = self.check(person_id, day, shift)?;
        match &decision {
            Decision::Accept => {
                self.store.add(person_id, day, shift)?;
            }
            Decision::Reject(rejection) => {
                debug!(person = person_id, %day, %shift, %rejection, "assignment rejected");
            }
        }
        Ok(decision)
    }

    /// Removes a person from a cell. No-op if they are not there.
    pub fn unassign(&mut self, person_id: &str, day: Day, shift: Shift) -> Result<&WeekGrid> {
        self.store.remove(person_id, day, shift)
    }

    /// Moves a person from one cell to another.
    ///
    /// The target is checked as if the source slot were already vacated.
    /// Either both the removal and the addition happen, or neither does.
    /// If the person does not hold `from`, this behaves like [`assign`].
    ///
    /// [`assign`]: WeekPlanner::assign
    pub fn move_assignment(&mut self, person_id: &str, from: Slot, to: Slot) -> Result<Decision> {
        if from == to {
            self.person(person_id)?;
            if self.store.snapshot().contains(person_id, from.day, from.shift) {
                return Ok(Decision::Accept);
            }
            return self.assign(person_id, to.day, to.shift);
        }
        let person = self.person(person_id)?;

        let mut vacated = self.store.snapshot().clone();
        vacated.remove(person_id, from.day, from.shift);
        let index = AssignmentIndex::derive(&vacated);

        let decision = self.engine.evaluate(person, to.day, to.shift, &index);
        if decision.is_accepted() {
            self.store.remove(person_id, from.day, from.shift)?;
            self.store.add(person_id, to.day, to.shift)?;
            debug!(person = person_id, %from, %to, "assignment moved");
        } else {
            debug!(person = person_id, %from, %to, "move rejected");
        }
        Ok(decision)
    }

    /// Clears the week.
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// People present anywhere in the grid, in first-appearance order.
    pub fn scheduled_people(&self) -> Vec<&Person> {
        self.store
            .snapshot()
            .scheduled_ids()
            .into_iter()
            .filter_map(|id| self.roster.get(id))
            .collect()
    }

    /// Booking and staffing figures for the current grid.
    pub fn summary(&self) -> WeekSummary {
        WeekSummary::calculate(self.store.snapshot(), &self.roster)
    }

    /// Read-only view of the current grid.
    pub fn grid(&self) -> &WeekGrid {
        self.store.snapshot()
    }

    /// The current per-person index.
    pub fn index(&self) -> &AssignmentIndex {
        self.store.index()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    fn person(&self, person_id: &str) -> Result<&Person> {
        self.roster
            .get(person_id)
            .ok_or_else(|| ScheduleError::UnknownPerson(person_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::rules::{RejectReason, RuleCategory};
    use crate::validation::ValidationErrorKind;

    fn planner() -> WeekPlanner {
        WeekPlanner::new(Roster::sample()).unwrap()
    }

    fn reason(decision: Decision) -> Option<RejectReason> {
        decision.rejection().map(|r| r.reason)
    }

    #[test]
    fn test_end_to_end_rest_scenario() {
        let mut p = planner();

        assert!(p.assign("E1", Day::Monday, Shift::NIGHT).unwrap().is_accepted());

        let d = p.check("E1", Day::Tuesday, Shift::MORNING).unwrap();
        assert_eq!(reason(d), Some(RejectReason::NightBeforeMorning));
        assert_eq!(d.rejection().unwrap().category(), RuleCategory::Rest);

        assert!(p.check("E1", Day::Tuesday, Shift::AFTERNOON).unwrap().is_accepted());

        p.unassign("E1", Day::Monday, Shift::NIGHT).unwrap();
        assert!(p.check("E1", Day::Tuesday, Shift::MORNING).unwrap().is_accepted());
    }

    #[test]
    fn test_rejected_assign_leaves_grid_untouched() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        let before = p.grid().clone();

        let d = p.assign("E1", Day::Tuesday, Shift::MORNING).unwrap();
        assert_eq!(reason(d), Some(RejectReason::NightBeforeMorning));
        assert_eq!(p.grid(), &before);
    }

    #[test]
    fn test_held_afternoon_still_blocks_morning_after_rest_lifts() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        p.assign("E1", Day::Tuesday, Shift::AFTERNOON).unwrap();
        p.unassign("E1", Day::Monday, Shift::NIGHT).unwrap();
        assert_eq!(
            reason(p.check("E1", Day::Tuesday, Shift::MORNING).unwrap()),
            Some(RejectReason::ConsecutiveShift)
        );
    }

    #[test]
    fn test_rest_lifted_after_removal() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        assert!(!p.check("E1", Day::Tuesday, Shift::MORNING).unwrap().is_accepted());
        p.unassign("E1", Day::Monday, Shift::NIGHT).unwrap();
        assert!(p.assign("E1", Day::Tuesday, Shift::MORNING).unwrap().is_accepted());
    }

    #[test]
    fn test_unknown_person_is_error_not_rejection() {
        let mut p = planner();
        assert!(matches!(
            p.assign("Z1", Day::Monday, Shift::NIGHT),
            Err(ScheduleError::UnknownPerson(_))
        ));
        assert!(p.check("Z1", Day::Monday, Shift::NIGHT).is_err());
        assert!(p.unassign("Z1", Day::Monday, Shift::NIGHT).is_err());
        assert!(p.grid().is_empty());
    }

    #[test]
    fn test_invalid_roster_refused() {
        let roster = Roster::new(vec![Person::nurse("E1"), Person::nurse("E1")]);
        match WeekPlanner::new(roster) {
            Err(ScheduleError::InvalidRoster(errors)) => {
                assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
            }
            other => panic!("expected InvalidRoster, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_assign_is_rejected_and_grid_unchanged() {
        let mut p = planner();
        p.assign("D1", Day::Friday, Shift::MORNING).unwrap();
        let d = p.assign("D1", Day::Friday, Shift::MORNING).unwrap();
        assert_eq!(reason(d), Some(RejectReason::DuplicateShift));
        assert_eq!(p.grid().cell(Day::Friday, Shift::MORNING), ["D1"]);
    }

    #[test]
    fn test_move_is_validated_without_source() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::MORNING).unwrap();

        // Morning → Afternoon on the same day only clashes with itself.
        let d = p
            .move_assignment(
                "E1",
                Slot::new(Day::Monday, Shift::MORNING),
                Slot::new(Day::Monday, Shift::AFTERNOON),
            )
            .unwrap();
        assert!(d.is_accepted());
        assert!(!p.grid().contains("E1", Day::Monday, Shift::MORNING));
        assert!(p.grid().contains("E1", Day::Monday, Shift::AFTERNOON));
        assert_eq!(
            p.index().slots_for("E1"),
            [Slot::new(Day::Monday, Shift::AFTERNOON)]
        );
    }

    #[test]
    fn test_rejected_move_keeps_source() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        p.assign("E1", Day::Wednesday, Shift::TWENTY_FOUR).unwrap();

        let d = p
            .move_assignment(
                "E1",
                Slot::new(Day::Monday, Shift::NIGHT),
                Slot::new(Day::Thursday, Shift::NIGHT),
            )
            .unwrap();
        assert_eq!(reason(d), Some(RejectReason::TwentyFourBlackout));
        assert!(p.grid().contains("E1", Day::Monday, Shift::NIGHT));
        assert!(!p.grid().contains("E1", Day::Thursday, Shift::NIGHT));
    }

    #[test]
    fn test_move_to_same_slot_is_noop() {
        let mut p = planner();
        p.assign("E2", Day::Sunday, Shift::NIGHT).unwrap();
        let slot = Slot::new(Day::Sunday, Shift::NIGHT);
        assert!(p.move_assignment("E2", slot, slot).unwrap().is_accepted());
        assert_eq!(p.grid().assignment_count(), 1);
    }

    #[test]
    fn test_move_to_same_unheld_slot_assigns() {
        let mut p = planner();
        let slot = Slot::new(Day::Monday, Shift::NIGHT);
        assert!(p.move_assignment("E1", slot, slot).unwrap().is_accepted());
        assert!(p.grid().contains("E1", Day::Monday, Shift::NIGHT));

        // Same-slot move for an unheld slot goes through the rules
        p.assign("E2", Day::Monday, Shift::NIGHT).unwrap();
        let morning = Slot::new(Day::Tuesday, Shift::MORNING);
        let d = p.move_assignment("E2", morning, morning).unwrap();
        assert_eq!(reason(d), Some(RejectReason::NightBeforeMorning));
        assert!(!p.grid().contains("E2", Day::Tuesday, Shift::MORNING));
    }

    #[test]
    fn test_scheduled_people_follow_current_grid() {
        let mut p = planner();
        p.assign("E3", Day::Tuesday, Shift::MORNING).unwrap();
        p.assign("D2", Day::Monday, Shift::NIGHT).unwrap();
        p.assign("E3", Day::Friday, Shift::NIGHT).unwrap();

        let ids: Vec<&str> = p
            .scheduled_people()
            .into_iter()
            .map(|person| person.id.as_str())
            .collect();
        assert_eq!(ids, vec!["D2", "E3"]);

        p.unassign("D2", Day::Monday, Shift::NIGHT).unwrap();
        let ids: Vec<&str> = p
            .scheduled_people()
            .into_iter()
            .map(|person| person.id.as_str())
            .collect();
        assert_eq!(ids, vec!["E3"]);
        assert_eq!(p.scheduled_people()[0].role, Role::Nurse);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        p.assign("D1", Day::Saturday, Shift::TWELVE_NIGHT).unwrap();
        p.reset();
        assert!(p.grid().is_empty());
        assert!(p.index().is_empty());
        assert!(p.scheduled_people().is_empty());
        assert!(p.assign("E1", Day::Tuesday, Shift::MORNING).unwrap().is_accepted());
    }

    #[test]
    fn test_summary_reflects_grid() {
        let mut p = planner();
        p.assign("D3", Day::Monday, Shift::TWENTY_FOUR).unwrap();
        p.assign("E1", Day::Monday, Shift::TWENTY_FOUR).unwrap();
        let s = p.summary();
        assert_eq!(s.load("D3").unwrap().booked_hours, 24);
        assert_eq!(s.staffing_at(Day::Monday, Shift::TWENTY_FOUR).physicians, 1);
        assert_eq!(s.staffing_at(Day::Monday, Shift::TWENTY_FOUR).nurses, 1);
    }

    #[test]
    fn test_config_is_applied() {
        let config = RuleConfig::default().with_twelve_hour_rest_days(0);
        let mut p = WeekPlanner::with_config(Roster::sample(), config).unwrap();
        p.assign("E5", Day::Monday, Shift::TWELVE_DAY).unwrap();
        assert!(p.assign("E5", Day::Tuesday, Shift::MORNING).unwrap().is_accepted());
    }

    #[test]
    fn test_export_rows_use_names() {
        let mut p = planner();
        p.assign("E1", Day::Monday, Shift::NIGHT).unwrap();
        let rows = p.grid().rows(p.roster());
        assert_eq!(rows[2].day, Day::Monday);
        assert_eq!(rows[2].shift, Shift::NIGHT);
        assert_eq!(rows[2].names, vec!["Ana Pérez".to_string()]);
    }
}
