//! Schedule screen state machine.
//!
//! # Responsibility
//! - Provide add/delete entry points for the calendar tab.
//! - Derive the date-marker map consumed by the calendar widget and the
//!   per-day subset shown when a marked day is pressed.
//!
//! # Invariants
//! - A schedule with an empty (post-trim) title is never created.
//! - The marker map holds exactly one entry per distinct due date.
//! - Deleting a schedule also drops it from the active per-day display
//!   set when one is open; with no selection that part is a no-op.

use crate::model::schedule::{is_date_key, DateMarker, Schedule, ScheduleId};
use crate::repo::schedule_repo::{MemScheduleRepository, ScheduleRepository};
use log::debug;
use std::collections::BTreeMap;

/// Schedule screen facade over a schedule repository.
pub struct ScheduleScreen<R: ScheduleRepository = MemScheduleRepository> {
    repo: R,
    /// Calendar day last pressed, `None` before any selection.
    selected_date: Option<String>,
    /// Ids shown in the per-day display set (the day sheet).
    active_ids: Vec<ScheduleId>,
}

impl ScheduleScreen<MemScheduleRepository> {
    /// Creates a screen over a fresh in-memory collection.
    pub fn new() -> Self {
        Self::with_repo(MemScheduleRepository::new())
    }
}

impl Default for ScheduleScreen<MemScheduleRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ScheduleRepository> ScheduleScreen<R> {
    /// Creates a screen using the provided repository implementation.
    pub fn with_repo(repo: R) -> Self {
        Self {
            repo,
            selected_date: None,
            active_ids: Vec::new(),
        }
    }

    /// Adds a schedule due on the given calendar day.
    ///
    /// Declines (returns `None`) when `title` trims to empty. The due
    /// date is the day string the calendar reported, or empty when no day
    /// was selected yet; dateless schedules are kept but never marked.
    pub fn add_schedule(&mut self, title: &str, due_date: &str) -> Option<ScheduleId> {
        if title.trim().is_empty() {
            debug!("event=schedule_add_declined reason=empty_title");
            return None;
        }
        Some(self.repo.add(Schedule::new(title, due_date)))
    }

    /// Removes one schedule from the collection and, when a day is open,
    /// from its display set. Missing ids are a no-op.
    pub fn delete_schedule(&mut self, id: ScheduleId) -> bool {
        match self.repo.remove(id) {
            Ok(_) => {
                self.active_ids.retain(|active| *active != id);
                true
            }
            Err(err) => {
                debug!("event=schedule_delete_noop id={id} reason={err}");
                false
            }
        }
    }

    /// Derived highlight map for the calendar widget: one marker per
    /// distinct well-formed due date, regardless of how many schedules
    /// share it. Empty or malformed dates produce no marker.
    pub fn marked_dates(&self) -> BTreeMap<String, DateMarker> {
        self.repo
            .distinct_due_dates()
            .into_iter()
            .filter(|date| is_date_key(date))
            .map(|date| (date, DateMarker::dot()))
            .collect()
    }

    /// Handles a day press from the calendar widget.
    ///
    /// Records the selection and derives the schedules due that day in
    /// insertion order. A non-empty result becomes the active display
    /// set; an empty one leaves the previous set untouched, since the day
    /// sheet only opens when there is something to show.
    pub fn select_date(&mut self, date: &str) -> Vec<Schedule> {
        self.selected_date = Some(date.to_string());
        let matches: Vec<Schedule> = self
            .repo
            .list_for_date(date)
            .into_iter()
            .cloned()
            .collect();
        if !matches.is_empty() {
            self.active_ids = matches.iter().map(|schedule| schedule.id).collect();
        }
        matches
    }

    /// Day last pressed on the calendar, if any.
    pub fn selected_date(&self) -> Option<&str> {
        self.selected_date.as_deref()
    }

    /// Schedules in the active per-day display set, insertion order.
    pub fn active_schedules(&self) -> Vec<&Schedule> {
        self.active_ids
            .iter()
            .filter_map(|id| self.repo.get(*id))
            .collect()
    }

    /// All schedules in insertion order.
    pub fn schedules(&self) -> &[Schedule] {
        self.repo.list()
    }
}
