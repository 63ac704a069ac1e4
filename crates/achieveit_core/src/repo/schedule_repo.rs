//! Schedule repository contract and in-memory implementation.
//!
//! # Invariants
//! - `list` and `list_for_date` return schedules in insertion order.
//! - `distinct_due_dates` yields each date once no matter how many
//!   schedules share it.

use crate::model::schedule::{Schedule, ScheduleId};
use crate::repo::{RepoError, RepoResult};
use std::collections::BTreeSet;

/// Repository interface for schedule operations. No edit path exists;
/// schedules are only created and removed.
pub trait ScheduleRepository {
    /// Appends one schedule and returns its stable id.
    fn add(&mut self, schedule: Schedule) -> ScheduleId;
    /// Gets one schedule by id.
    fn get(&self, id: ScheduleId) -> Option<&Schedule>;
    /// All schedules in insertion order.
    fn list(&self) -> &[Schedule];
    /// Schedules due on the given calendar day, in insertion order.
    fn list_for_date(&self, date: &str) -> Vec<&Schedule>;
    /// Every distinct due date present in the collection.
    fn distinct_due_dates(&self) -> BTreeSet<String>;
    /// Removes one schedule and returns it.
    fn remove(&mut self, id: ScheduleId) -> RepoResult<Schedule>;
}

/// Vec-backed schedule repository holding all calendar state for one
/// screen.
#[derive(Debug, Default)]
pub struct MemScheduleRepository {
    schedules: Vec<Schedule>,
}

impl MemScheduleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleRepository for MemScheduleRepository {
    fn add(&mut self, schedule: Schedule) -> ScheduleId {
        let id = schedule.id;
        self.schedules.push(schedule);
        id
    }

    fn get(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|schedule| schedule.id == id)
    }

    fn list(&self) -> &[Schedule] {
        &self.schedules
    }

    fn list_for_date(&self, date: &str) -> Vec<&Schedule> {
        self.schedules
            .iter()
            .filter(|schedule| schedule.due_date == date)
            .collect()
    }

    fn distinct_due_dates(&self) -> BTreeSet<String> {
        self.schedules
            .iter()
            .map(|schedule| schedule.due_date.clone())
            .collect()
    }

    fn remove(&mut self, id: ScheduleId) -> RepoResult<Schedule> {
        let index = self
            .schedules
            .iter()
            .position(|schedule| schedule.id == id)
            .ok_or(RepoError::NotFound(id))?;
        Ok(self.schedules.remove(index))
    }
}
