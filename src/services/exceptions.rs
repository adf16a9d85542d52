//! Exception-date overlay.
//!
//! Exceptions suppress a single date of an otherwise-matching schedule
//! without altering the recurrence rule. Only discrete dates are supported;
//! there are no range exclusions.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::{ScheduleException, ScheduleId};

/// Indexed exception lookup for one resolution pass.
///
/// Built once from the repository snapshot; duplicate
/// (`schedule_id`, `excluded_date`) pairs collapse.
#[derive(Debug, Clone, Default)]
pub struct ExceptionSet {
    by_schedule: HashMap<ScheduleId, HashSet<NaiveDate>>,
}

impl ExceptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_exceptions(exceptions: &[ScheduleException]) -> Self {
        let mut by_schedule: HashMap<ScheduleId, HashSet<NaiveDate>> = HashMap::new();
        for exception in exceptions {
            by_schedule
                .entry(exception.schedule_id)
                .or_default()
                .insert(exception.excluded_date);
        }
        Self { by_schedule }
    }

    /// Exact-date membership test against one schedule's exception set.
    pub fn is_excluded(&self, schedule_id: ScheduleId, date: NaiveDate) -> bool {
        self.by_schedule
            .get(&schedule_id)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Total number of distinct exception dates held.
    pub fn len(&self) -> usize {
        self.by_schedule.values().map(|d| d.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_schedule.is_empty()
    }
}
