//! Transient per-date resolution results.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schedule::RecurringSchedule;

/// The outcome of resolving one calendar date within a scope.
///
/// Never persisted. `matched` is the winning schedule for the date
/// independent of exclusion, so an excluded day still carries the display
/// fields of the rule that would have applied ("normally X, but cancelled
/// today").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub matched: Option<RecurringSchedule>,
    pub is_excluded: bool,
}

impl Occurrence {
    /// An empty day: nothing matched, nothing excluded.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            matched: None,
            is_excluded: false,
        }
    }

    /// True when the date has a confirmed, unexcluded schedule.
    pub fn has_schedule(&self) -> bool {
        self.matched.is_some() && !self.is_excluded
    }
}
