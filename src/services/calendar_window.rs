//! Dense calendar-window building ("what does my week look like").

use chrono::{Duration, NaiveDate};

use crate::models::{Occurrence, RecurringSchedule, Scope};
use crate::services::exceptions::ExceptionSet;
use crate::services::selector;

/// Build a fixed-length window of consecutive dates starting at `start`.
///
/// Always returns exactly `days` records, one per calendar date in order.
/// Days without a match are present as empty placeholders; days whose
/// winning schedule is excluded keep that schedule's display fields so a
/// caller can render "normally X, but cancelled today".
pub fn build_calendar_window(
    schedules: &[RecurringSchedule],
    exceptions: &ExceptionSet,
    scope: Scope,
    start: NaiveDate,
    days: u32,
) -> Vec<Occurrence> {
    (0..days)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);
            resolve_date(schedules, exceptions, scope, date)
        })
        .collect()
}

/// Resolve a single date within a scope.
pub fn resolve_date(
    schedules: &[RecurringSchedule],
    exceptions: &ExceptionSet,
    scope: Scope,
    date: NaiveDate,
) -> Occurrence {
    match selector::select_for_date(schedules, scope, date) {
        Some(winner) => Occurrence {
            date,
            is_excluded: exceptions.is_excluded(winner.id, date),
            matched: Some(winner.clone()),
        },
        None => Occurrence::empty(date),
    }
}

#[cfg(test)]
#[path = "calendar_window_tests.rs"]
mod calendar_window_tests;
