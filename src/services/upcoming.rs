//! Sparse upcoming-occurrence listing ("what's coming up, publicly").

use chrono::{Duration, NaiveDate};

use crate::models::{Occurrence, RecurringSchedule, Scope};
use crate::services::calendar_window::resolve_date;
use crate::services::exceptions::ExceptionSet;

/// List the confirmed occurrences within `horizon_days` of `start`.
///
/// Dates with no match, and dates whose winner is excluded, are omitted
/// entirely; every returned record is a display-ready, unexcluded match in
/// ascending date order. Public listings use this shape because cancelled
/// or empty days would be noise there rather than information.
pub fn build_upcoming_list(
    schedules: &[RecurringSchedule],
    exceptions: &ExceptionSet,
    scope: Scope,
    start: NaiveDate,
    horizon_days: u32,
) -> Vec<Occurrence> {
    (0..horizon_days)
        .map(|offset| {
            let date = start + Duration::days(offset as i64);
            resolve_date(schedules, exceptions, scope, date)
        })
        .filter(Occurrence::has_schedule)
        .collect()
}

#[cfg(test)]
#[path = "upcoming_tests.rs"]
mod upcoming_tests;
