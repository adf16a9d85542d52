//! Canonical-schedule selection when several rules coincide on a date.

use chrono::NaiveDate;

use crate::models::{RecurringSchedule, Scope};
use crate::services::recurrence;

/// Select at most one canonical schedule for `date` within `scope`.
///
/// Candidates are narrowed to the scope, run through the recurrence
/// matcher, and tie-broken by ascending id (first-created wins). Exclusion
/// is deliberately not consulted: a cancelled winner stays the winner, so
/// cancellation is visible to callers instead of being papered over by a
/// backup rule.
pub fn select_for_date<'a>(
    schedules: &'a [RecurringSchedule],
    scope: Scope,
    date: NaiveDate,
) -> Option<&'a RecurringSchedule> {
    schedules
        .iter()
        .filter(|s| s.in_scope(scope))
        .filter(|s| recurrence::matches(s, date))
        .min_by_key(|s| s.id)
}
