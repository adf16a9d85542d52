//! Repository-backed resolution entry points.
//!
//! These functions read the schedules for the scope plus their exception
//! dates from the repository and hand them to the pure window builders.
//! The repository is trusted to serve a stable view for the duration of
//! one resolution pass; nothing is cached between calls.

use chrono::NaiveDate;

use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::models::{Occurrence, RecurringSchedule, ScheduleException, Scope};
use crate::services::calendar_window::build_calendar_window;
use crate::services::exceptions::ExceptionSet;
use crate::services::upcoming::build_upcoming_list;
use crate::services::window_clock;

/// Dense window: exactly `days` records starting `week_offset` whole weeks
/// after `today` (negative offsets clamp to zero).
pub async fn resolve_calendar_window(
    repo: &dyn ScheduleRepository,
    scope: Scope,
    today: NaiveDate,
    week_offset: i64,
    days: u32,
) -> RepositoryResult<Vec<Occurrence>> {
    let (schedules, exceptions) = snapshot(repo, scope).await?;
    let start = window_clock::resolve_start(today, week_offset);
    log::debug!(
        "calendar window: scope={:?} start={} days={} candidates={}",
        scope,
        start,
        days,
        schedules.len()
    );
    Ok(build_calendar_window(
        &schedules,
        &exceptions,
        scope,
        start,
        days,
    ))
}

/// Sparse list: the confirmed occurrences within `horizon_days` of `today`.
pub async fn resolve_upcoming(
    repo: &dyn ScheduleRepository,
    scope: Scope,
    today: NaiveDate,
    horizon_days: u32,
) -> RepositoryResult<Vec<Occurrence>> {
    let (schedules, exceptions) = snapshot(repo, scope).await?;
    log::debug!(
        "upcoming list: scope={:?} start={} horizon={} candidates={}",
        scope,
        today,
        horizon_days,
        schedules.len()
    );
    Ok(build_upcoming_list(
        &schedules,
        &exceptions,
        scope,
        today,
        horizon_days,
    ))
}

async fn snapshot(
    repo: &dyn ScheduleRepository,
    scope: Scope,
) -> RepositoryResult<(Vec<RecurringSchedule>, ExceptionSet)> {
    let schedules = repo.list_schedules(scope).await?;

    let mut exceptions = Vec::new();
    for schedule in &schedules {
        for excluded_date in repo.list_exceptions(schedule.id).await? {
            exceptions.push(ScheduleException {
                schedule_id: schedule.id,
                excluded_date,
            });
        }
    }

    Ok((schedules, ExceptionSet::from_exceptions(&exceptions)))
}
