//! High-level service functions over any repository implementation.
//!
//! These are the functions application code should call; they work with any
//! [`ScheduleRepository`] and add the cross-cutting steps (seed ingestion,
//! logging) that individual backends should not implement themselves.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::repository::{RepositoryResult, ScheduleRepository};
use crate::models::seed::{parse_rota_json_str, RotaSeed};
use crate::models::{LocationRef, RecurringSchedule, ScheduleId, Scope, TeamRef};

/// Verify the repository backend is reachable.
pub async fn health_check<R: ScheduleRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// All stored schedules, unscoped.
pub async fn list_schedules<R: ScheduleRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<RecurringSchedule>> {
    repo.list_schedules(Scope::All).await
}

/// One schedule by id.
pub async fn get_schedule<R: ScheduleRepository + ?Sized>(
    repo: &R,
    id: ScheduleId,
) -> RepositoryResult<RecurringSchedule> {
    repo.get_schedule(id).await
}

/// The exception dates of one schedule, ascending.
pub async fn list_exceptions<R: ScheduleRepository + ?Sized>(
    repo: &R,
    schedule_id: ScheduleId,
) -> RepositoryResult<Vec<NaiveDate>> {
    repo.list_exceptions(schedule_id).await
}

/// Distinct teams referenced by stored schedules.
pub async fn list_teams<R: ScheduleRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<TeamRef>> {
    repo.list_teams().await
}

/// Distinct locations referenced by stored schedules.
pub async fn list_locations<R: ScheduleRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<LocationRef>> {
    repo.list_locations().await
}

/// Store every schedule and exception of a parsed seed.
///
/// Returns the number of schedules stored. Schedules are stored before
/// exceptions so the exception foreign-key check can pass.
pub async fn load_seed<R: ScheduleRepository + ?Sized>(
    repo: &R,
    seed: &RotaSeed,
) -> Result<usize> {
    for schedule in &seed.schedules {
        repo.store_schedule(schedule.clone())
            .await
            .with_context(|| format!("Failed to store schedule {}", schedule.id))?;
    }
    for exception in &seed.exceptions {
        repo.store_exception(*exception)
            .await
            .with_context(|| format!("Failed to store exception for {}", exception.schedule_id))?;
    }

    log::info!(
        "Loaded seed: {} schedules, {} exceptions (checksum {})",
        seed.schedules.len(),
        seed.exceptions.len(),
        seed.checksum
    );
    Ok(seed.schedules.len())
}

/// Parse a seed JSON file and load it into the repository.
pub async fn load_seed_file<R: ScheduleRepository + ?Sized>(
    repo: &R,
    path: impl AsRef<Path>,
) -> Result<usize> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let seed = parse_rota_json_str(&content)
        .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
    load_seed(repo, &seed).await
}
