//! In-memory repository for unit testing, local development and
//! seed-file deployments.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::db::repository::{
    ErrorContext, RepositoryError, RepositoryResult, ScheduleRepository,
};
use crate::models::{
    LocationRef, RecurringSchedule, ScheduleException, ScheduleId, Scope, TeamRef,
};

#[derive(Debug, Default)]
struct Inner {
    schedules: BTreeMap<ScheduleId, RecurringSchedule>,
    // BTreeSet keeps exception dates deduplicated and ascending.
    exceptions: BTreeMap<ScheduleId, BTreeSet<NaiveDate>>,
}

/// Thread-safe in-memory implementation of [`ScheduleRepository`].
///
/// Each read method takes the lock once and returns a consistent view of
/// the store at that moment. Callers making several reads (the resolver
/// lists schedules, then exceptions per schedule) may interleave with
/// writers between calls.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: RwLock<Inner>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored schedules.
    pub fn schedule_count(&self) -> usize {
        self.inner.read().schedules.len()
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn list_schedules(&self, scope: Scope) -> RepositoryResult<Vec<RecurringSchedule>> {
        let inner = self.inner.read();
        Ok(inner
            .schedules
            .values()
            .filter(|s| s.in_scope(scope))
            .cloned()
            .collect())
    }

    async fn get_schedule(&self, id: ScheduleId) -> RepositoryResult<RecurringSchedule> {
        let inner = self.inner.read();
        inner.schedules.get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Schedule {} not found", id),
                ErrorContext::new("get_schedule")
                    .with_entity("schedule")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_exceptions(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<NaiveDate>> {
        let inner = self.inner.read();
        Ok(inner
            .exceptions
            .get(&schedule_id)
            .map(|dates| dates.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn list_teams(&self) -> RepositoryResult<Vec<TeamRef>> {
        let inner = self.inner.read();
        let mut seen = HashSet::new();
        Ok(inner
            .schedules
            .values()
            .filter_map(|s| s.owner_team.clone())
            .filter(|t| seen.insert(t.id))
            .collect())
    }

    async fn list_locations(&self) -> RepositoryResult<Vec<LocationRef>> {
        let inner = self.inner.read();
        let mut seen = HashSet::new();
        Ok(inner
            .schedules
            .values()
            .filter_map(|s| s.location.clone())
            .filter(|l| seen.insert(l.id))
            .collect())
    }

    async fn store_schedule(&self, schedule: RecurringSchedule) -> RepositoryResult<ScheduleId> {
        if schedule.weekday > 6 {
            return Err(RepositoryError::validation_with_context(
                format!("weekday {} outside 0..=6", schedule.weekday),
                ErrorContext::new("store_schedule")
                    .with_entity("schedule")
                    .with_entity_id(schedule.id),
            ));
        }
        let id = schedule.id;
        self.inner.write().schedules.insert(id, schedule);
        Ok(id)
    }

    async fn store_exception(&self, exception: ScheduleException) -> RepositoryResult<()> {
        let mut inner = self.inner.write();
        if !inner.schedules.contains_key(&exception.schedule_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Schedule {} not found", exception.schedule_id),
                ErrorContext::new("store_exception")
                    .with_entity("schedule")
                    .with_entity_id(exception.schedule_id),
            ));
        }
        inner
            .exceptions
            .entry(exception.schedule_id)
            .or_default()
            .insert(exception.excluded_date);
        Ok(())
    }

    async fn remove_exception(&self, exception: ScheduleException) -> RepositoryResult<()> {
        let mut inner = self.inner.write();
        if let Some(dates) = inner.exceptions.get_mut(&exception.schedule_id) {
            dates.remove(&exception.excluded_date);
        }
        Ok(())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
