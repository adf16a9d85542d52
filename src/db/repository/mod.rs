//! Abstract storage interface for schedules and exceptions.
//!
//! The resolution engine is read-only over this trait; the write methods
//! exist for seeding and for tests. Implementations must return a
//! consistent snapshot across the calls made within one resolution pass.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{
    LocationRef, RecurringSchedule, ScheduleException, ScheduleId, Scope, TeamRef,
};

/// Read/write access to recurring schedules and their exception dates.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All schedules belonging to the scope, active and inactive alike.
    ///
    /// The matcher owns the `active` check; the repository only narrows by
    /// scope. An unknown team or location id yields an empty list, not an
    /// error ("nothing scheduled").
    async fn list_schedules(&self, scope: Scope) -> RepositoryResult<Vec<RecurringSchedule>>;

    /// Fetch one schedule by id. `NotFound` when missing.
    async fn get_schedule(&self, id: ScheduleId) -> RepositoryResult<RecurringSchedule>;

    /// The exception dates of one schedule, ascending.
    async fn list_exceptions(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<NaiveDate>>;

    /// Distinct teams referenced by stored schedules.
    async fn list_teams(&self) -> RepositoryResult<Vec<TeamRef>>;

    /// Distinct locations referenced by stored schedules.
    async fn list_locations(&self) -> RepositoryResult<Vec<LocationRef>>;

    /// Insert or replace a schedule.
    async fn store_schedule(&self, schedule: RecurringSchedule) -> RepositoryResult<ScheduleId>;

    /// Record an exception date. Idempotent per (`schedule_id`, date);
    /// `NotFound` when the schedule does not exist.
    async fn store_exception(&self, exception: ScheduleException) -> RepositoryResult<()>;

    /// Remove an exception date; a no-op when absent.
    async fn remove_exception(&self, exception: ScheduleException) -> RepositoryResult<()>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
