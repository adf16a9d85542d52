//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! `OccurrenceDto` is the per-day record shape shared by the dense calendar
//! and sparse upcoming endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{weekday_index, Occurrence, RecurringSchedule};

/// Team payload nested in an occurrence record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Location payload nested in an occurrence record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: i64,
    pub name: String,
}

/// One resolved day, as consumed by the presentation layer.
///
/// Excluded days keep their display fields populated (with
/// `has_schedule=false, is_excluded=true`) so callers can render
/// "normally X, but cancelled today".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceDto {
    /// ISO-8601 calendar date
    pub date: NaiveDate,
    /// Weekday index, 0 = Sunday .. 6 = Saturday
    pub weekday: u8,
    pub has_schedule: bool,
    pub is_excluded: bool,
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub team: Option<TeamDto>,
    pub location: Option<LocationDto>,
}

impl From<&Occurrence> for OccurrenceDto {
    fn from(occurrence: &Occurrence) -> Self {
        let matched = occurrence.matched.as_ref();
        Self {
            date: occurrence.date,
            weekday: weekday_index(occurrence.date),
            has_schedule: occurrence.has_schedule(),
            is_excluded: occurrence.is_excluded,
            name: matched.map(|s| s.name.clone()),
            description: matched.and_then(|s| s.description.clone()),
            start_time: matched.and_then(|s| s.start_time.clone()),
            end_time: matched.and_then(|s| s.end_time.clone()),
            team: matched.and_then(|s| {
                s.owner_team.as_ref().map(|t| TeamDto {
                    id: t.id.value(),
                    name: t.name.clone(),
                    slug: t.slug.clone(),
                })
            }),
            location: matched.and_then(|s| {
                s.location.as_ref().map(|l| LocationDto {
                    id: l.id.value(),
                    name: l.name.clone(),
                })
            }),
        }
    }
}

/// Query parameters for dense calendar endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarQuery {
    /// Reference "today"; defaults to the current UTC date at the boundary.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Window length in days (default 7, capped at 31)
    #[serde(default)]
    pub days: Option<u32>,
    /// Whole weeks to shift the window start forward (negatives clamp to 0,
    /// capped at 52)
    #[serde(default)]
    pub week_offset: Option<i64>,
}

/// Query parameters for sparse upcoming endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpcomingQuery {
    /// Reference "today"; defaults to the current UTC date at the boundary.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Horizon in days to scan (default 14, capped at 90)
    #[serde(default)]
    pub horizon: Option<u32>,
}

/// Dense calendar response: exactly `days` records in date order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub start: NaiveDate,
    pub days: u32,
    pub occurrences: Vec<OccurrenceDto>,
}

/// Sparse upcoming response: confirmed occurrences only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingResponse {
    pub occurrences: Vec<OccurrenceDto>,
    pub total: usize,
}

/// Schedule list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    pub schedules: Vec<RecurringSchedule>,
    pub total: usize,
}

/// Exception dates of one schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionListResponse {
    pub schedule_id: i64,
    pub excluded_dates: Vec<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub repository: String,
}
