//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! resolution engine and the repository service layer. "Today" is resolved
//! here, at the boundary; the engine itself never reads the clock.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    CalendarQuery, CalendarResponse, ExceptionListResponse, HealthResponse, OccurrenceDto,
    ScheduleListResponse, UpcomingQuery, UpcomingResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::{LocationId, ScheduleId, Scope, TeamId};
use crate::services::{resolver, window_clock};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const DEFAULT_WINDOW_DAYS: u32 = 7;
const MAX_WINDOW_DAYS: u32 = 31;
const DEFAULT_HORIZON_DAYS: u32 = 14;
const MAX_HORIZON_DAYS: u32 = 90;
const MAX_WEEK_OFFSET: i64 = 52;

fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Utc::now().date_naive())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Resolution Endpoints
// =============================================================================

async fn calendar_for_scope(
    state: &AppState,
    scope: Scope,
    query: CalendarQuery,
) -> Result<CalendarResponse, AppError> {
    let today = today_or(query.date);
    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS).min(MAX_WINDOW_DAYS);
    // Same cap treatment as days/horizon; negatives clamp to 0 downstream.
    let week_offset = query.week_offset.unwrap_or(0).min(MAX_WEEK_OFFSET);

    let occurrences = resolver::resolve_calendar_window(
        state.repository.as_ref(),
        scope,
        today,
        week_offset,
        days,
    )
    .await?;

    Ok(CalendarResponse {
        start: window_clock::resolve_start(today, week_offset),
        days,
        occurrences: occurrences.iter().map(OccurrenceDto::from).collect(),
    })
}

async fn upcoming_for_scope(
    state: &AppState,
    scope: Scope,
    query: UpcomingQuery,
) -> Result<UpcomingResponse, AppError> {
    let today = today_or(query.date);
    let horizon = query
        .horizon
        .unwrap_or(DEFAULT_HORIZON_DAYS)
        .min(MAX_HORIZON_DAYS);

    let occurrences =
        resolver::resolve_upcoming(state.repository.as_ref(), scope, today, horizon).await?;

    let dtos: Vec<OccurrenceDto> = occurrences.iter().map(OccurrenceDto::from).collect();
    let total = dtos.len();
    Ok(UpcomingResponse {
        occurrences: dtos,
        total,
    })
}

/// GET /v1/calendar
///
/// Dense calendar window across all schedules (dashboard view).
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<CalendarResponse> {
    Ok(Json(calendar_for_scope(&state, Scope::All, query).await?))
}

/// GET /v1/teams/{team_id}/calendar
///
/// Dense calendar window scoped to one team.
pub async fn get_team_calendar(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<CalendarResponse> {
    let scope = Scope::Team(TeamId::new(team_id));
    Ok(Json(calendar_for_scope(&state, scope, query).await?))
}

/// GET /v1/teams/{team_id}/upcoming
///
/// Sparse upcoming list for a team's public page.
pub async fn get_team_upcoming(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Query(query): Query<UpcomingQuery>,
) -> HandlerResult<UpcomingResponse> {
    let scope = Scope::Team(TeamId::new(team_id));
    Ok(Json(upcoming_for_scope(&state, scope, query).await?))
}

/// GET /v1/locations/{location_id}/calendar
///
/// Dense calendar window scoped to one location.
pub async fn get_location_calendar(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<CalendarResponse> {
    let scope = Scope::Location(LocationId::new(location_id));
    Ok(Json(calendar_for_scope(&state, scope, query).await?))
}

/// GET /v1/locations/{location_id}/upcoming
///
/// Sparse upcoming list for a location's public page.
pub async fn get_location_upcoming(
    State(state): State<AppState>,
    Path(location_id): Path<i64>,
    Query(query): Query<UpcomingQuery>,
) -> HandlerResult<UpcomingResponse> {
    let scope = Scope::Location(LocationId::new(location_id));
    Ok(Json(upcoming_for_scope(&state, scope, query).await?))
}

// =============================================================================
// Schedule Read Endpoints
// =============================================================================

/// GET /v1/schedules
///
/// List all stored schedules.
pub async fn list_schedules(State(state): State<AppState>) -> HandlerResult<ScheduleListResponse> {
    let schedules = db_services::list_schedules(state.repository.as_ref()).await?;
    let total = schedules.len();

    Ok(Json(ScheduleListResponse { schedules, total }))
}

/// GET /v1/schedules/{schedule_id}
///
/// Fetch one schedule by id.
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
) -> HandlerResult<crate::models::RecurringSchedule> {
    let schedule =
        db_services::get_schedule(state.repository.as_ref(), ScheduleId::new(schedule_id)).await?;
    Ok(Json(schedule))
}

/// GET /v1/schedules/{schedule_id}/exceptions
///
/// List the exception dates of one schedule, ascending.
pub async fn list_schedule_exceptions(
    State(state): State<AppState>,
    Path(schedule_id): Path<i64>,
) -> HandlerResult<ExceptionListResponse> {
    let id = ScheduleId::new(schedule_id);
    // Surface a 404 for unknown schedules rather than an empty list.
    db_services::get_schedule(state.repository.as_ref(), id).await?;
    let excluded_dates = db_services::list_exceptions(state.repository.as_ref(), id).await?;

    Ok(Json(ExceptionListResponse {
        schedule_id,
        excluded_dates,
    }))
}
