//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Resolution endpoints
        .route("/calendar", get(handlers::get_calendar))
        .route("/teams/{team_id}/calendar", get(handlers::get_team_calendar))
        .route("/teams/{team_id}/upcoming", get(handlers::get_team_upcoming))
        .route(
            "/locations/{location_id}/calendar",
            get(handlers::get_location_calendar),
        )
        .route(
            "/locations/{location_id}/upcoming",
            get(handlers::get_location_upcoming),
        )
        // Schedule reads
        .route("/schedules", get(handlers::list_schedules))
        .route("/schedules/{schedule_id}", get(handlers::get_schedule))
        .route(
            "/schedules/{schedule_id}/exceptions",
            get(handlers::list_schedule_exceptions),
        );

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
