//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use tracing::info;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(search_stations))
        .route("/api/stations/refresh", post(refresh_stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by district or name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let index = state.stations.read().await;
    let stations: Vec<StationResult> = index
        .search(&req.q)
        .iter()
        .map(StationResult::from)
        .collect();

    Json(StationSearchResponse {
        query: req.q,
        count: stations.len(),
        stations,
    })
}

/// Refetch the station list.
async fn refresh_stations(State(state): State<AppState>) -> Json<RefreshResponse> {
    let count = state.refresh().await;
    info!(count, "refreshed stations on request");

    Json(RefreshResponse { count })
}
