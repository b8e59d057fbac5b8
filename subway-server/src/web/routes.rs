//! HTTP route handlers.

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::{Line, LineId, StationId};
use crate::store::StoreError;

use super::dto::*;
use super::error::AppError;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(show_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(delete_section),
        )
        .route("/paths", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationResult>), AppError> {
    let station = state.stations.create(req.name).await?;
    Ok((StatusCode::CREATED, Json(station.into())))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResult>> {
    let stations = state.stations.find_all().await;
    Json(stations.into_iter().map(StationResult::from).collect())
}

async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<StationId>,
) -> Result<StatusCode, AppError> {
    state.sections.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line, optionally with its first section.
///
/// If the first section is rejected the line is removed again, so a failed
/// request leaves nothing behind.
async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<CreateLineRequest>,
) -> Result<(StatusCode, Json<LineResult>), AppError> {
    let initial = req.initial_section().map_err(|message| AppError::BadRequest {
        message: message.to_string(),
    })?;

    let mut line = state.lines.create(req.name, req.color).await?;

    if let Some(section) = initial {
        let added = state
            .sections
            .add_section(
                line.id(),
                section.up_station_id,
                section.down_station_id,
                section.distance,
            )
            .await;
        match added {
            Ok(updated) => line = updated,
            Err(e) => {
                if let Err(cleanup) = state.lines.delete(line.id()).await {
                    warn!(line = %line.id(), error = %cleanup, "failed to discard new line");
                }
                return Err(e.into());
            }
        }
    }

    let result = line_result(&state, &line).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResult>>, AppError> {
    let names = station_lookup(&state).await;
    let lines = state.lines.find_all().await;

    let results = lines
        .iter()
        .map(|line| to_line_result(line, &names))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Json(results))
}

async fn show_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<Json<LineResult>, AppError> {
    let line = state.lines.find_by_id(id).await?;
    Ok(Json(line_result(&state, &line).await?))
}

async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<UpdateLineRequest>,
) -> Result<Json<LineResult>, AppError> {
    let line = state.lines.update(id, req.name, req.color).await?;
    Ok(Json(line_result(&state, &line).await?))
}

async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
) -> Result<StatusCode, AppError> {
    state.lines.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResult>, AppError> {
    let line = state
        .sections
        .add_section(id, req.up_station_id, req.down_station_id, req.distance)
        .await?;
    Ok(Json(line_result(&state, &line).await?))
}

async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<LineId>,
    Query(query): Query<DeleteSectionQuery>,
) -> Result<StatusCode, AppError> {
    state.sections.delete_section(id, query.station_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_path(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Result<Json<PathResult>, AppError> {
    let response = state.paths.find_path(query.source, query.target).await?;
    Ok(Json(response.into()))
}

/// Station id → response lookup over every registered station.
async fn station_lookup(state: &AppState) -> HashMap<StationId, StationResult> {
    state
        .stations
        .find_all()
        .await
        .into_iter()
        .map(|s| (s.id, StationResult::from(s)))
        .collect()
}

async fn line_result(state: &AppState, line: &Line) -> Result<LineResult, AppError> {
    let names = station_lookup(state).await;
    to_line_result(line, &names)
}

fn to_line_result(
    line: &Line,
    names: &HashMap<StationId, StationResult>,
) -> Result<LineResult, AppError> {
    let stations = line
        .ordered_station_ids()?
        .into_iter()
        .map(|id| {
            names
                .get(&id)
                .cloned()
                .ok_or(StoreError::StationNotFound(id))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(LineResult::new(line, stations))
}
