// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Point/route CRUD endpoints.

use crate::envelope::{ApiJson, ApiResponse};
use crate::error::{AppError, Result};
use crate::models::{NewPoint, Point, PointUpdate};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/points", get(list_points).post(create_point))
        .route("/api/points/{id}", put(update_point).delete(delete_point))
}

#[derive(Serialize)]
pub struct DeletedPoint {
    pub id: String,
}

/// List all saved points, oldest first.
async fn list_points(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse<Vec<Point>>>> {
    let points = state.store.list_points().await?;
    tracing::debug!(count = points.len(), "Listing points");
    Ok(ApiResponse::ok(points))
}

/// Save a new point or drawn route.
async fn create_point(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<NewPoint>,
) -> Result<Json<ApiResponse<Point>>> {
    input.validate()?;

    let id = uuid::Uuid::new_v4().to_string();
    let point = input.into_point(id, format_utc_rfc3339(chrono::Utc::now()))?;
    state.store.put_point(&point).await?;

    tracing::info!(
        point_id = %point.id,
        name = %point.name,
        category = ?point.category,
        length_km = point.length_km,
        start = ?point.start(),
        "Point created"
    );

    Ok(ApiResponse::ok(point))
}

/// Edit a point. Fields absent from the body are left unchanged.
async fn update_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<PointUpdate>,
) -> Result<Json<ApiResponse<Point>>> {
    update.validate()?;

    let mut point = state
        .store
        .get_point(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Point {} not found", id)))?;

    point.apply_update(update, format_utc_rfc3339(chrono::Utc::now()))?;
    state.store.put_point(&point).await?;

    tracing::info!(point_id = %point.id, "Point updated");
    Ok(ApiResponse::ok(point))
}

async fn delete_point(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedPoint>>> {
    if !state.store.delete_point(&id).await? {
        return Err(AppError::NotFound(format!("Point {} not found", id)));
    }

    tracing::info!(point_id = %id, "Point deleted");
    Ok(ApiResponse::ok(DeletedPoint { id }))
}
