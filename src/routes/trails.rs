// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Official routes and route planning.

use crate::envelope::{ApiJson, ApiResponse};
use crate::error::Result;
use crate::models::{LatLng, Trail};
use crate::services::{PathDraft, PlannedPath};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/routes", get(list_trails))
        .route("/api/routes/plan", post(plan_route))
}

async fn list_trails(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<Trail>>> {
    ApiResponse::ok(state.catalog.trails().to_vec())
}

#[derive(Deserialize, Validate)]
struct PlanRequest {
    /// Waypoints in tap order; the directions API caps these at 50.
    #[serde(default)]
    #[validate(length(max = 50), nested)]
    points: Vec<LatLng>,
}

/// Snap tapped points to trail geometry (or keep them as straight segments).
async fn plan_route(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<PlanRequest>,
) -> Result<Json<ApiResponse<PlannedPath>>> {
    input.validate()?;

    let draft = PathDraft::from_points(input.points);
    let planned = state.planner.plan(&draft).await?;
    Ok(ApiResponse::ok(planned))
}
