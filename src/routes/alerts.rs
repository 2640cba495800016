// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hazard report endpoints.

use crate::envelope::{ApiJson, ApiResponse};
use crate::error::Result;
use crate::models::{Alert, NewAlert};
use crate::services::AlertWindow;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/alerts", get(list_alerts).post(create_alert))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertsQuery {
    /// Only alerts for this route
    route_id: Option<String>,
}

/// Recent alerts (inside the configured window), newest first.
async fn list_alerts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AlertsQuery>,
) -> Result<Json<ApiResponse<Vec<Alert>>>> {
    let all = state.store.list_alerts().await?;
    let total = all.len();

    let window = AlertWindow::hours(state.config.alert_window_hours);
    let recent = window.select(all, chrono::Utc::now(), params.route_id.as_deref());

    tracing::debug!(
        total,
        recent = recent.len(),
        route_id = ?params.route_id,
        "Listing alerts"
    );

    Ok(ApiResponse::ok(recent))
}

/// Report a hazard on a route.
async fn create_alert(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<NewAlert>,
) -> Result<Json<ApiResponse<Alert>>> {
    input.validate()?;

    let id = uuid::Uuid::new_v4().to_string();
    let alert = input.into_alert(id, format_utc_rfc3339(chrono::Utc::now()))?;
    state.store.put_alert(&alert).await?;

    tracing::info!(
        alert_id = %alert.id,
        route_id = %alert.route_id,
        kind = ?alert.kind,
        level = ?alert.level,
        "Alert reported"
    );

    Ok(ApiResponse::ok(alert))
}
