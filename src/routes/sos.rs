// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SOS beacon endpoint.

use crate::envelope::{ApiJson, ApiResponse};
use crate::error::Result;
use crate::models::{SosRecord, SosRequest};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/sos", post(send_sos))
}

/// Record an emergency beacon with the device's location.
async fn send_sos(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<SosRequest>,
) -> Result<Json<ApiResponse<SosRecord>>> {
    input.validate()?;

    let id = uuid::Uuid::new_v4().to_string();
    let record = input.into_record(id, format_utc_rfc3339(chrono::Utc::now()))?;
    state.store.put_sos(&record).await?;

    tracing::warn!(
        sos_id = %record.id,
        lat = record.lat,
        lng = record.lng,
        message = %record.message,
        "SOS received"
    );

    Ok(ApiResponse::ok(record))
}
