// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sendero_sv::config::Config;
use sendero_sv::db::{FirestoreDb, Store};
use sendero_sv::routes::create_router;
use sendero_sv::services::{RoutePlanner, TrailCatalog};
use sendero_sv::AppState;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Build an app around the given config, store and planner.
#[allow(dead_code)]
pub fn create_test_app_with_config(
    config: Config,
    store: Store,
    planner: RoutePlanner,
) -> (Router, Arc<AppState>) {
    let catalog = TrailCatalog::load_from_file("data/official_routes.geojson")
        .expect("Failed to load official routes - is data/ committed?");

    let state = Arc::new(AppState {
        config,
        store,
        catalog,
        planner,
    });

    (create_router(state.clone()), state)
}

/// Build an app around the given store and planner.
#[allow(dead_code)]
pub fn create_test_app_with(store: Store, planner: RoutePlanner) -> (Router, Arc<AppState>) {
    create_test_app_with_config(Config::default(), store, planner)
}

/// Create a test app with an in-memory store and no directions API.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    create_test_app_with(Store::memory(), RoutePlanner::default())
}

/// Send a request and decode the JSON body.
#[allow(dead_code)]
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
