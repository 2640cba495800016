// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SenderoSV API Server
//!
//! Persists community trails, hazard alerts and SOS beacons for the
//! SenderoSV map client.

use anyhow::Context;
use sendero_sv::{
    config::Config,
    db::Store,
    services::{RoutePlanner, TrailCatalog},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging for GCP
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        store = ?config.store_backend,
        "Starting SenderoSV API"
    );

    let store = Store::from_config(&config)
        .await
        .context("Failed to initialize store")?;

    tracing::info!(path = %config.routes_catalog_path, "Loading official routes");
    let catalog = TrailCatalog::load_from_file(&config.routes_catalog_path)
        .context("Failed to load official routes")?;
    tracing::info!(count = catalog.trails().len(), "Official routes loaded");

    let planner = RoutePlanner::from_config(&config).context("Failed to build route planner")?;
    if !planner.can_snap() {
        tracing::warn!("ORS_API_KEY not set; drawn routes will use straight-line paths");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        store,
        catalog,
        planner,
    });

    let app = sendero_sv::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sendero_sv=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
