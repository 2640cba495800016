// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! SenderoSV: trail sharing and hiking safety for El Salvador
//!
//! This crate provides the backend API behind the SenderoSV map client:
//! community and official trails, hazard alerts, SOS beacons and
//! server-side route snapping against a hiking directions API.

pub mod config;
pub mod db;
pub mod envelope;
pub mod error;
pub mod geodesy;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Store;
use services::{RoutePlanner, TrailCatalog};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub catalog: TrailCatalog,
    pub planner: RoutePlanner,
}
