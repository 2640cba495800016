// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod alerts;
pub mod catalog;
pub mod directions;
pub mod planner;

pub use alerts::AlertWindow;
pub use catalog::{CatalogError, TrailCatalog};
pub use directions::DirectionsClient;
pub use planner::{PathDraft, PlannedPath, RoutePlanner};
