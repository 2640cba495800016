// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route drawing: tapped points become a candidate path, which is snapped to
//! trail geometry when possible and falls back to straight segments.

use crate::config::Config;
use crate::error::AppError;
use crate::geodesy::path_length_km;
use crate::models::LatLng;
use crate::services::DirectionsClient;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Points tapped on the map, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathDraft {
    points: Vec<LatLng>,
}

impl PathDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a draft as if each point had been tapped in turn.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Self {
        let mut draft = Self::new();
        for point in points {
            draft.push(point);
        }
        draft
    }

    /// Add a point. A repeat of the last point (double tap) is ignored.
    pub fn push(&mut self, point: LatLng) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Remove the last point.
    pub fn undo(&mut self) -> Option<LatLng> {
        self.points.pop()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Two distinct points are needed to ask for a route.
    pub fn is_routable(&self) -> bool {
        self.points.len() >= 2
    }
}

/// Result of planning a drawn route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PlannedPath {
    pub path: Vec<LatLng>,
    pub length_km: f64,
    /// `true` when the path follows trail geometry from the directions API
    pub snapped: bool,
}

/// Turns drafts into saveable paths.
#[derive(Clone, Default)]
pub struct RoutePlanner {
    directions: Option<DirectionsClient>,
}

impl RoutePlanner {
    pub fn new(directions: Option<DirectionsClient>) -> Self {
        Self { directions }
    }

    /// Planner with snapping enabled only when `ORS_API_KEY` is set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let directions = config
            .ors_api_key
            .clone()
            .map(|key| DirectionsClient::new(&config.ors_base_url, key, config.routing_timeout))
            .transpose()?;
        Ok(Self::new(directions))
    }

    /// Whether a directions client is configured.
    pub fn can_snap(&self) -> bool {
        self.directions.is_some()
    }

    /// Snap the draft to trails, or keep its straight segments if that fails.
    pub async fn plan(&self, draft: &PathDraft) -> Result<PlannedPath, AppError> {
        if !draft.is_routable() {
            return Err(AppError::BadRequest(
                "At least two distinct points are required".to_string(),
            ));
        }

        let snapped = match &self.directions {
            Some(client) => match client.hiking_route(draft.points()).await {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        waypoints = draft.len(),
                        "Route snapping failed, using straight-line path"
                    );
                    None
                }
            },
            None => None,
        };

        let (path, snapped) = match snapped {
            Some(path) => (path, true),
            None => (draft.points().to_vec(), false),
        };

        tracing::debug!(
            waypoints = draft.len(),
            vertices = path.len(),
            snapped,
            "Route planned"
        );

        Ok(PlannedPath {
            length_km: path_length_km(&path),
            path,
            snapped,
        })
    }
}
