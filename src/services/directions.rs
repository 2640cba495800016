// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OpenRouteService directions client for snapping drawn paths to trails.
//!
//! Handles:
//! - Hiking directions requests in GeoJSON format
//! - Conversion between `{lat, lng}` and GeoJSON `[lng, lat]` order

use crate::error::AppError;
use crate::geodesy::latlng_from_position;
use crate::models::LatLng;
use geojson::GeoJson;
use serde::Serialize;
use std::time::Duration;

const HIKING_PROFILE: &str = "foot-hiking";

/// Hiking directions API client.
#[derive(Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct DirectionsRequest {
    coordinates: Vec<[f64; 2]>,
    elevation: bool,
    instructions: bool,
}

impl DirectionsClient {
    /// Create a new client. `timeout` bounds each request end to end.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Ask for a hiking route through `waypoints`, returned as trail geometry.
    pub async fn hiking_route(&self, waypoints: &[LatLng]) -> Result<Vec<LatLng>, AppError> {
        let url = format!(
            "{}/v2/directions/{}/geojson",
            self.base_url, HIKING_PROFILE
        );

        let body = DirectionsRequest {
            coordinates: waypoints.iter().map(|p| [p.lng, p.lat]).collect(),
            elevation: false,
            instructions: false,
        };

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Routing(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Routing(format!("HTTP {}: {}", status, text)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Routing(e.to_string()))?;
        parse_route_geometry(&text)
    }
}

/// Extract the first feature's LineString from a directions response.
pub fn parse_route_geometry(body: &str) -> Result<Vec<LatLng>, AppError> {
    let geojson: GeoJson = body
        .parse()
        .map_err(|e: geojson::Error| AppError::Routing(format!("Invalid GeoJSON: {}", e)))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(AppError::Routing(
            "Expected a FeatureCollection".to_string(),
        ));
    };

    let geometry = collection
        .features
        .into_iter()
        .next()
        .and_then(|f| f.geometry)
        .ok_or_else(|| AppError::Routing("Response has no route geometry".to_string()))?;

    let geojson::Value::LineString(positions) = geometry.value else {
        return Err(AppError::Routing(
            "Route geometry is not a LineString".to_string(),
        ));
    };

    let path = positions
        .iter()
        .map(|p| latlng_from_position(p))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| AppError::Routing("Malformed route coordinate".to_string()))?;

    if path.len() < 2 {
        return Err(AppError::Routing("Route geometry is empty".to_string()));
    }
    Ok(path)
}
