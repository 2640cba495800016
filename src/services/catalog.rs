// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Official route catalog loaded from GeoJSON.

use crate::geodesy::{latlng_from_position, path_length_km};
use crate::models::{Category, Difficulty, LatLng, Trail};
use geojson::GeoJson;
use std::fs;
use std::path::Path;

/// Verified trails served by `GET /api/routes`.
#[derive(Default, Clone)]
pub struct TrailCatalog {
    trails: Vec<Trail>,
}

impl TrailCatalog {
    /// Load trails from a GeoJSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load trails from a GeoJSON FeatureCollection string.
    ///
    /// Point features give the trailhead; LineString features give the full
    /// path, with the trailhead at its first coordinate.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let geojson: GeoJson = json_data
            .parse()
            .map_err(|e: geojson::Error| CatalogError::ParseError(e.to_string()))?;

        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(CatalogError::NotFeatureCollection);
        };

        let mut trails = Vec::new();

        for (index, feature) in collection.features.into_iter().enumerate() {
            let Some(name) = feature
                .property("name")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string)
            else {
                tracing::warn!(index, "Skipping route without a name");
                continue;
            };

            let id = match feature.property("id") {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Number(n)) => n.to_string(),
                _ => format!("r{}", index + 1),
            };

            let difficulty = feature
                .property("difficulty")
                .and_then(|v| serde_json::from_value::<Difficulty>(v.clone()).ok())
                .unwrap_or_default();

            let declared_length = feature.property("lengthKm").and_then(|v| v.as_f64());

            let Some(geometry) = feature.geometry else {
                tracing::warn!(name = %name, "Skipping route without geometry");
                continue;
            };
            let (start, path) = Self::convert_geometry(geometry.value)?;

            let length_km = match (&path, declared_length) {
                (_, Some(km)) => km,
                (Some(path), None) => path_length_km(path),
                (None, None) => 0.0,
            };

            trails.push(Trail {
                id,
                name,
                difficulty,
                length_km,
                start,
                path,
                category: Category::Established,
            });
        }

        tracing::info!(count = trails.len(), "Loaded official routes");
        Ok(Self { trails })
    }

    /// Convert GeoJSON geometry into a trailhead and optional path.
    fn convert_geometry(
        value: geojson::Value,
    ) -> Result<(LatLng, Option<Vec<LatLng>>), CatalogError> {
        match value {
            geojson::Value::Point(position) => {
                let start = latlng_from_position(&position).ok_or(CatalogError::BadPosition)?;
                Ok((start, None))
            }
            geojson::Value::LineString(positions) => {
                let path = positions
                    .iter()
                    .map(|p| latlng_from_position(p))
                    .collect::<Option<Vec<_>>>()
                    .ok_or(CatalogError::BadPosition)?;
                let start = *path.first().ok_or(CatalogError::BadPosition)?;
                Ok((start, Some(path)))
            }
            _ => Err(CatalogError::UnsupportedGeometry),
        }
    }

    /// Get the list of trails.
    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse GeoJSON: {0}")]
    ParseError(String),

    #[error("Expected a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    #[error("Unsupported geometry type (expected Point or LineString)")]
    UnsupportedGeometry,

    #[error("Position must have at least longitude and latitude")]
    BadPosition,
}
