// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Saved trail records: a single location or an ordered path.

use crate::error::AppError;
use crate::geodesy::path_length_km;
use crate::models::required_text;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Upper bound on stored path vertices.
pub const MAX_PATH_POINTS: usize = 5_000;

/// A WGS84 coordinate as the map client sends it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LatLng {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl From<LatLng> for geo::Point<f64> {
    fn from(p: LatLng) -> Self {
        geo::Point::new(p.lng, p.lat)
    }
}

/// Trail difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Difficulty {
    #[default]
    #[serde(rename = "baja", alias = "low")]
    Low,
    #[serde(rename = "media", alias = "medium")]
    Medium,
    #[serde(rename = "alta", alias = "high")]
    High,
}

/// Official (established) vs community route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    #[serde(rename = "establecida", alias = "established", alias = "official")]
    Established,
    #[default]
    #[serde(
        rename = "personalizada",
        alias = "custom",
        alias = "comunidad",
        alias = "community"
    )]
    Custom,
}

/// Stored point/route record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Point {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<LatLng>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub length_km: f64,
    /// Legacy free-form tag (e.g. "mirador", "agua")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Creation time (RFC3339 UTC)
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for creating a point.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPoint {
    #[validate(length(max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    #[validate(nested)]
    pub path: Option<Vec<LatLng>>,
    #[validate(nested)]
    pub location: Option<LatLng>,
    #[validate(range(min = 0.0))]
    pub length_km: Option<f64>,
    #[serde(rename = "type")]
    #[validate(length(max = 40))]
    pub kind: Option<String>,
}

/// Request body for updating a point. Present fields replace stored ones.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PointUpdate {
    #[validate(length(max = 120))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub category: Option<Category>,
    #[validate(nested)]
    pub path: Option<Vec<LatLng>>,
    #[validate(nested)]
    pub location: Option<LatLng>,
    #[validate(range(min = 0.0))]
    pub length_km: Option<f64>,
    #[serde(rename = "type")]
    #[validate(length(max = 40))]
    pub kind: Option<String>,
}

impl NewPoint {
    /// Build the stored record, enforcing the name and geometry rules.
    pub fn into_point(self, id: String, created_at: String) -> Result<Point, AppError> {
        let mut point = Point {
            id,
            name: required_text(self.name, "name")?,
            description: self.description.unwrap_or_default().trim().to_string(),
            difficulty: self.difficulty.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            path: self.path,
            location: self.location,
            length_km: self.length_km.unwrap_or(0.0),
            kind: self.kind.filter(|k| !k.trim().is_empty()),
            created_at,
            updated_at: None,
        };
        point.normalize_geometry()?;
        Ok(point)
    }
}

impl Point {
    /// Merge an update into this record and re-check its invariants.
    pub fn apply_update(&mut self, update: PointUpdate, updated_at: String) -> Result<(), AppError> {
        if let Some(name) = update.name {
            self.name = required_text(Some(name), "name")?;
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(kind) = update.kind {
            self.kind = Some(kind).filter(|k| !k.trim().is_empty());
        }
        match (update.path, update.location) {
            (Some(path), location) => {
                // A new path moves the location to its start unless one is given,
                // and drops any length that belonged to the old path.
                self.path = Some(path);
                self.location = location;
                self.length_km = 0.0;
            }
            (None, Some(location)) => self.location = Some(location),
            (None, None) => {}
        }
        if let Some(length_km) = update.length_km {
            self.length_km = length_km;
        }

        self.normalize_geometry()?;
        self.updated_at = Some(updated_at);
        Ok(())
    }

    /// First coordinate of the record, used to center the map on it.
    pub fn start(&self) -> Option<LatLng> {
        self.path
            .as_ref()
            .and_then(|p| p.first().copied())
            .or(self.location)
    }

    fn normalize_geometry(&mut self) -> Result<(), AppError> {
        if self.path.as_ref().is_some_and(|p| p.is_empty()) {
            self.path = None;
        }

        let Some(path) = &self.path else {
            if self.location.is_none() {
                return Err(AppError::BadRequest(
                    "A point requires either a path or a location".to_string(),
                ));
            }
            return Ok(());
        };

        if path.len() > MAX_PATH_POINTS {
            return Err(AppError::BadRequest(format!(
                "Path has {} points (max {})",
                path.len(),
                MAX_PATH_POINTS
            )));
        }
        if self.location.is_none() {
            self.location = path.first().copied();
        }
        if path.len() >= 2 {
            self.length_km = path_length_km(path);
        }
        Ok(())
    }
}
