// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Community hazard reports scoped to a route.

use crate::error::AppError;
use crate::models::required_text;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Kind of hazard being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AlertType {
    #[serde(rename = "clima", alias = "weather")]
    Weather,
    #[serde(rename = "obstruccion", alias = "obstruction")]
    Obstruction,
    #[serde(rename = "seguridad", alias = "security")]
    Security,
    #[serde(rename = "otro", alias = "other")]
    Other,
}

/// Severity, shown as a traffic-light color in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AlertLevel {
    /// Informative
    #[serde(rename = "verde", alias = "green")]
    Green,
    /// Caution
    #[default]
    #[serde(rename = "amarillo", alias = "yellow")]
    Yellow,
    /// Danger, do not pass
    #[serde(rename = "rojo", alias = "red")]
    Red,
}

/// Stored alert record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Alert {
    pub id: String,
    pub route_id: String,
    #[serde(default)]
    pub route_name: String,
    #[serde(rename = "type")]
    pub kind: AlertType,
    pub description: String,
    #[serde(default)]
    pub level: AlertLevel,
    /// Report time (RFC3339 UTC), assigned by the server
    pub timestamp: String,
}

/// Request body for reporting an alert.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[validate(length(max = 100))]
    pub route_id: Option<String>,
    #[validate(length(max = 120))]
    pub route_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<AlertType>,
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    pub level: Option<AlertLevel>,
}

impl NewAlert {
    pub fn into_alert(self, id: String, timestamp: String) -> Result<Alert, AppError> {
        let kind = self
            .kind
            .ok_or_else(|| AppError::BadRequest("Missing required field 'type'".to_string()))?;

        Ok(Alert {
            id,
            route_id: required_text(self.route_id, "routeId")?,
            route_name: self.route_name.unwrap_or_default().trim().to_string(),
            kind,
            description: required_text(self.description, "description")?,
            level: self.level.unwrap_or_default(),
            timestamp,
        })
    }
}
