// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! SOS beacon records.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message stored when the client sends none.
pub const DEFAULT_SOS_MESSAGE: &str = "Emergencia solicitada";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SosStatus {
    Active,
}

/// Stored emergency record. Write-only from the client's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SosRecord {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    pub message: String,
    pub timestamp: String,
    pub status: SosStatus,
}

/// Request body for `POST /api/sos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SosRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
    #[validate(length(max = 500))]
    pub message: Option<String>,
}

impl SosRequest {
    pub fn into_record(self, id: String, timestamp: String) -> Result<SosRecord, AppError> {
        let (Some(lat), Some(lng)) = (self.lat, self.lng) else {
            return Err(AppError::BadRequest(
                "Missing required fields 'lat' and 'lng'".to_string(),
            ));
        };

        let message = self
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_SOS_MESSAGE.to_string());

        Ok(SosRecord {
            id,
            lat,
            lng,
            message,
            timestamp,
            status: SosStatus::Active,
        })
    }
}
