// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod alert;
pub mod point;
pub mod sos;
pub mod trail;

pub use alert::{Alert, AlertLevel, AlertType, NewAlert};
pub use point::{Category, Difficulty, LatLng, NewPoint, Point, PointUpdate};
pub use sos::{SosRecord, SosRequest, SosStatus};
pub use trail::Trail;

use crate::error::AppError;

/// Trim a required text field, rejecting missing or blank values.
pub(crate) fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Missing required field '{}'", field)))
}
