// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Official (verified) trails served from the bundled catalog.

use crate::models::{Category, Difficulty, LatLng};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Trail {
    pub id: String,
    pub name: String,
    pub difficulty: Difficulty,
    pub length_km: f64,
    /// Trailhead
    pub start: LatLng,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<LatLng>>,
    pub category: Category,
}
