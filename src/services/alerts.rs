// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recency filter for alert listings.

use crate::models::Alert;
use crate::time_utils::parse_utc_rfc3339;
use chrono::{DateTime, Duration, Utc};

/// Alerts older than this many hours are hidden from listings.
pub const DEFAULT_WINDOW_HOURS: i64 = 48;

/// Time window applied to alert listings at request time.
#[derive(Debug, Clone, Copy)]
pub struct AlertWindow {
    window: Duration,
}

impl Default for AlertWindow {
    fn default() -> Self {
        Self::hours(DEFAULT_WINDOW_HOURS)
    }
}

impl AlertWindow {
    /// Window of `hours`. Values past chrono's range saturate.
    pub fn hours(hours: i64) -> Self {
        Self {
            window: Duration::try_hours(hours).unwrap_or(Duration::MAX),
        }
    }

    /// Oldest timestamp still inside the window, clamped to the earliest
    /// representable time.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Keep alerts reported at or after the cutoff, optionally for one
    /// route, newest first. Unparseable timestamps are dropped.
    pub fn select(
        &self,
        alerts: Vec<Alert>,
        now: DateTime<Utc>,
        route_id: Option<&str>,
    ) -> Vec<Alert> {
        let cutoff = self.cutoff(now);

        let mut recent: Vec<(DateTime<Utc>, Alert)> = alerts
            .into_iter()
            .filter(|a| route_id.map_or(true, |id| a.route_id == id))
            .filter_map(|a| match parse_utc_rfc3339(&a.timestamp) {
                Some(ts) => Some((ts, a)),
                None => {
                    tracing::warn!(alert_id = %a.id, timestamp = %a.timestamp, "Skipping alert with invalid timestamp");
                    None
                }
            })
            .filter(|(ts, _)| *ts >= cutoff)
            .collect();

        recent.sort_by(|a, b| b.0.cmp(&a.0));
        recent.into_iter().map(|(_, a)| a).collect()
    }
}
