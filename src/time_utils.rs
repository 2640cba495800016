// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC3339 timestamp with any offset into UTC.
pub fn parse_utc_rfc3339(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_uses_z_suffix() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 14, 5, 9).unwrap();
        assert_eq!(format_utc_rfc3339(date), "2025-03-01T14:05:09.000Z");
    }

    #[test]
    fn test_parse_normalizes_offset() {
        let parsed = parse_utc_rfc3339("2025-03-01T08:05:09-06:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 3, 1, 14, 5, 9).unwrap());
        assert!(parse_utc_rfc3339("yesterday").is_none());
    }
}
