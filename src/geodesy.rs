// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Path length and GeoJSON position helpers.

use crate::models::LatLng;
use geo::{Distance, Haversine};

/// Haversine length of a path in kilometers, rounded to 2 decimals.
///
/// Paths with fewer than two points have length 0.
pub fn path_length_km(path: &[LatLng]) -> f64 {
    let meters: f64 = path
        .windows(2)
        .map(|pair| Haversine.distance(geo::Point::from(pair[0]), geo::Point::from(pair[1])))
        .sum();
    round_km(meters / 1000.0)
}

/// Round a kilometer value to 2 decimals.
pub fn round_km(km: f64) -> f64 {
    (km * 100.0).round() / 100.0
}

/// Convert a GeoJSON `[lng, lat, ...]` position into a `LatLng`.
pub fn latlng_from_position(position: &[f64]) -> Option<LatLng> {
    match position {
        [lng, lat, ..] => Some(LatLng {
            lat: *lat,
            lng: *lng,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll(lat: f64, lng: f64) -> LatLng {
        LatLng { lat, lng }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let km = path_length_km(&[ll(0.0, 0.0), ll(1.0, 0.0)]);
        assert!((km - 111.2).abs() < 0.01, "got {km}");
    }

    #[test]
    fn test_san_salvador_to_boqueron() {
        // Downtown San Salvador to the El Boqueron trailhead, ~9.0 km.
        let km = path_length_km(&[ll(13.6929, -89.2182), ll(13.734, -89.290)]);
        assert!((km - 9.0).abs() < 0.01, "got {km}");
    }

    #[test]
    fn test_multi_segment_sum() {
        let km = path_length_km(&[
            ll(13.6929, -89.2182),
            ll(13.734, -89.290),
            ll(13.740, -89.285),
        ]);
        assert!((km - 9.86).abs() < 0.01, "got {km}");
    }

    #[test]
    fn test_degenerate_paths() {
        assert_eq!(path_length_km(&[]), 0.0);
        assert_eq!(path_length_km(&[ll(13.7, -89.2)]), 0.0);
        assert_eq!(path_length_km(&[ll(13.7, -89.2), ll(13.7, -89.2)]), 0.0);
    }

    #[test]
    fn test_position_order_is_lng_lat() {
        assert_eq!(latlng_from_position(&[-89.29, 13.734]), Some(ll(13.734, -89.29)));
        assert_eq!(
            latlng_from_position(&[-89.29, 13.734, 1800.0]),
            Some(ll(13.734, -89.29))
        );
        assert_eq!(latlng_from_position(&[-89.29]), None);
    }
}
