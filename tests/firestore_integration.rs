// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running.
//! Run with FIRESTORE_EMULATOR_HOST pointing at a local emulator.
//!
//! Ids are random, so tests only look at the documents they wrote.

use sendero_sv::models::{
    Alert, AlertLevel, AlertType, Category, Difficulty, LatLng, Point, SosRecord, SosStatus,
};
use sendero_sv::time_utils::format_utc_rfc3339;

mod common;
use common::test_db;

fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

fn test_point(id: &str) -> Point {
    let now = format_utc_rfc3339(chrono::Utc::now());
    Point {
        id: id.to_string(),
        name: "Volcán de Santa Ana".to_string(),
        description: "Cráter con laguna".to_string(),
        difficulty: Difficulty::High,
        category: Category::Custom,
        path: Some(vec![
            LatLng { lat: 13.853, lng: -89.630 },
            LatLng { lat: 13.854, lng: -89.625 },
        ]),
        location: Some(LatLng { lat: 13.853, lng: -89.630 }),
        length_km: 0.55,
        kind: None,
        created_at: now,
        updated_at: None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// POINT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_point_lifecycle() {
    require_emulator!();

    let db = test_db().await;
    let id = unique_id("point");

    assert!(db.get_point(&id).await.unwrap().is_none());

    let mut point = test_point(&id);
    db.put_point(&point).await.unwrap();

    let stored = db.get_point(&id).await.unwrap().expect("point should exist");
    assert_eq!(stored.name, "Volcán de Santa Ana");
    assert_eq!(stored.difficulty, Difficulty::High);
    assert_eq!(stored.path.as_ref().map(Vec::len), Some(2));

    point.name = "Volcán Ilamatepec".to_string();
    point.updated_at = Some(format_utc_rfc3339(chrono::Utc::now()));
    db.put_point(&point).await.unwrap();

    let listed = db.list_points().await.unwrap();
    let found: Vec<_> = listed.iter().filter(|p| p.id == id).collect();
    assert_eq!(found.len(), 1, "update should not duplicate the document");
    assert_eq!(found[0].name, "Volcán Ilamatepec");

    assert!(db.delete_point(&id).await.unwrap());
    assert!(!db.delete_point(&id).await.unwrap());
    assert!(db.get_point(&id).await.unwrap().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// ALERT AND SOS TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_alert_round_trip() {
    require_emulator!();

    let db = test_db().await;
    let id = unique_id("alert");

    let alert = Alert {
        id: id.clone(),
        route_id: "r3".to_string(),
        route_name: "El Pital".to_string(),
        kind: AlertType::Weather,
        description: "Neblina densa".to_string(),
        level: AlertLevel::Yellow,
        timestamp: format_utc_rfc3339(chrono::Utc::now()),
    };
    db.put_alert(&alert).await.unwrap();

    let alerts = db.list_alerts().await.unwrap();
    let stored = alerts
        .into_iter()
        .find(|a| a.id == id)
        .expect("alert should be listed");
    assert_eq!(stored.kind, AlertType::Weather);
    assert_eq!(stored.level, AlertLevel::Yellow);
}

#[tokio::test]
async fn test_sos_write() {
    require_emulator!();

    let db = test_db().await;
    let record = SosRecord {
        id: unique_id("sos"),
        lat: 13.734,
        lng: -89.290,
        message: "Tobillo torcido".to_string(),
        timestamp: format_utc_rfc3339(chrono::Utc::now()),
        status: SosStatus::Active,
    };

    db.put_sos(&record).await.unwrap();
}
