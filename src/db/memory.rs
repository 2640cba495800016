// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process store backed by `DashMap`.
//!
//! Each record carries an insertion sequence number so listings come back
//! in creation order regardless of shard layout.

use crate::models::{Alert, Point, SosRecord};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone)]
struct Entry<T> {
    seq: u64,
    value: T,
}

#[derive(Default)]
struct Inner {
    next_seq: AtomicU64,
    points: DashMap<String, Entry<Point>>,
    alerts: DashMap<String, Entry<Alert>>,
    sos_events: DashMap<String, Entry<SosRecord>>,
}

/// Memory store; clones share the same maps.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    fn next_seq(&self) -> u64 {
        self.inner.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    fn sorted<T: Clone>(map: &DashMap<String, Entry<T>>) -> Vec<T> {
        let mut entries: Vec<Entry<T>> = map.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|e| e.seq);
        entries.into_iter().map(|e| e.value).collect()
    }

    pub fn list_points(&self) -> Vec<Point> {
        Self::sorted(&self.inner.points)
    }

    pub fn get_point(&self, id: &str) -> Option<Point> {
        self.inner.points.get(id).map(|e| e.value.clone())
    }

    /// Insert or replace. Replacing keeps the original position.
    pub fn put_point(&self, point: &Point) {
        self.inner
            .points
            .entry(point.id.clone())
            .and_modify(|e| e.value = point.clone())
            .or_insert_with(|| Entry {
                seq: self.next_seq(),
                value: point.clone(),
            });
    }

    pub fn delete_point(&self, id: &str) -> bool {
        self.inner.points.remove(id).is_some()
    }

    pub fn list_alerts(&self) -> Vec<Alert> {
        Self::sorted(&self.inner.alerts)
    }

    pub fn put_alert(&self, alert: &Alert) {
        let seq = self.next_seq();
        self.inner.alerts.insert(
            alert.id.clone(),
            Entry {
                seq,
                value: alert.clone(),
            },
        );
    }

    pub fn put_sos(&self, record: &SosRecord) {
        let seq = self.next_seq();
        self.inner.sos_events.insert(
            record.id.clone(),
            Entry {
                seq,
                value: record.clone(),
            },
        );
    }

    /// Stored SOS records, oldest first.
    pub fn sos_events(&self) -> Vec<SosRecord> {
        Self::sorted(&self.inner.sos_events)
    }
}
