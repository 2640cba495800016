//! Database layer (in-memory or Firestore).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

use crate::config::{Config, StoreBackend};
use crate::error::AppError;
use crate::models::{Alert, Point, SosRecord};

/// Collection names as constants.
pub mod collections {
    pub const POINTS: &str = "points";
    pub const ALERTS: &str = "alerts";
    pub const SOS_EVENTS: &str = "sos_events";
}

/// Persistence backend selected at startup.
#[derive(Clone)]
pub enum Store {
    Memory(MemoryStore),
    Firestore(FirestoreDb),
}

impl Store {
    /// Build the store named by `STORE_BACKEND`.
    pub async fn from_config(config: &Config) -> Result<Self, AppError> {
        match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store; data is lost on restart");
                Ok(Self::memory())
            }
            StoreBackend::Firestore => {
                let project_id = config.gcp_project_id.as_deref().ok_or_else(|| {
                    AppError::Database("GCP_PROJECT_ID is required for Firestore".to_string())
                })?;
                Ok(Self::Firestore(FirestoreDb::new(project_id).await?))
            }
        }
    }

    /// Fresh, empty in-memory store.
    pub fn memory() -> Self {
        Self::Memory(MemoryStore::default())
    }

    // ─── Points ──────────────────────────────────────────────────

    /// All points, oldest first.
    pub async fn list_points(&self) -> Result<Vec<Point>, AppError> {
        match self {
            Self::Memory(m) => Ok(m.list_points()),
            Self::Firestore(f) => f.list_points().await,
        }
    }

    pub async fn get_point(&self, id: &str) -> Result<Option<Point>, AppError> {
        match self {
            Self::Memory(m) => Ok(m.get_point(id)),
            Self::Firestore(f) => f.get_point(id).await,
        }
    }

    /// Create or replace a point keyed by its id.
    pub async fn put_point(&self, point: &Point) -> Result<(), AppError> {
        match self {
            Self::Memory(m) => {
                m.put_point(point);
                Ok(())
            }
            Self::Firestore(f) => f.put_point(point).await,
        }
    }

    /// Delete a point. Returns `false` if it did not exist.
    pub async fn delete_point(&self, id: &str) -> Result<bool, AppError> {
        match self {
            Self::Memory(m) => Ok(m.delete_point(id)),
            Self::Firestore(f) => f.delete_point(id).await,
        }
    }

    // ─── Alerts ──────────────────────────────────────────────────

    /// Every stored alert, unfiltered.
    pub async fn list_alerts(&self) -> Result<Vec<Alert>, AppError> {
        match self {
            Self::Memory(m) => Ok(m.list_alerts()),
            Self::Firestore(f) => f.list_alerts().await,
        }
    }

    pub async fn put_alert(&self, alert: &Alert) -> Result<(), AppError> {
        match self {
            Self::Memory(m) => {
                m.put_alert(alert);
                Ok(())
            }
            Self::Firestore(f) => f.put_alert(alert).await,
        }
    }

    // ─── SOS ─────────────────────────────────────────────────────

    pub async fn put_sos(&self, record: &SosRecord) -> Result<(), AppError> {
        match self {
            Self::Memory(m) => {
                m.put_sos(record);
                Ok(())
            }
            Self::Firestore(f) => f.put_sos(record).await,
        }
    }
}
