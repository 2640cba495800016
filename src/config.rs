//! Application configuration loaded from environment variables.
//!
//! The routing API key is read from the environment at startup and never
//! shipped to the client.

use std::env;
use std::time::Duration;

const DEFAULT_PORT: u16 = 5174;
const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
const DEFAULT_ROUTING_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ALERT_WINDOW_HOURS: i64 = 48;
/// One year.
const MAX_ALERT_WINDOW_HOURS: i64 = 24 * 366;
const DEFAULT_ROUTES_CATALOG_PATH: &str = "data/official_routes.geojson";

/// Where points, alerts and SOS records are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process memory; lost on restart.
    Memory,
    /// Google Cloud Firestore.
    Firestore,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Ok(Self::Memory),
            "firestore" => Ok(Self::Firestore),
            other => Err(ConfigError::Invalid {
                var: "STORE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Persistence backend
    pub store_backend: StoreBackend,
    /// GCP project ID (required for the Firestore backend)
    pub gcp_project_id: Option<String>,
    /// OpenRouteService API key; snapping is disabled when absent
    pub ors_api_key: Option<String>,
    /// OpenRouteService base URL
    pub ors_base_url: String,
    /// Timeout for a single directions request
    pub routing_timeout: Duration,
    /// How far back alert listings reach
    pub alert_window_hours: i64,
    /// GeoJSON file holding the official routes
    pub routes_catalog_path: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_url: "http://localhost:5173".to_string(),
            store_backend: StoreBackend::Memory,
            gcp_project_id: None,
            ors_api_key: None,
            ors_base_url: DEFAULT_ORS_BASE_URL.to_string(),
            routing_timeout: Duration::from_secs(DEFAULT_ROUTING_TIMEOUT_SECS),
            alert_window_hours: DEFAULT_ALERT_WINDOW_HOURS,
            routes_catalog_path: DEFAULT_ROUTES_CATALOG_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let store_backend = match non_empty_var("STORE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::Memory,
        };

        let gcp_project_id = non_empty_var("GCP_PROJECT_ID");
        if store_backend == StoreBackend::Firestore && gcp_project_id.is_none() {
            return Err(ConfigError::Missing("GCP_PROJECT_ID"));
        }

        let alert_window_hours = parse_var("ALERT_WINDOW_HOURS", DEFAULT_ALERT_WINDOW_HOURS)?;
        if !(1..=MAX_ALERT_WINDOW_HOURS).contains(&alert_window_hours) {
            return Err(ConfigError::Invalid {
                var: "ALERT_WINDOW_HOURS",
                value: alert_window_hours.to_string(),
            });
        }

        Ok(Self {
            port: parse_var("PORT", DEFAULT_PORT)?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            store_backend,
            gcp_project_id,
            ors_api_key: non_empty_var("ORS_API_KEY"),
            ors_base_url: non_empty_var("ORS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_ORS_BASE_URL.to_string()),
            routing_timeout: Duration::from_secs(parse_var(
                "ROUTING_TIMEOUT_SECS",
                DEFAULT_ROUTING_TIMEOUT_SECS,
            )?),
            alert_window_hours,
            routes_catalog_path: non_empty_var("ROUTES_CATALOG_PATH")
                .unwrap_or_else(|| DEFAULT_ROUTES_CATALOG_PATH.to_string()),
        })
    }
}

/// Read a variable, treating blank values as unset.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match non_empty_var(name) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var: name,
            value: raw,
        }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so everything touching them lives in one test.
    #[test]
    fn test_config_from_env() {
        env::set_var("PORT", "9090");
        env::set_var("STORE_BACKEND", "memory");
        env::set_var("ORS_API_KEY", "  ");
        env::set_var("ALERT_WINDOW_HOURS", "24");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.port, 9090);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.ors_api_key, None);
        assert_eq!(config.alert_window_hours, 24);
        assert_eq!(config.routing_timeout, Duration::from_secs(10));

        env::set_var("STORE_BACKEND", "firestore");
        env::remove_var("GCP_PROJECT_ID");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Missing("GCP_PROJECT_ID"))
        ));

        env::set_var("STORE_BACKEND", "memory");
        env::set_var("ALERT_WINDOW_HOURS", "0");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid {
                var: "ALERT_WINDOW_HOURS",
                ..
            })
        ));

        env::set_var("ALERT_WINDOW_HOURS", "10000000000");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid {
                var: "ALERT_WINDOW_HOURS",
                ..
            })
        ));

        env::set_var("ALERT_WINDOW_HOURS", "48");
        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid { var: "PORT", .. })
        ));

        for var in ["PORT", "STORE_BACKEND", "ORS_API_KEY", "ALERT_WINDOW_HOURS"] {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("Firestore".parse::<StoreBackend>().unwrap(), StoreBackend::Firestore);
        assert_eq!("mem".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("postgres".parse::<StoreBackend>().is_err());
    }
}
