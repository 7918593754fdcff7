// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the stores and
//! the placeholder API server. Every knob has a default, so a bare
//! environment is a valid deployment; values that are present but
//! unparseable fall back to the default rather than failing startup.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Loads all application configuration from the environment.
    ///
    /// # Errors
    /// Currently infallible (every value has a default); the `Result`
    /// return keeps the startup path stable if required values are added.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            session: session::SessionConfig::from_env(),
            storage: storage::StorageConfig::from_env(),
        })
    }
}

// ============================================================
// Session configuration
// ============================================================

mod session {
    // ---
    use super::*;

    /// Session store tuning.
    #[derive(Debug, Clone)]
    pub struct SessionConfig {
        /// How long a session lives after login/signup before the expiry
        /// timer logs it out. Defaults to 30 minutes.
        pub expiry_window: Duration,

        /// Artificial delay applied to login/signup, modeling a request
        /// round trip. Defaults to 500 milliseconds.
        pub request_latency: Duration,
    }

    impl SessionConfig {
        /// Builds a [`SessionConfig`] from environment variables.
        pub fn from_env() -> Self {
            // ---
            let expiry_secs = optional_env_parse!("STOREFRONT_SESSION_TTL_SEC", u64, 1800);
            let latency_ms = optional_env_parse!("STOREFRONT_REQUEST_LATENCY_MS", u64, 500);

            Self {
                expiry_window: Duration::from_secs(expiry_secs),
                request_latency: Duration::from_millis(latency_ms),
            }
        }
    }
}
pub use session::SessionConfig;

// ============================================================
// Storage configuration
// ============================================================

mod storage {
    // ---
    use super::*;

    /// Durable storage backend selection.
    #[derive(Debug, Clone)]
    pub struct StorageConfig {
        /// Path of the JSON storage file. When unset, state lives in
        /// memory for the process lifetime only.
        pub path: Option<PathBuf>,
    }

    impl StorageConfig {
        /// Builds a [`StorageConfig`] from environment variables.
        pub fn from_env() -> Self {
            // ---
            let path = std::env::var("STOREFRONT_STORAGE_PATH")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from);

            Self { path }
        }
    }
}
pub use storage::StorageConfig;

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use anyhow::Result;
    use serial_test::serial;

    #[test]
    #[serial]
    fn session_defaults_applied() -> Result<()> {
        // ---
        std::env::remove_var("STOREFRONT_SESSION_TTL_SEC");
        std::env::remove_var("STOREFRONT_REQUEST_LATENCY_MS");

        let cfg = SessionConfig::from_env();
        assert_eq!(cfg.expiry_window.as_secs(), 1800);
        assert_eq!(cfg.request_latency.as_millis(), 500);

        Ok(())
    }

    #[test]
    #[serial]
    fn session_overrides_defaults() -> Result<()> {
        // ---
        std::env::set_var("STOREFRONT_SESSION_TTL_SEC", "60");
        std::env::set_var("STOREFRONT_REQUEST_LATENCY_MS", "0");

        let cfg = SessionConfig::from_env();
        assert_eq!(cfg.expiry_window.as_secs(), 60);
        assert_eq!(cfg.request_latency.as_millis(), 0);

        std::env::remove_var("STOREFRONT_SESSION_TTL_SEC");
        std::env::remove_var("STOREFRONT_REQUEST_LATENCY_MS");

        Ok(())
    }

    #[test]
    #[serial]
    fn unparseable_value_falls_back_to_default() -> Result<()> {
        // ---
        std::env::set_var("STOREFRONT_SESSION_TTL_SEC", "not-a-number");

        let cfg = SessionConfig::from_env();
        assert_eq!(cfg.expiry_window.as_secs(), 1800);

        std::env::remove_var("STOREFRONT_SESSION_TTL_SEC");

        Ok(())
    }

    #[test]
    #[serial]
    fn storage_path_unset_means_memory() -> Result<()> {
        // ---
        std::env::remove_var("STOREFRONT_STORAGE_PATH");

        let cfg = StorageConfig::from_env();
        assert!(cfg.path.is_none());

        Ok(())
    }

    #[test]
    #[serial]
    fn storage_path_set() -> Result<()> {
        // ---
        std::env::set_var("STOREFRONT_STORAGE_PATH", "/tmp/storefront.json");

        let cfg = StorageConfig::from_env();
        assert_eq!(cfg.path.as_deref(), Some(std::path::Path::new("/tmp/storefront.json")));

        std::env::remove_var("STOREFRONT_STORAGE_PATH");

        Ok(())
    }

    #[test]
    #[serial]
    fn app_config_from_env_success() -> Result<()> {
        // ---
        std::env::remove_var("STOREFRONT_SESSION_TTL_SEC");
        std::env::remove_var("STOREFRONT_STORAGE_PATH");

        let cfg = AppConfig::from_env()?;
        assert_eq!(cfg.session.expiry_window.as_secs(), 1800);
        assert!(cfg.storage.path.is_none());

        Ok(())
    }
}
