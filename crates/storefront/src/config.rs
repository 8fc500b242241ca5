//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: <http://localhost:3000>)
//! - `STOREFRONT_STORE_NAME` - Store name shown on the page (default: Reyana Treders)
//! - `STOREFRONT_NOTIFICATION_SECONDS` - Order notification lifetime (default: 4)
//! - `STOREFRONT_SESSION_IDLE_MINUTES` - Session lifetime since last request (default: 60)
//! - `STOREFRONT_SESSION_CAPACITY` - Most sessions held in memory (default: 10000)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reyana_core::DEFAULT_DISMISS_AFTER;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Store name rendered in the header, modals and footer
    pub store_name: String,
    /// How long the order-placed notification stays up
    pub notification_dismiss_after: Duration,
    /// Idle time after which a visitor's session is dropped
    pub session_idle_timeout: Duration,
    /// Upper bound on sessions kept in memory
    pub session_capacity: u64,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag (e.g. "production")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            store_name: "Reyana Treders".to_string(),
            notification_dismiss_after: DEFAULT_DISMISS_AFTER,
            session_idle_timeout: Duration::from_secs(60 * 60),
            session_capacity: 10_000,
            static_dir: PathBuf::from("crates/storefront/static"),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that does not
    /// parse or is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env_or("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env_or("STOREFRONT_PORT", defaults.port)?;
        let base_url = get_optional_env("STOREFRONT_BASE_URL").unwrap_or(defaults.base_url);
        let store_name = get_optional_env("STOREFRONT_STORE_NAME").unwrap_or(defaults.store_name);

        let notification_seconds = parse_env_or(
            "STOREFRONT_NOTIFICATION_SECONDS",
            defaults.notification_dismiss_after.as_secs(),
        )?;
        let notification_seconds =
            at_least_one("STOREFRONT_NOTIFICATION_SECONDS", notification_seconds)?;

        let session_idle_minutes = parse_env_or(
            "STOREFRONT_SESSION_IDLE_MINUTES",
            defaults.session_idle_timeout.as_secs() / 60,
        )?;
        let session_idle_minutes =
            at_least_one("STOREFRONT_SESSION_IDLE_MINUTES", session_idle_minutes)?;
        let session_capacity =
            parse_env_or("STOREFRONT_SESSION_CAPACITY", defaults.session_capacity)?;
        let session_capacity = at_least_one("STOREFRONT_SESSION_CAPACITY", session_capacity)?;

        let static_dir = get_optional_env("STOREFRONT_STATIC_DIR")
            .map_or(defaults.static_dir, PathBuf::from);

        let sentry_sample_rate = parse_rate("SENTRY_SAMPLE_RATE", defaults.sentry_sample_rate)?;
        let sentry_traces_sample_rate = parse_rate(
            "SENTRY_TRACES_SAMPLE_RATE",
            defaults.sentry_traces_sample_rate,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            store_name,
            notification_dismiss_after: Duration::from_secs(notification_seconds),
            session_idle_timeout: Duration::from_secs(session_idle_minutes.saturating_mul(60)),
            session_capacity,
            static_dir,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the storefront is served over HTTPS.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

fn at_least_one(key: &str, value: u64) -> Result<u64, ConfigError> {
    if value == 0 {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be at least 1".to_string(),
        ))
    } else {
        Ok(value)
    }
}

/// Parse a sampling rate, which must lie within `[0, 1]`.
fn parse_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let rate = parse_env_or(key, default)?;
    validate_rate(key, rate)
}

fn validate_rate(key: &str, rate: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store_name, "Reyana Treders");
        assert_eq!(config.notification_dismiss_after, Duration::from_secs(4));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(3600));
        assert_eq!(config.session_capacity, 10_000);
        assert!(!config.is_secure());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_is_secure() {
        let config = StorefrontConfig {
            base_url: "https://reyanatreders.in".to_string(),
            ..StorefrontConfig::default()
        };
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u16>("STOREFRONT_PORT", " 3001 ").unwrap(), 3001);

        let err = parse_value::<u16>("STOREFRONT_PORT", "not-a-port").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));

        assert!(parse_value::<IpAddr>("STOREFRONT_HOST", "localhost").is_err());
    }

    #[test]
    fn test_at_least_one() {
        assert_eq!(at_least_one("STOREFRONT_SESSION_CAPACITY", 5).unwrap(), 5);
        assert!(at_least_one("STOREFRONT_SESSION_CAPACITY", 0).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 0.0).is_ok());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 1.0).is_ok());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", 1.5).is_err());
        assert!(validate_rate("SENTRY_SAMPLE_RATE", -0.1).is_err());
    }
}
