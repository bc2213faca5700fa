//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL for the storefront (default: <http://localhost:3000>)
//! - `THEME_DATA_DIR` - Directory holding saved theme documents (default: data/themes)
//! - `STOREFRONT_LOCALE` - `ar` or `en` (default: ar)
//! - `STOREFRONT_SHIPPING_FEE` - Flat shipping fee; unset means free shipping
//! - `STOREFRONT_FREE_SHIPPING_THRESHOLD` - Subtotal at which the fee is waived
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0 to 1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Trace sample rate, 0.0 to 1.0 (default: 0.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use dukkan_core::cart::ShippingPolicy;
use dukkan_core::i18n::Locale;
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

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
    /// Directory the admin saves theme documents into
    pub theme_data_dir: PathBuf,
    /// Page language
    pub locale: Locale,
    /// How shipping is charged at checkout
    pub shipping: ShippingPolicy,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub sentry_sample_rate: f32,
    pub sentry_traces_sample_rate: f32,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_env("STOREFRONT_HOST", "127.0.0.1")?;
        let port = parse_env("STOREFRONT_PORT", "3000")?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");
        Url::parse(&base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".to_string(), e.to_string())
        })?;
        let theme_data_dir = PathBuf::from(get_env_or_default("THEME_DATA_DIR", "data/themes"));
        let locale_code = get_env_or_default("STOREFRONT_LOCALE", "ar");
        let locale = Locale::from_code(&locale_code).ok_or_else(|| {
            ConfigError::InvalidEnvVar(
                "STOREFRONT_LOCALE".to_string(),
                format!("unsupported locale '{locale_code}'"),
            )
        })?;
        let shipping = shipping_policy(
            parse_optional_env("STOREFRONT_SHIPPING_FEE")?,
            parse_optional_env("STOREFRONT_FREE_SHIPPING_THRESHOLD")?,
        )?;

        Ok(Self {
            host,
            port,
            base_url,
            theme_data_dir,
            locale,
            shipping,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: parse_env("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: parse_env("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Configuration for tests and local tooling.
    #[must_use]
    pub fn for_data_dir(theme_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            theme_data_dir: theme_data_dir.into(),
            locale: Locale::Ar,
            shipping: ShippingPolicy::Free,
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

/// Combine the fee and threshold variables into a policy.
fn shipping_policy(
    fee: Option<Decimal>,
    threshold: Option<Decimal>,
) -> Result<ShippingPolicy, ConfigError> {
    if fee.is_some_and(|f| f.is_sign_negative()) {
        return Err(ConfigError::InvalidEnvVar(
            "STOREFRONT_SHIPPING_FEE".to_string(),
            "must not be negative".to_string(),
        ));
    }
    match (fee, threshold) {
        (Some(fee), None) if !fee.is_zero() => Ok(ShippingPolicy::Flat { fee }),
        (Some(fee), Some(threshold)) if !fee.is_zero() => {
            Ok(ShippingPolicy::FreeOver { threshold, fee })
        }
        _ => Ok(ShippingPolicy::Free),
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an environment variable, falling back to a default.
fn parse_env<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_env_or_default(key, default)
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse an optional environment variable.
fn parse_optional_env<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key)
        .map(|v| {
            v.parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig::for_data_dir("data/themes");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_shipping_policy_unset_is_free() {
        assert_eq!(shipping_policy(None, None).unwrap(), ShippingPolicy::Free);
        assert_eq!(
            shipping_policy(Some(Decimal::ZERO), Some(Decimal::from(100))).unwrap(),
            ShippingPolicy::Free
        );
    }

    #[test]
    fn test_shipping_policy_flat_and_threshold() {
        assert_eq!(
            shipping_policy(Some(Decimal::from(25)), None).unwrap(),
            ShippingPolicy::Flat {
                fee: Decimal::from(25)
            }
        );
        assert_eq!(
            shipping_policy(Some(Decimal::from(25)), Some(Decimal::from(300))).unwrap(),
            ShippingPolicy::FreeOver {
                threshold: Decimal::from(300),
                fee: Decimal::from(25)
            }
        );
    }

    #[test]
    fn test_shipping_policy_rejects_negative_fee() {
        assert!(matches!(
            shipping_policy(Some(Decimal::from(-5)), None),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }
}
