//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CATALOG_API_URL` - Catalog REST API base URL (default: <https://dummyjson.com>)
//! - `CATALOG_PAGE_SIZE` - Products per listing page (default: 16)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production, staging)

use thiserror::Error;
use url::Url;

/// Default catalog API base URL.
pub const DEFAULT_CATALOG_API_URL: &str = "https://dummyjson.com";

/// Default number of products per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 16;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog API configuration
    pub catalog: CatalogApiConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogApiConfig {
    /// Base URL the `/products` endpoints hang off
    pub base_url: Url,
    /// Listing page size sent as `limit=`
    pub page_size: u32,
}

impl Default for CatalogApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_CATALOG_API_URL)
                .unwrap_or_else(|_| unreachable!("default catalog URL is valid")),
            page_size: DEFAULT_PAGE_SIZE,
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
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog = CatalogApiConfig::from_lookup(&lookup)?;

        Ok(Self {
            catalog,
            sentry_dsn: non_empty(lookup("SENTRY_DSN")),
            sentry_environment: non_empty(lookup("SENTRY_ENVIRONMENT")),
        })
    }
}

impl CatalogApiConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = non_empty(lookup("CATALOG_API_URL"))
            .unwrap_or_else(|| DEFAULT_CATALOG_API_URL.to_string());
        let base_url = parse_base_url("CATALOG_API_URL", &raw_url)?;

        let page_size = match non_empty(lookup("CATALOG_PAGE_SIZE")) {
            Some(raw) => parse_page_size("CATALOG_PAGE_SIZE", &raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            base_url,
            page_size,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Treat empty or whitespace-only values as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse an absolute http(s) base URL.
fn parse_base_url(var_name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("unsupported scheme '{}' (expected http or https)", url.scheme()),
        ));
    }

    Ok(url)
}

/// Parse a page size, which must be at least 1.
fn parse_page_size(var_name: &str, raw: &str) -> Result<u32, ConfigError> {
    let size = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if size == 0 {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            "must be at least 1".to_string(),
        ));
    }

    Ok(size)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.catalog.base_url.as_str(), "https://dummyjson.com/");
        assert_eq!(config.catalog.page_size, 16);
        assert!(config.sentry_dsn.is_none());
        assert_eq!(config.catalog, CatalogApiConfig::default());
    }

    #[test]
    fn test_custom_values() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("CATALOG_API_URL", "http://localhost:8080/api"),
            ("CATALOG_PAGE_SIZE", "30"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ]))
        .unwrap();
        assert_eq!(config.catalog.base_url.as_str(), "http://localhost:8080/api");
        assert_eq!(config.catalog.page_size, 30);
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("CATALOG_API_URL", "  "),
            ("SENTRY_DSN", ""),
        ]))
        .unwrap();
        assert_eq!(config.catalog.base_url.as_str(), "https://dummyjson.com/");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("CATALOG_PAGE_SIZE", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(ref var, _) if var == "CATALOG_PAGE_SIZE"
        ));
    }

    #[test]
    fn test_non_numeric_page_size_rejected() {
        let result = StorefrontConfig::from_lookup(lookup_from(&[("CATALOG_PAGE_SIZE", "lots")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_http_url_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("CATALOG_API_URL", "ftp://files")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid environment variable CATALOG_API_URL: unsupported scheme 'ftp' (expected http or https)"
        );
    }
}
