//! Unified error handling for storefront front ends.
//!
//! Catalog fetch actions swallow their own failures (see [`crate::catalog`]),
//! so `AppError` only covers what a front end itself can get wrong: loading
//! configuration, building the API client, bad user input, and output I/O.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog API operation failed.
    #[error("Catalog API error: {0}")]
    Api(#[from] ApiError),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User input could not be understood.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Whether the error is caused by the user rather than the system.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InvalidInput(_))
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 123".to_string());
        assert_eq!(err.to_string(), "Not found: product 123");

        let err = AppError::InvalidInput("page must be a number".to_string());
        assert_eq!(err.to_string(), "Invalid input: page must be a number");
    }

    #[test]
    fn test_app_error_from_config() {
        let err: AppError = ConfigError::InvalidEnvVar(
            "CATALOG_PAGE_SIZE".to_string(),
            "must be at least 1".to_string(),
        )
        .into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid environment variable CATALOG_PAGE_SIZE: must be at least 1"
        );
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_user_errors() {
        assert!(AppError::InvalidInput("x".to_string()).is_user_error());
        assert!(AppError::NotFound("x".to_string()).is_user_error());
    }
}
