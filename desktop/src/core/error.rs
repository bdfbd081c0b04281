//! # Common Error Types
//!
//! Consolidated error handling for the desktop application.
//!
//! ## Error Categories
//!
//! - **Config**: Startup configuration could not be loaded or is out of range
//! - **Api**: Generation backend failures (network, HTTP, payload)
//! - **State**: Application state management errors (runtime, window setup)
//! - **Validation**: Rejected user actions (unknown simulation, wrong view)
//!
//! ## Error Conversion
//!
//! - `CoreError::Config` → `AppError::Config`
//! - `CoreError::Validation` → `AppError::Validation`
//! - `CoreError::Generation` / `GenerationError` → `AppError::Api`
//!
//! `AppError` is for logs and startup reporting. Query failures never reach
//! the screen as an `AppError`; they settle to the fallback message instead.

use lib_core::{CoreError, GenerationError};
use thiserror::Error;

/// Application-wide error type.
///
/// # Example
///
/// ```rust
/// use edunexus::core::error::AppError;
///
/// let err = AppError::Validation("Unknown simulation".to_string());
/// assert_eq!(err.to_string(), "Validation error: Unknown simulation");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generation backend communication error.
    #[error("API error: {0}")]
    Api(String),

    /// Application state or runtime error.
    ///
    /// ```rust
    /// use edunexus::core::error::AppError;
    ///
    /// let err = AppError::State("Failed to open window".to_string());
    /// ```
    #[error("State error: {0}")]
    State(String),

    /// Rejected user action.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => AppError::Config(msg),
            CoreError::Validation(msg) => AppError::Validation(msg),
            CoreError::Generation(e) => AppError::Api(e.to_string()),
        }
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        AppError::Api(err.to_string())
    }
}

impl From<eframe::Error> for AppError {
    fn from(err: eframe::Error) -> Self {
        AppError::State(format!("Window error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert_by_category() {
        let err: AppError = CoreError::Config("EDU_CAROUSEL_INTERVAL_MS must be a number".to_string()).into();
        assert!(matches!(err, AppError::Config(_)));

        let err: AppError = CoreError::Validation("No subject selected".to_string()).into();
        assert_eq!(err.to_string(), "Validation error: No subject selected");

        let err: AppError = CoreError::Generation(GenerationError::Timeout).into();
        assert_eq!(err.to_string(), "API error: request timed out");
    }

    #[test]
    fn test_generation_error_converts_to_api() {
        let err: AppError = GenerationError::Status { status: 429, message: "quota".to_string() }.into();
        assert_eq!(err.to_string(), "API error: service returned HTTP 429: quota");
    }
}
