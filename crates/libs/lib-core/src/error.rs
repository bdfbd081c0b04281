//! # Centralized Error Handling
//!
//! This module defines the error types shared by the core state machines and the
//! desktop app. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Design
//!
//! - **Single Error Type**: core operations return [`CoreError`]
//! - **Descriptive Messages**: each variant carries a context string for logs
//! - **One User-Facing Message**: every generation failure collapses to
//!   [`FALLBACK_MESSAGE`] when `QueryState::settle` applies it; details only
//!   ever reach `tracing`
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`Config`](CoreError::Config)
//! 2. **Input** - [`Validation`](CoreError::Validation)
//! 3. **External service** - [`Generation`](CoreError::Generation), wrapping [`GenerationError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{CoreError, GenerationError, FALLBACK_MESSAGE};
//!
//! let err: CoreError = GenerationError::Timeout.into();
//! assert_eq!(err.to_string(), "Generation error: request timed out");
//! assert!(!FALLBACK_MESSAGE.contains("timed out"));
//! ```

use thiserror::Error;

/// The only text a user ever sees when a concept explanation fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I could not process your request at this moment. Please try again later.";

/// Convenience type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type covering configuration, validation and generation failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user action (unknown simulation, action in the wrong view).
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The external text-generation call failed.
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

/// Failure modes of one call to the text-generation service.
///
/// The variants exist for logging and tests; the display layer never
/// distinguishes between them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No credential configured.
    #[error("no API credential configured")]
    MissingCredential,

    /// Connection, DNS or TLS failure.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Non-success HTTP status.
    #[error("service returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The call ended without an outcome (the task panicked or was aborted).
    #[error("generation task failed: {0}")]
    Aborted(String),

    /// The body decoded but carried no text (no candidates, blocked prompt).
    #[error("empty response{}", .0.as_ref().map(|r| format!(" ({})", r)).unwrap_or_default())]
    EmptyResponse(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_converts_to_core() {
        let core: CoreError = GenerationError::Status { status: 500, message: "boom".to_string() }.into();
        assert!(matches!(core, CoreError::Generation(GenerationError::Status { status: 500, .. })));
        assert_eq!(core.to_string(), "Generation error: service returned HTTP 500: boom");
    }

    #[test]
    fn test_validation_display() {
        let err = CoreError::Validation("Unknown simulation".to_string());
        assert_eq!(err.to_string(), "Invalid input: Unknown simulation");
    }

    #[test]
    fn test_empty_response_display() {
        assert_eq!(GenerationError::EmptyResponse(None).to_string(), "empty response");
        assert_eq!(
            GenerationError::EmptyResponse(Some("SAFETY".to_string())).to_string(),
            "empty response (SAFETY)"
        );
    }
}
