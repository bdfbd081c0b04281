//! # Application Configuration
//!
//! This module manages application configuration loaded from environment variables.
//! All configuration is validated on startup to fail fast if misconfigured.
//!
//! The generation API credential is only ever read from the environment (or a
//! `.env` file picked up by `dotenvy`). When it is absent the app still starts;
//! every query then settles to the fallback message.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::{core_config, init_config};
//!
//! init_config().unwrap();
//! let interval = core_config().carousel_interval();
//! ```

use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{get_env_flag, get_env_or, get_env_parse_or};
use lib_utils::validation::validate_range;

use crate::error::{CoreError, Result};

/// Default generation endpoint (Google Generative Language API).
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model name.
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-pro";

/// Default carousel rotation interval.
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 5000;

/// Default HTTP timeout for one generation call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Credential for the generation API (`GEMINI_API_KEY`).
    pub api_key: Option<String>,

    /// Model used for `generateContent` (`EDU_GENERATION_MODEL`).
    pub generation_model: String,

    /// Base URL of the generation API (`EDU_GENERATION_ENDPOINT`), no trailing slash.
    pub generation_endpoint: String,

    /// HTTP timeout in seconds (`EDU_REQUEST_TIMEOUT_SECS`).
    ///
    /// Valid range: 1-300 seconds
    pub request_timeout_secs: u64,

    /// Carousel rotation interval in milliseconds (`EDU_CAROUSEL_INTERVAL_MS`).
    ///
    /// Valid range: 100-600000 ms
    pub carousel_interval_ms: u64,

    /// Animated carousel transitions (`EDU_ANIMATIONS`).
    pub animations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            generation_model: DEFAULT_GENERATION_MODEL.to_string(),
            generation_endpoint: DEFAULT_GENERATION_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            animations: true,
        }
    }
}

// The credential must never reach logs through `{:?}`.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("generation_model", &self.generation_model)
            .field("generation_endpoint", &self.generation_endpoint)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("carousel_interval_ms", &self.carousel_interval_ms)
            .field("animations", &self.animations)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file first if one exists; real environment variables win.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env file");
        }

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let generation_model = get_env_or("EDU_GENERATION_MODEL", DEFAULT_GENERATION_MODEL);
        let generation_endpoint = get_env_or("EDU_GENERATION_ENDPOINT", DEFAULT_GENERATION_ENDPOINT)
            .trim_end_matches('/')
            .to_string();

        let request_timeout_secs = get_env_parse_or("EDU_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)
            .map_err(|e| CoreError::Config(format!("EDU_REQUEST_TIMEOUT_SECS must be a number: {}", e)))?;

        let carousel_interval_ms = get_env_parse_or("EDU_CAROUSEL_INTERVAL_MS", DEFAULT_CAROUSEL_INTERVAL_MS)
            .map_err(|e| CoreError::Config(format!("EDU_CAROUSEL_INTERVAL_MS must be a number: {}", e)))?;

        let animations = get_env_flag("EDU_ANIMATIONS", true)
            .map_err(|e| CoreError::Config(format!("EDU_ANIMATIONS must be a boolean flag: {}", e)))?;

        Ok(Self {
            api_key,
            generation_model,
            generation_endpoint,
            request_timeout_secs,
            carousel_interval_ms,
            animations,
        })
    }

    /// Validate configuration values against range rules.
    pub fn validate(&self) -> Result<()> {
        if self.generation_model.trim().is_empty() {
            return Err(CoreError::Config("EDU_GENERATION_MODEL cannot be empty".to_string()));
        }

        if !(self.generation_endpoint.starts_with("http://") || self.generation_endpoint.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "EDU_GENERATION_ENDPOINT must be an http(s) URL, got {}",
                self.generation_endpoint
            )));
        }

        validate_range(self.request_timeout_secs, 1, 300, "EDU_REQUEST_TIMEOUT_SECS")
            .map_err(CoreError::Config)?;
        validate_range(self.carousel_interval_ms, 100, 600_000, "EDU_CAROUSEL_INTERVAL_MS")
            .map_err(CoreError::Config)?;

        Ok(())
    }

    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Carousel interval as a `Duration`.
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// HTTP timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<&'static Config> {
    let config = Config::from_env()?;
    config.validate()?;

    if !config.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set - concept explanations will show the fallback message");
    }

    CONFIG
        .set(config)
        .map_err(|_| CoreError::Config("Config has already been initialized".to_string()))?;
    Ok(core_config())
}

/// Get a reference to the global configuration.
///
/// Falls back to [`Config::default`] when [`init_config()`] was never called
/// (tests, tools), so callers never have to handle an uninitialized state.
pub fn core_config() -> &'static Config {
    CONFIG.get_or_init(Config::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.carousel_interval(), Duration::from_millis(5000));
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_validate_rejects_tiny_interval() {
        let config = Config {
            carousel_interval_ms: 10,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let config = Config {
            generation_endpoint: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: Some("super-secret-key".to_string()),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
