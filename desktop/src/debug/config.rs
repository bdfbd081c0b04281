//! Debug configuration from environment variables

use std::path::PathBuf;

/// File name of the rotating log inside [`DebugConfig::log_dir`].
pub const LOG_FILE_NAME: &str = "edunexus.log";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "edunexus=info,lib_core=info,warn";

/// Filter used when `RUST_LOG` is unset and the `debug-mode` feature is on.
pub const DEBUG_LOG_FILTER: &str = "edunexus=debug,lib_core=debug,info";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file path (directory + base name; the appender adds a date suffix)
    pub log_file: PathBuf,
    /// Log level filter (e.g., "edunexus=debug,info")
    pub log_level: String,
    /// Mirror logs to stdout
    pub log_stdout: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_dir,
            log_level: default_filter().to_string(),
            log_stdout: false,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("EDU_LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_dir,
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter().to_string()),
            log_stdout: std::env::var("EDU_LOG_STDOUT")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

fn default_filter() -> &'static str {
    if cfg!(feature = "debug-mode") {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file, PathBuf::from("logs").join("edunexus.log"));
        assert!(!config.log_stdout);
    }

    #[test]
    fn test_debug_detection() {
        let mut config = DebugConfig::default();
        config.log_level = "edunexus=debug,warn".to_string();
        assert!(config.is_debug_enabled());
        config.log_level = "warn".to_string();
        assert!(!config.is_debug_enabled());
    }
}
