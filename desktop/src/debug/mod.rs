//! # Debugging and Tracing Infrastructure
//!
//! File-based logging and task lifecycle tracking for the EduNexus desktop app.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/edunexus.log` (daily rotation)
//! - **Async task tracking**: Spawn/completion logging with durations and an
//!   active-task counter
//! - **Panic logging**: Panics are written to the log file before the default hook runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup
//! debug::init();
//!
//! // Track async tasks
//! spawn_tracked("explain_concept", async move {
//!     service.generate(&prompt).await
//! });
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `edunexus=debug,info`)
//! - `EDU_LOG_DIR`: Log directory (default: `logs`)
//! - `EDU_LOG_STDOUT`: Also log to stdout (1=on, 0=off)

pub mod config;
pub mod logger;
pub mod task_tracker;

pub use config::DebugConfig;
pub use logger::init as init_logger;
pub use task_tracker::{active_task_count, spawn_tracked};

/// Initialize the debugging system.
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}
