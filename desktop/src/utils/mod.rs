//! # Utility Functions
//!
//! - **[`runtime`]**: The process-wide Tokio runtime that background tasks run on
//!
//! ## Related Modules
//!
//! - [`lib_utils`]: env, time and validation helpers shared with `lib-core`
//! - [`shared::utils`]: text truncation for log previews

pub mod runtime;
