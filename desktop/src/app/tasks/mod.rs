//! # Async Tasks
//!
//! Background work spawned on the Tokio runtime. Results come back to the
//! UI thread as [`crate::app::AppEvent`]s.

pub mod carousel;
pub mod query;
