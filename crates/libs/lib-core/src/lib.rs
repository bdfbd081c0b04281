//! # Core Library
//!
//! Configuration, errors, static content and the view state machines of EduNexus.
//!
//! Nothing in this crate performs I/O besides reading the environment; the
//! desktop app drives the state machines and owns the network and timers.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use catalog::Subject;
pub use config::Config;
pub use error::{CoreError, GenerationError, Result, FALLBACK_MESSAGE};
pub use model::{CarouselState, NavigationState, QueryState, View};
