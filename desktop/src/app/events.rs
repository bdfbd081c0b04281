//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use lib_core::model::{MountId, QueryToken};
use lib_core::GenerationError;

/// Async task results sent to main thread
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A concept explanation call settled
    QueryResult {
        token: QueryToken,
        outcome: Result<String, GenerationError>,
    },
    /// The carousel timer of `MountId` fired
    CarouselTick(MountId),
}

impl AppEvent {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::QueryResult { .. } => "query_result",
            AppEvent::CarouselTick(_) => "carousel_tick",
        }
    }
}
