//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use lib_core::GenerationError;

/// Text-generation backend used by the concept explainer.
///
/// One call per non-blank submit. Implementations must not retry; the caller
/// turns any error into the fallback message.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate a plain-text answer for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
