//! # API Client
//!
//! HTTP client for the text-generation backend.

use reqwest::Client;

use lib_core::{Config, GenerationError};

use crate::core::service::GenerationService;

/// HTTP client for the Generative Language API.
///
/// Holds one pooled `reqwest::Client` with the configured timeout. The
/// credential is sent per request in the `x-goog-api-key` header, never in
/// the URL.
pub struct GeminiClient {
    pub(crate) client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
                Client::new()
            });

        Self {
            client,
            endpoint: config.generation_endpoint.trim_end_matches('/').to_string(),
            model: config.generation_model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_url(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// The credential, or `MissingCredential` when none is configured.
    pub(crate) fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key.as_deref().ok_or(GenerationError::MissingCredential)
    }
}

#[async_trait::async_trait]
impl GenerationService for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        crate::services::api::generation::generate_content(self, prompt).await
    }
}
