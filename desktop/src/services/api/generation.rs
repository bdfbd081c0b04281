//! # Generation Endpoint
//!
//! `generateContent` call and the mapping of every outcome to either the
//! answer text or a [`GenerationError`].

use lib_core::GenerationError;
use shared::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

use super::client::GeminiClient;

/// Send one prompt and return the text of the first candidate.
///
/// No retries. The prompt itself is only logged as a short preview.
#[tracing::instrument(skip(client, prompt), fields(model = %client.model(), prompt = %shared::preview(prompt)))]
pub async fn generate_content(client: &GeminiClient, prompt: &str) -> Result<String, GenerationError> {
    let api_key = client.api_key().map_err(|e| {
        tracing::warn!("Generation skipped: no API key configured");
        e
    })?;

    let start = std::time::Instant::now();
    let body = GenerateContentRequest::from_prompt(prompt);

    tracing::debug!("Requesting concept explanation");

    let response = client
        .client
        .post(client.generate_url())
        .header("x-goog-api-key", api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, timeout = e.is_timeout(), "Generation request failed");
            map_transport_error(&e)
        })?;

    let status = response.status();
    let text = response.text().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read generation response body");
        map_transport_error(&e)
    })?;
    let duration = start.elapsed();

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorResponse>(&text)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| shared::truncate_text(&text, 200));
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            message = %message,
            "Generation service returned an error status"
        );
        return Err(GenerationError::Status {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
        tracing::error!(error = %e, "Generation response parse error");
        GenerationError::MalformedResponse(e.to_string())
    })?;

    match parsed.first_text() {
        Some(answer) => {
            tracing::debug!(
                duration_ms = duration.as_millis(),
                answer_chars = answer.chars().count(),
                "Concept explanation received"
            );
            Ok(answer)
        }
        None => {
            let reason = parsed.block_reason().map(str::to_string);
            tracing::warn!(
                duration_ms = duration.as_millis(),
                candidates = parsed.candidates.len(),
                block_reason = ?reason,
                "Generation response carried no text"
            );
            Err(GenerationError::EmptyResponse(reason))
        }
    }
}

fn map_transport_error(err: &reqwest::Error) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout
    } else {
        GenerationError::Network(err.to_string())
    }
}
