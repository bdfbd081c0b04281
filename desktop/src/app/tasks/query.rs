//! # Concept Explanation Task
//!
//! One generation call per submitted query.

use crate::app::events::AppEvent;
use crate::core::service::GenerationService;
use crate::debug::spawn_tracked;
use async_channel::Sender;
use lib_core::model::PendingQuery;
use lib_core::GenerationError;
use std::sync::Arc;

/// Send `pending.prompt` to the generation service and report the outcome.
///
/// The call runs in its own task so a panic inside the service still
/// settles the query with an error. The call is never cancelled. If the app
/// is gone by the time it settles, the result is dropped.
pub(crate) fn explain_concept(
    service: Arc<dyn GenerationService>,
    pending: PendingQuery,
    event_tx: Sender<AppEvent>,
) {
    spawn_tracked("explain_concept", async move {
        let PendingQuery { token, prompt } = pending;
        let call = spawn_tracked("generate", async move { service.generate(&prompt).await });
        let outcome = call.await.unwrap_or_else(|e| {
            tracing::error!(token = token.value(), error = %e, "Generation task did not complete");
            Err(GenerationError::Aborted(e.to_string()))
        });

        if let Err(ref e) = outcome {
            tracing::warn!(token = token.value(), error = %e, "Concept explanation failed, showing fallback");
        }

        if event_tx.send(AppEvent::QueryResult { token, outcome }).await.is_err() {
            tracing::debug!(token = token.value(), "Event channel closed before query settled");
        }
    });
}
