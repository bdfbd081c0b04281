//! # Query Handlers
//!
//! Handlers for the concept explainer box.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use crate::core::service::GenerationService;
use async_channel::Sender;
use lib_core::model::{QueryToken, Settlement};
use lib_core::GenerationError;
use parking_lot::RwLock;
use std::sync::Arc;

/// Replace the text in the query box.
pub(crate) fn handle_query_input(state: Arc<RwLock<AppState>>, text: String) {
    let mut state = state.write();
    state.query.input = text;
}

/// Submit the current query text.
///
/// Blank input is ignored. Otherwise exactly one generation call is spawned.
///
/// Internal handler function - use [`crate::app::App::handle_search_submit`] instead.
pub(crate) fn handle_search_submit(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    service: Arc<dyn GenerationService>,
) -> Option<QueryToken> {
    let (pending, issued) = {
        let mut state = state.write();
        let context = state.query_context();
        let pending = state.query.submit_input(context);
        (pending, state.query.submits_issued())
    }; // Lock released before spawning

    let Some(pending) = pending else {
        tracing::debug!("Ignored blank query");
        return None;
    };

    let token = pending.token;
    tracing::info!(token = token.value(), issued, prompt = %shared::preview(&pending.prompt), "Query submitted");
    tasks::query::explain_concept(service, pending, event_tx);
    Some(token)
}

/// Apply a settled generation call.
pub(crate) fn handle_query_result(
    state: Arc<RwLock<AppState>>,
    token: QueryToken,
    outcome: Result<String, GenerationError>,
) -> Settlement {
    let failed = outcome.is_err();
    let mut state = state.write();
    let settlement = state.query.settle(token, outcome);

    match settlement {
        Settlement::Applied => {
            state.needs_immediate_repaint = true;
            tracing::info!(
                token = token.value(),
                fallback = failed,
                settled_at = ?state.query.settled_at().map(lib_utils::format_time),
                "Query settled"
            );
        }
        Settlement::Stale => {
            tracing::debug!(
                token = token.value(),
                latest = ?state.query.latest_token().map(|t| t.value()),
                "Discarded stale query result"
            );
        }
    }
    settlement
}
