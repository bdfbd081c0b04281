//! # Query Assistant State
//!
//! Lifecycle of one free-text question sent to the text-generation service:
//!
//! ```text
//!            submit (non-blank)                 settle(latest token)
//!   Idle ───────────────────────▶ InFlight ─────────────────────────▶ Idle
//!    ▲  submit (blank): no-op       │  ▲                                │
//!    └──────────────────────────────┘  └── submit again: new token ─────┘
//! ```
//!
//! Every submit issues a new [`QueryToken`]. Only the settlement carrying the
//! latest token is applied; a settlement for an older token is stale and is
//! dropped without touching the displayed result or the in-flight flag.

use chrono::{DateTime, Utc};

use crate::catalog::Subject;
use crate::error::{GenerationError, FALLBACK_MESSAGE};

/// Prompt context used when no subject is selected.
pub const GENERIC_CONTEXT: &str = "General science";

/// Monotonically increasing id of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryToken(u64);

impl QueryToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A request the caller must now send to the generation service, exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub token: QueryToken,
    pub prompt: String,
}

/// Whether a settlement changed the visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Stale,
}

/// Build the prompt sent for `raw_query`.
///
/// The query text is passed through exactly as typed.
pub fn build_prompt(raw_query: &str, subject: Option<Subject>) -> String {
    let context = subject.map(|s| s.name()).unwrap_or(GENERIC_CONTEXT);
    format!("{}: Explain this concept in simple terms: {}", context, raw_query)
}

/// Query box state owned by the view.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Text currently typed in the query box.
    pub input: String,
    in_flight: bool,
    result: String,
    is_fallback: bool,
    latest: Option<QueryToken>,
    issued: u64,
    settled_at: Option<DateTime<Utc>>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the latest submit has not settled.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Text to display; empty until the latest submit settles.
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Whether the displayed result is the fallback message.
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    /// Token of the most recent submit.
    pub fn latest_token(&self) -> Option<QueryToken> {
        self.latest
    }

    /// Number of submits that produced a request.
    pub fn submits_issued(&self) -> u64 {
        self.issued
    }

    /// When the displayed result arrived.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    /// Submit the text currently in [`QueryState::input`].
    pub fn submit_input(&mut self, subject: Option<Subject>) -> Option<PendingQuery> {
        let raw = self.input.clone();
        self.submit(&raw, subject)
    }

    /// Start a query.
    ///
    /// Returns `None` and leaves every field untouched for a blank or
    /// whitespace-only query. Otherwise marks the state in flight, clears the
    /// previous result and returns the request to send.
    pub fn submit(&mut self, raw_query: &str, subject: Option<Subject>) -> Option<PendingQuery> {
        if lib_utils::validate_not_empty(raw_query, "Query").is_err() {
            return None;
        }

        self.issued += 1;
        let token = QueryToken(self.issued);
        self.latest = Some(token);
        self.in_flight = true;
        self.result.clear();
        self.is_fallback = false;
        self.settled_at = None;

        Some(PendingQuery {
            token,
            prompt: build_prompt(raw_query, subject),
        })
    }

    /// Apply the outcome of the call issued for `token`.
    ///
    /// Success stores the returned text verbatim; any failure stores
    /// [`FALLBACK_MESSAGE`]. Stale tokens are ignored.
    pub fn settle(&mut self, token: QueryToken, outcome: Result<String, GenerationError>) -> Settlement {
        if self.latest != Some(token) || !self.in_flight {
            return Settlement::Stale;
        }

        match outcome {
            Ok(text) => {
                self.result = text;
                self.is_fallback = false;
            }
            Err(_) => {
                self.result = FALLBACK_MESSAGE.to_string();
                self.is_fallback = true;
            }
        }
        self.in_flight = false;
        self.settled_at = Some(lib_utils::now_utc());
        Settlement::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submit_is_noop() {
        let mut state = QueryState::new();
        let pending = state.submit("what is torque", None).unwrap();
        state.settle(pending.token, Ok("A twisting force".to_string()));

        for blank in ["", "   ", "\t\n "] {
            assert!(state.submit(blank, Some(Subject::Physics)).is_none());
            assert!(!state.is_in_flight());
            assert_eq!(state.result(), "A twisting force");
            assert_eq!(state.submits_issued(), 1);
        }
    }

    #[test]
    fn test_submit_sets_in_flight_and_clears_result() {
        let mut state = QueryState::new();
        let first = state.submit("osmosis", Some(Subject::Chemistry)).unwrap();
        state.settle(first.token, Ok("Water moves".to_string()));

        let second = state.submit("diffusion", None).unwrap();
        assert!(state.is_in_flight());
        assert_eq!(state.result(), "");
        assert!(second.token > first.token);
    }

    #[test]
    fn test_prompt_uses_subject_or_generic_context() {
        assert_eq!(
            build_prompt("what is a mole?", Some(Subject::Chemistry)),
            "Chemistry: Explain this concept in simple terms: what is a mole?"
        );
        assert_eq!(
            build_prompt("  eigenvalues ", None),
            "General science: Explain this concept in simple terms:   eigenvalues "
        );
    }

    #[test]
    fn test_success_stores_text_exactly() {
        let mut state = QueryState::new();
        let pending = state.submit("entropy", None).unwrap();
        let answer = "Entropy measures disorder.\n\n  Units: J/K  ".to_string();

        assert_eq!(state.settle(pending.token, Ok(answer.clone())), Settlement::Applied);
        assert!(!state.is_in_flight());
        assert_eq!(state.result(), answer);
        assert!(!state.is_fallback());
        assert!(state.settled_at().is_some());
    }

    #[test]
    fn test_failure_stores_fallback_without_detail() {
        let mut state = QueryState::new();
        let pending = state.submit("entropy", None).unwrap();
        let err = GenerationError::Status { status: 403, message: "API key not valid: AIza-secret".to_string() };

        assert_eq!(state.settle(pending.token, Err(err)), Settlement::Applied);
        assert!(!state.is_in_flight());
        assert_eq!(state.result(), FALLBACK_MESSAGE);
        assert!(!state.result().contains("403"));
        assert!(!state.result().contains("AIza"));
        assert!(state.is_fallback());
    }

    #[test]
    fn test_out_of_order_settlement_keeps_latest_answer() {
        let mut state = QueryState::new();
        let first = state.submit("first question", None).unwrap();
        let second = state.submit("second question", None).unwrap();

        assert_eq!(state.settle(second.token, Ok("second answer".to_string())), Settlement::Applied);
        assert!(!state.is_in_flight());

        assert_eq!(state.settle(first.token, Ok("first answer".to_string())), Settlement::Stale);
        assert_eq!(state.result(), "second answer");
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_stale_settlement_does_not_end_in_flight() {
        let mut state = QueryState::new();
        let first = state.submit("first", None).unwrap();
        let second = state.submit("second", None).unwrap();

        assert_eq!(state.settle(first.token, Err(GenerationError::Timeout)), Settlement::Stale);
        assert!(state.is_in_flight());
        assert_eq!(state.result(), "");

        state.settle(second.token, Ok("done".to_string()));
        assert!(!state.is_in_flight());
    }

    #[test]
    fn test_double_settlement_is_ignored() {
        let mut state = QueryState::new();
        let pending = state.submit("vectors", None).unwrap();
        state.settle(pending.token, Ok("magnitude and direction".to_string()));

        assert_eq!(state.settle(pending.token, Err(GenerationError::Timeout)), Settlement::Stale);
        assert_eq!(state.result(), "magnitude and direction");
    }

    #[test]
    fn test_submit_input_uses_buffer() {
        let mut state = QueryState::new();
        state.input = "half-life".to_string();
        let pending = state.submit_input(Some(Subject::Physics)).unwrap();
        assert!(pending.prompt.ends_with("half-life"));
        assert!(pending.prompt.starts_with("Physics:"));
    }
}
