//! # Shared Utility Functions
//!
//! Common text helpers used by the core library and the desktop app.
//!
//! ## Text Formatting
//!
//! - [`truncate_text`] - Shorten text to a maximum number of characters with an ellipsis
//! - [`preview`] - Alias for `truncate_text` with the default log-preview width
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::truncate_text;
//!
//! let formatted = truncate_text("Explain the photoelectric effect", 11);
//! assert_eq!(formatted, "Explain the...");
//! ```

/// Default width used by [`preview`].
pub const PREVIEW_CHARS: usize = 48;

/// Shorten `text` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts `char`s rather than bytes so multi-byte input (Greek letters in
/// physics questions, for instance) never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_text;
///
/// assert_eq!(truncate_text("short", 10), "short");
/// assert_eq!(truncate_text("ΔG = ΔH − TΔS", 4), "ΔG =...");
/// ```
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Shorten text for structured log fields.
pub fn preview(text: &str) -> String {
    truncate_text(text, PREVIEW_CHARS)
}
