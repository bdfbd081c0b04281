//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the external text-generation service.
//!
//! ## Module Organization
//!
//! - [`generation`] - `generateContent` request, response and error envelopes
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /v1beta/models/gemini-pro:generateContent
//! Content-Type: application/json
//! x-goog-api-key: <secret>
//!
//! {
//!   "contents": [
//!     { "parts": [ { "text": "Physics: Explain this concept in simple terms: torque" } ] }
//!   ]
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "candidates": [
//!     {
//!       "content": { "role": "model", "parts": [ { "text": "Torque is a twisting force..." } ] },
//!       "finishReason": "STOP"
//!     }
//!   ]
//! }
//! ```

pub mod generation;

pub use generation::*;
