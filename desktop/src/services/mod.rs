//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! services/
//! └── api/
//!     ├── client.rs      - GeminiClient (reqwest client, endpoint, credential)
//!     └── generation.rs  - generateContent call and response mapping
//! ```
//!
//! ```text
//! ┌──────────────────────────┐        HTTPS / JSON        ┌──────────────────────────────┐
//! │  GeminiClient            │ ─────────────────────────▶ │  Generative Language API     │
//! │  (GenerationService)     │  POST /v1beta/models/      │                              │
//! │                          │   {model}:generateContent  │                              │
//! └──────────────────────────┘                            └──────────────────────────────┘
//! ```
//!
//! Every failure is mapped to a [`lib_core::GenerationError`] variant and logged
//! here; callers only decide between the answer and the fallback message.

pub mod api;
