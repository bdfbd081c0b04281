//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between EduNexus and the external
//! text-generation service, plus a few display helpers shared by the core
//! and the desktop app.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::generation`]**: `generateContent` request/response bodies
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::truncate_text`]**: Shorten long text for log fields and previews
//!
//! ## Wire Format
//!
//! The generation API speaks JSON with **camelCase** field names, so every
//! DTO carries `#[serde(rename_all = "camelCase")]`. Unknown response fields
//! are ignored and missing optional fields default to empty, which keeps the
//! client tolerant of API additions.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::generation::{GenerateContentRequest, GenerateContentResponse};
//!
//! let request = GenerateContentRequest::from_prompt("Explain inertia");
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"contents\""));
//!
//! let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Inertia is..."}]}}]}"#;
//! let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
//! assert_eq!(response.first_text().as_deref(), Some("Inertia is..."));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
