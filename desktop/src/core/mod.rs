//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for the text-generation backend (`GenerationService`)
//!
//! ## Dependency Injection
//!
//! The app only talks to the generation backend through the trait object:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use edunexus::core::service::GenerationService;
//!
//! // In production: the Gemini REST client
//! let service: Arc<dyn GenerationService> = Arc::new(GeminiClient::new(config));
//!
//! // In tests: a scripted mock
//! let service: Arc<dyn GenerationService> = Arc::new(ScriptedService::new(answers));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::GenerationService;
