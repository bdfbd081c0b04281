//! # Generation API Client
//!
//! HTTP client for the Generative Language REST API.

pub mod client;
pub mod generation;

pub use client::GeminiClient;
pub use generation::generate_content;
