//! # EduNexus Desktop - Library Root
//!
//! A **native desktop GUI** for interactive science learning. This library
//! crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Concept Explainer**: Ask a question, get a simple-terms answer from the
//!   Gemini generation API (or a fixed fallback when the call fails)
//! - **Subject Workspaces**: Physics, Chemistry and Mathematics, each with a
//!   list of placeholder simulations
//! - **Visualization Carousel**: Rotates the showcase every 5 seconds while
//!   the landing page is shown
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              edunexus (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime and timers              │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ HTTPS (generateContent)
//!                          ▼
//!              ┌─────────────────────────┐
//!              │  Gemini generation API  │
//!              └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, state, events, handlers and async tasks
//! - **core**: Error type and the [`core::GenerationService`] seam
//! - **debug**: File logging and task tracking
//! - **services**: Gemini REST client
//! - **ui**: Screens, widgets and the theme
//! - **utils**: Tokio runtime helper
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers)
//!   │   └── services::api (generateContent)
//!   │
//!   └── ui (rendering)
//!       ├── screens::{landing, workspace}
//!       ├── widgets::*
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! Async tasks never touch the UI. They send an [`AppEvent`] over an
//! `async_channel`; the main thread drains the channel once per frame in
//! [`App::on_tick`].
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>` (`parking_lot`):
//! locked briefly by handlers, cloned once per frame for rendering.
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p edunexus
//! ```
//!
//! Timer and overlap tests use Tokio's paused clock; the HTTP contract of the
//! generation client is checked against a `wiremock` server in `tests/`.

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use core::{AppError, Result};
pub use ui::DesktopApp;
