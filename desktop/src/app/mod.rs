//! # Application Orchestrator
//!
//! The main [`App`] struct coordinates the UI rendering layer, async tasks
//! and application state.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - applies async results            │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  query / carousel / navigation / simulation panel    │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  - tasks::query::explain_concept() - one generation call    │
//! │  - tasks::carousel::start()        - 5 s rotation timer     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycles
//!
//! - **Query**: `handle_search_submit` issues a token and spawns one call; the
//!   `QueryResult` event is applied only if its token is still the latest.
//! - **Carousel**: the landing view is mounted at startup and on `handle_back`,
//!   each mount gets its own timer. `handle_explore` unmounts it and drops the
//!   timer, which aborts the task; ticks already queued are rejected by mount id.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use edunexus::app::App;
//!
//! let runtime = edunexus::utils::runtime::runtime().unwrap();
//! let _guard = runtime.enter();
//!
//! let mut app = App::new();
//! // In the egui update loop:
//! app.on_tick();
//! let state = app.state.read().clone();
//! ```

mod app_trait;
mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use app_trait::AppLike;
pub use events::AppEvent;
pub use state::*;
pub use tasks::carousel::CarouselTimer;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use lib_core::catalog::Subject;
use lib_core::model::QueryToken;
use lib_core::Config;
use parking_lot::RwLock;

use crate::core::service::GenerationService;
use crate::services::api::GeminiClient;
use event_handler::AppEventHandler;

/// Main application orchestrator.
///
/// Must be created inside a Tokio runtime context: construction mounts the
/// landing view and starts its carousel timer.
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration to prevent UI freezing.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks.
    event_tx: Sender<AppEvent>,

    /// Generation backend used for every submit.
    service: Arc<dyn GenerationService>,

    /// Carousel rotation period.
    carousel_interval: Duration,

    /// Timer of the currently mounted landing view.
    carousel_timer: Option<CarouselTimer>,
}

impl App {
    /// Create the app from the global configuration with the Gemini client.
    pub fn new() -> Self {
        let config = lib_core::config::core_config();
        Self::with_service(Arc::new(GeminiClient::new(config)), config)
    }

    /// Create the app with an explicit generation backend.
    pub fn with_service(service: Arc<dyn GenerationService>, config: &Config) -> Self {
        let (event_tx, event_rx) = unbounded();

        let mut app = App {
            state: Arc::new(RwLock::new(AppState::new(config.animations))),
            event_rx,
            event_tx,
            service,
            carousel_interval: config.carousel_interval(),
            carousel_timer: None,
        };

        let mount = handlers::navigation::mount_landing(app.state.clone());
        app.carousel_timer = Some(tasks::carousel::start(mount, app.carousel_interval, app.event_tx.clone()));

        tracing::info!(
            carousel_interval_ms = config.carousel_interval_ms,
            animations = config.animations,
            "App state initialized"
        );
        app
    }

    /// Called every frame to apply pending async results.
    ///
    /// Non-blocking; returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            tracing::trace!(events_processed = processed, "on_tick: processed events");
        }
        processed
    }

    /// Apply one async event result.
    ///
    /// Delegates to the event_handler module for processing.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Take (and clear) the repaint request raised by async results.
    pub fn take_repaint_request(&self) -> bool {
        let mut state = self.state.write();
        std::mem::take(&mut state.needs_immediate_repaint)
    }

    /// Update the query box text.
    pub fn handle_query_input(&mut self, text: String) {
        handlers::query::handle_query_input(self.state.clone(), text);
    }

    /// Submit the query box text. Returns the issued token, or `None` for a blank query.
    pub fn handle_search_submit(&mut self) -> Option<QueryToken> {
        handlers::query::handle_search_submit(self.state.clone(), self.event_tx.clone(), self.service.clone())
    }

    /// Open a subject workspace, tearing down the landing carousel.
    pub fn handle_explore(&mut self, subject: Subject) {
        handlers::navigation::handle_explore(self.state.clone(), subject);
        self.carousel_timer = None;
    }

    /// Return to the landing view with a fresh carousel.
    pub fn handle_back(&mut self) {
        if let Some(mount) = handlers::navigation::handle_back(self.state.clone()) {
            self.carousel_timer = Some(tasks::carousel::start(mount, self.carousel_interval, self.event_tx.clone()));
        }
    }

    /// Pick a simulation; an id outside the current subject is logged and ignored.
    pub fn handle_pick_simulation(&mut self, id: &str) {
        if let Err(e) = handlers::navigation::handle_pick_simulation(self.state.clone(), id) {
            tracing::warn!(simulation = id, error = %e, "Simulation pick rejected");
        }
    }

    /// Store new placeholder slider values.
    pub fn handle_simulation_parameters(&mut self, parameter_1: f32, parameter_2: f32) {
        handlers::navigation::handle_simulation_parameters(self.state.clone(), parameter_1, parameter_2);
    }

    /// Timer of the mounted landing view, if any.
    pub fn carousel_timer(&self) -> Option<&CarouselTimer> {
        self.carousel_timer.as_ref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl AppLike for App {
    fn state(&self) -> &Arc<RwLock<AppState>> {
        &self.state
    }

    fn handle_query_input(&mut self, text: String) {
        App::handle_query_input(self, text);
    }

    fn handle_search_submit(&mut self) {
        App::handle_search_submit(self);
    }

    fn handle_explore(&mut self, subject: Subject) {
        App::handle_explore(self, subject);
    }

    fn handle_back(&mut self) {
        App::handle_back(self);
    }

    fn handle_pick_simulation(&mut self, id: &str) {
        App::handle_pick_simulation(self, id);
    }

    fn handle_simulation_parameters(&mut self, parameter_1: f32, parameter_2: f32) {
        App::handle_simulation_parameters(self, parameter_1, parameter_2);
    }
}
