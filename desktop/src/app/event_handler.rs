//! # Event Handler
//!
//! Applies async task results to the application state.

use crate::app::handlers;
use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle one async event.
    ///
    /// Acquires the write lock per event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::trace!(event = event.kind(), "Handling event");

        match event {
            AppEvent::QueryResult { token, outcome } => {
                handlers::query::handle_query_result(self.state.clone(), token, outcome);
            }
            AppEvent::CarouselTick(mount) => {
                self.handle_carousel_tick(mount);
            }
        }
    }
}

impl App {
    fn handle_carousel_tick(&mut self, mount: lib_core::model::MountId) {
        let mut state = self.state.write();
        if state.carousel.tick(mount) {
            state.needs_immediate_repaint = true;
            tracing::trace!(active = state.carousel.active(), "Carousel advanced");
        } else {
            tracing::debug!(mount = mount.value(), "Ignored tick from unmounted carousel");
        }
    }
}
