//! # App Trait
//!
//! The actions screen renderers may trigger. Renderers take `&mut impl AppLike`
//! so they never touch handlers or the state lock directly.

use std::sync::Arc;
use parking_lot::RwLock;
use lib_core::catalog::Subject;
use crate::app::AppState;

/// Trait for application-like types that screen renderers can use.
pub trait AppLike {
    /// Get access to the application state.
    fn state(&self) -> &Arc<RwLock<AppState>>;

    // Query methods
    fn handle_query_input(&mut self, text: String);
    fn handle_search_submit(&mut self);

    // Navigation methods
    fn handle_explore(&mut self, subject: Subject);
    fn handle_back(&mut self);
    fn handle_pick_simulation(&mut self, id: &str);

    // Simulation panel
    fn handle_simulation_parameters(&mut self, parameter_1: f32, parameter_2: f32);
}
