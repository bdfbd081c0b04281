//! # Application State Types
//!
//! Everything the UI renders from. The state machines themselves live in
//! `lib_core::model`; this module groups them with the UI-only bits
//! (simulation panel sliders, repaint flag).

use lib_core::catalog::{Simulation, Subject};
use lib_core::{CarouselState, NavigationState, QueryState, View};

/// Default slider position of a freshly picked simulation.
pub const DEFAULT_PARAMETER: f32 = 50.0;

/// Slider range shared by both simulation parameters.
pub const PARAMETER_RANGE: std::ops::RangeInclusive<f32> = 0.0..=100.0;

/// Placeholder controls of the simulation panel.
///
/// The values are shown and can be dragged, but nothing consumes them and
/// the simulation never starts.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationPanelState {
    pub parameter_1: f32,
    pub parameter_2: f32,
    started: bool,
}

impl Default for SimulationPanelState {
    fn default() -> Self {
        Self {
            parameter_1: DEFAULT_PARAMETER,
            parameter_2: DEFAULT_PARAMETER,
            started: false,
        }
    }
}

impl SimulationPanelState {
    /// Always false: "Start" has no effect.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Store new slider values, clamped to [`PARAMETER_RANGE`].
    pub fn set_parameters(&mut self, parameter_1: f32, parameter_2: f32) {
        self.parameter_1 = parameter_1.clamp(*PARAMETER_RANGE.start(), *PARAMETER_RANGE.end());
        self.parameter_2 = parameter_2.clamp(*PARAMETER_RANGE.start(), *PARAMETER_RANGE.end());
    }
}

/// Main application state
///
/// Cloned once per frame for rendering, so every field stays cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Concept explainer (query box + answer)
    pub query: QueryState,
    /// Visualization carousel on the landing view
    pub carousel: CarouselState,
    /// Landing/workspace toggle and selections
    pub navigation: NavigationState,
    /// Placeholder simulation controls
    pub simulation_panel: SimulationPanelState,
    /// Animated carousel transitions (`EDU_ANIMATIONS`)
    pub animations: bool,
    /// Request an immediate repaint after async state changes
    pub needs_immediate_repaint: bool,
}

impl AppState {
    pub fn new(animations: bool) -> Self {
        Self {
            query: QueryState::new(),
            carousel: CarouselState::for_catalog(),
            navigation: NavigationState::new(),
            simulation_panel: SimulationPanelState::default(),
            animations,
            needs_immediate_repaint: false,
        }
    }

    /// View currently on screen.
    pub fn current_view(&self) -> View {
        self.navigation.view()
    }

    /// Subject whose name prefixes the next prompt, if any.
    pub fn query_context(&self) -> Option<Subject> {
        self.navigation.selected_subject()
    }

    /// Simulation shown in the workspace panel, if one is picked.
    pub fn active_simulation(&self) -> Option<&'static Simulation> {
        match self.current_view() {
            View::Workspace => self.navigation.selected_simulation(),
            View::Landing => None,
        }
    }

    /// Window title for the current view.
    pub fn window_title(&self) -> String {
        match (self.current_view(), self.navigation.selected_subject()) {
            (View::Workspace, Some(subject)) => {
                format!("{} - {} Workspace", lib_core::catalog::BRAND_NAME, subject)
            }
            _ => lib_core::catalog::BRAND_NAME.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_panel_never_starts() {
        let mut panel = SimulationPanelState::default();
        panel.set_parameters(150.0, -3.0);
        assert_eq!(panel.parameter_1, 100.0);
        assert_eq!(panel.parameter_2, 0.0);
        assert!(!panel.is_started());
    }

    #[test]
    fn test_window_title_follows_view() {
        let mut state = AppState::default();
        assert_eq!(state.window_title(), "EduNexus");

        state.navigation.explore(Subject::Physics);
        assert_eq!(state.window_title(), "EduNexus - Physics Workspace");
        assert_eq!(state.query_context(), Some(Subject::Physics));
    }

    #[test]
    fn test_active_simulation_hidden_on_landing() {
        let mut state = AppState::default();
        state.navigation.explore(Subject::Chemistry);
        state.navigation.pick_simulation("gas-laws").unwrap();
        assert_eq!(state.active_simulation().map(|s| s.id), Some("gas-laws"));

        state.navigation.back();
        assert!(state.active_simulation().is_none());
    }
}
