//! # Navigation Handlers
//!
//! Handlers for the landing/workspace toggle and simulation picking.

use crate::app::state::{AppState, SimulationPanelState};
use lib_core::catalog::Subject;
use lib_core::model::MountId;
use lib_core::{Result, View};
use parking_lot::RwLock;
use std::sync::Arc;

/// Open the workspace of `subject` and unmount the landing view.
///
/// Internal handler function - use [`crate::app::App::handle_explore`] instead.
pub(crate) fn handle_explore(state: Arc<RwLock<AppState>>, subject: Subject) {
    let mut state = state.write();
    state.navigation.explore(subject);
    state.carousel.unmount();
    state.simulation_panel = SimulationPanelState::default();
    tracing::info!(subject = %subject, "Exploring subject workspace");
}

/// Return to the landing view.
///
/// Returns the new carousel mount when the landing view was actually
/// remounted, `None` when it was already showing.
///
/// Internal handler function - use [`crate::app::App::handle_back`] instead.
pub(crate) fn handle_back(state: Arc<RwLock<AppState>>) -> Option<MountId> {
    let mut state = state.write();
    if state.navigation.view() == View::Landing {
        return None;
    }

    state.navigation.back();
    let mount = state.carousel.mount();
    tracing::info!(mount = mount.value(), "Back to landing view");
    Some(mount)
}

/// Pick a simulation in the current workspace.
///
/// Internal handler function - use [`crate::app::App::handle_pick_simulation`] instead.
pub(crate) fn handle_pick_simulation(state: Arc<RwLock<AppState>>, id: &str) -> Result<()> {
    let mut state = state.write();
    let simulation = state.navigation.pick_simulation(id)?;
    state.simulation_panel = SimulationPanelState::default();
    tracing::info!(simulation = simulation.id, "Simulation selected");
    Ok(())
}

/// Mount the landing view at startup.
pub(crate) fn mount_landing(state: Arc<RwLock<AppState>>) -> MountId {
    let mut state = state.write();
    state.carousel.mount()
}

/// Store new placeholder slider values.
pub(crate) fn handle_simulation_parameters(state: Arc<RwLock<AppState>>, parameter_1: f32, parameter_2: f32) {
    let mut state = state.write();
    state.simulation_panel.set_parameters(parameter_1, parameter_2);
}
