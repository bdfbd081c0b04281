//! # Navigation State
//!
//! Landing/workspace toggle, the selected subject and the selected simulation.

use crate::catalog::{Simulation, Subject};
use crate::error::{CoreError, Result};

/// Which of the two views is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Workspace,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    show_workspace: bool,
    selected_subject: Option<Subject>,
    selected_simulation: Option<&'static str>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_workspace(&self) -> bool {
        self.show_workspace
    }

    pub fn selected_subject(&self) -> Option<Subject> {
        self.selected_subject
    }

    pub fn selected_simulation_id(&self) -> Option<&'static str> {
        self.selected_simulation
    }

    /// Selected simulation resolved against the current subject.
    pub fn selected_simulation(&self) -> Option<&'static Simulation> {
        let subject = self.selected_subject?;
        subject.simulation(self.selected_simulation?)
    }

    pub fn view(&self) -> View {
        if self.show_workspace {
            View::Workspace
        } else {
            View::Landing
        }
    }

    /// Open the workspace of `subject` with no simulation picked.
    pub fn explore(&mut self, subject: Subject) {
        self.selected_subject = Some(subject);
        self.selected_simulation = None;
        self.show_workspace = true;
    }

    /// Return to the landing view. The selection is kept until the next `explore`.
    pub fn back(&mut self) {
        self.show_workspace = false;
    }

    /// Pick a simulation of the current subject.
    ///
    /// Rejected (state unchanged) outside the workspace or for an id that is
    /// not in the current subject's list.
    pub fn pick_simulation(&mut self, id: &str) -> Result<&'static Simulation> {
        if !self.show_workspace {
            return Err(CoreError::Validation("Simulations can only be picked in the workspace".to_string()));
        }
        let subject = self
            .selected_subject
            .ok_or_else(|| CoreError::Validation("No subject selected".to_string()))?;
        let simulation = subject
            .simulation(id)
            .ok_or_else(|| CoreError::Validation(format!("Unknown {} simulation: {}", subject, id)))?;

        self.selected_simulation = Some(simulation.id);
        Ok(simulation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_landing() {
        let nav = NavigationState::new();
        assert_eq!(nav.view(), View::Landing);
        assert_eq!(nav.selected_subject(), None);
        assert_eq!(nav.selected_simulation_id(), None);
    }

    #[test]
    fn test_explore_then_back() {
        let mut nav = NavigationState::new();
        nav.explore(Subject::Chemistry);

        assert!(nav.show_workspace());
        assert_eq!(nav.selected_subject(), Some(Subject::Chemistry));
        assert_eq!(nav.selected_simulation_id(), None);

        nav.back();
        assert!(!nav.show_workspace());
        assert_eq!(nav.view(), View::Landing);
    }

    #[test]
    fn test_explore_clears_previous_simulation() {
        let mut nav = NavigationState::new();
        nav.explore(Subject::Physics);
        nav.pick_simulation("pendulum").unwrap();
        nav.back();
        assert_eq!(nav.selected_simulation_id(), Some("pendulum"));

        nav.explore(Subject::Physics);
        assert_eq!(nav.selected_simulation_id(), None);
    }

    #[test]
    fn test_pick_simulation_validates_membership() {
        let mut nav = NavigationState::new();
        nav.explore(Subject::Mathematics);

        let sim = nav.pick_simulation("vector-fields").unwrap();
        assert_eq!(sim.title, "Vector Fields");
        assert_eq!(nav.selected_simulation().map(|s| s.id), Some("vector-fields"));

        assert!(matches!(nav.pick_simulation("titration"), Err(CoreError::Validation(_))));
        assert_eq!(nav.selected_simulation_id(), Some("vector-fields"));
    }

    #[test]
    fn test_pick_simulation_rejected_on_landing() {
        let mut nav = NavigationState::new();
        assert!(nav.pick_simulation("pendulum").is_err());

        nav.explore(Subject::Physics);
        nav.back();
        assert!(nav.pick_simulation("pendulum").is_err());
        assert_eq!(nav.selected_simulation_id(), None);
    }
}
