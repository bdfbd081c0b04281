//! # Reusable UI Widgets
//!
//! Sections of the landing view and the pieces of the workspace view.

pub mod branding;
pub mod carousel;
pub mod features;
pub mod hero;
pub mod icons;
pub mod simulation_panel;
pub mod subject_cards;
