//! # Landing Screen
//!
//! Scrollable page: hero with the concept explainer, subject cards, the
//! visualization carousel, the feature grid and the footer.

use egui;

use crate::app::{AppLike, AppState};
use crate::ui::widgets::{branding, carousel, features, hero, subject_cards};

/// Render the landing page
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    egui::ScrollArea::vertical()
        .id_salt("landing_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            hero::render(ui, state, app);
            subject_cards::render(ui, app);
            carousel::render(ui, state);
            features::render(ui);
            branding::render_footer(ui);
        });
}
