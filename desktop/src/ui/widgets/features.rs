//! # Features Section
//!
//! "Why Choose Our Platform?" highlights.

use egui::{self, Margin, RichText};
use lib_core::catalog::{Feature, FEATURES};

use crate::ui::theme::EduColors;
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::subject_cards::icon_disc;

/// Render the feature highlights
pub fn render(ui: &mut egui::Ui) {
    let colors = EduColors::default();

    egui::Frame::new()
        .inner_margin(Margin::symmetric(32, 72))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Why Choose Our Platform?").size(32.0).strong().color(colors.text));
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Experience the future of education with our innovative learning tools.")
                        .size(17.0)
                        .color(colors.text_secondary),
                );
            });
            ui.add_space(40.0);

            ui.columns(FEATURES.len(), |columns| {
                for (column, feature) in columns.iter_mut().zip(FEATURES) {
                    render_feature(column, feature, &colors);
                }
            });
        });
}

fn render_feature(ui: &mut egui::Ui, feature: &Feature, colors: &EduColors) {
    ui.vertical_centered(|ui| {
        icon_disc(ui, Icons::catalog(feature.icon, size::MEDIUM, colors.primary), colors.primary_soft, 48.0);
        ui.add_space(12.0);
        ui.label(RichText::new(feature.title).size(20.0).strong().color(colors.text));
        ui.add_space(6.0);
        ui.label(RichText::new(feature.description).color(colors.text_secondary));
    });
}
