//! # Simulation Panel
//!
//! Placeholder for a picked simulation: title, a loading line, two
//! parameter sliders and a Start button. Nothing here runs a simulation.

use egui::{self, CornerRadius, Margin, RichText, Stroke};
use lib_core::catalog::Simulation;

use crate::app::{AppLike, SimulationPanelState, PARAMETER_RANGE};
use crate::ui::theme::{EduColors, Theme};
use crate::ui::widgets::icons::material;

/// Render the panel for `simulation`
pub fn render(ui: &mut egui::Ui, simulation: &Simulation, panel: &SimulationPanelState, app: &mut impl AppLike) {
    let colors = EduColors::default();

    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
        .inner_margin(Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(420.0);

            ui.label(RichText::new(simulation.title).size(26.0).strong().color(colors.text));
            ui.add_space(4.0);
            ui.label(RichText::new(simulation.summary).color(colors.text_secondary));
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Simulation loading...").italics().color(colors.text_secondary));
            });
            ui.add_space(24.0);

            let mut parameter_1 = panel.parameter_1;
            let mut parameter_2 = panel.parameter_2;
            let changed_1 = ui
                .add(egui::Slider::new(&mut parameter_1, PARAMETER_RANGE).text("Parameter 1"))
                .changed();
            let changed_2 = ui
                .add(egui::Slider::new(&mut parameter_2, PARAMETER_RANGE).text("Parameter 2"))
                .changed();
            if changed_1 || changed_2 {
                app.handle_simulation_parameters(parameter_1, parameter_2);
            }

            ui.add_space(24.0);
            let start = egui::Button::new(
                RichText::new(format!("{}  Start", material::PLAY)).color(egui::Color32::WHITE),
            )
            .fill(colors.primary);
            if ui.add(start).clicked() {
                tracing::debug!(simulation = simulation.id, "Start pressed on placeholder simulation");
            }
        });
}
