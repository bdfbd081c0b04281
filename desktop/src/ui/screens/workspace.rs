//! # Workspace Screen
//!
//! Top bar with the way back, the subject heading, the simulation list and
//! the panel of the picked simulation.

use egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};
use lib_core::catalog::Subject;

use crate::app::{AppLike, AppState};
use crate::ui::theme::{EduColors, Theme};
use crate::ui::widgets::icons::{material, size, Icons};
use crate::ui::widgets::{branding, simulation_panel};

/// Width of the simulation list column.
const SIDEBAR_WIDTH: f32 = 260.0;

/// Render the workspace of the selected subject
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let colors = EduColors::default();

    render_top_bar(ui, &colors, app);

    // Workspace is only reachable through `explore`, which always selects a subject
    let Some(subject) = state.navigation.selected_subject() else {
        ui.label(RichText::new("No subject selected").color(colors.text_secondary));
        return;
    };

    egui::Frame::new()
        .inner_margin(Margin::symmetric(32, 32))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} Workspace", subject.name()))
                    .size(30.0)
                    .strong()
                    .color(colors.text),
            );
            ui.add_space(24.0);

            ui.horizontal_top(|ui| {
                render_simulation_list(ui, state, subject, &colors, app);
                ui.add_space(24.0);
                ui.vertical(|ui| match state.active_simulation() {
                    Some(simulation) => simulation_panel::render(ui, simulation, &state.simulation_panel, app),
                    None => render_empty_panel(ui, subject, &colors),
                });
            });
        });
}

fn render_top_bar(ui: &mut egui::Ui, colors: &EduColors, app: &mut impl AppLike) {
    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .inner_margin(Margin::symmetric(24, 14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let back = egui::Button::new(
                    RichText::new(format!("{} Back to Home", material::CHEVRON_LEFT)).color(colors.text_secondary),
                )
                .frame(false);
                if ui.add(back).clicked() {
                    app.handle_back();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    branding::render_brand(ui, colors.text);
                });
            });
        });
}

fn render_simulation_list(
    ui: &mut egui::Ui,
    state: &AppState,
    subject: Subject,
    colors: &EduColors,
    app: &mut impl AppLike,
) {
    let accent = colors.subject_accent(subject);
    let selected = state.navigation.selected_simulation_id();

    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
        .inner_margin(Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(SIDEBAR_WIDTH);
            ui.horizontal(|ui| {
                ui.label(Icons::catalog(subject.icon(), size::MEDIUM, accent));
                ui.label(RichText::new("Simulations").size(18.0).strong().color(colors.text));
            });
            ui.add_space(12.0);

            for simulation in subject.simulations() {
                let is_selected = selected == Some(simulation.id);
                let text = if is_selected {
                    RichText::new(simulation.title).strong().color(accent)
                } else {
                    RichText::new(simulation.title).color(colors.text)
                };
                if ui.selectable_label(is_selected, text).on_hover_text(simulation.summary).clicked() {
                    app.handle_pick_simulation(simulation.id);
                }
                ui.add_space(4.0);
            }
        });
}

fn render_empty_panel(ui: &mut egui::Ui, subject: Subject, colors: &EduColors) {
    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
        .inner_margin(Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.set_min_height(420.0);
            ui.vertical_centered(|ui| {
                ui.add_space(140.0);
                ui.label(
                    RichText::new(format!("Interactive {} simulation workspace coming soon...", subject.name()))
                        .size(18.0)
                        .color(colors.text_secondary),
                );
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Pick a simulation on the left to open its controls.")
                        .color(Color32::from_gray(140)),
                );
            });
        });
}
