//! # Hero Section
//!
//! Gradient banner with the welcome text, the concept explainer box and its answer.

use egui::{self, Align, Color32, CornerRadius, Layout, Margin, RichText, Vec2};
use lib_core::catalog::{HERO_SUBTITLE, HERO_TITLE, SEARCH_PLACEHOLDER};
use lib_core::model::GENERIC_CONTEXT;

use crate::app::{AppLike, AppState};
use crate::ui::theme::EduColors;
use crate::ui::widgets::icons::{material, size, Icons};

/// Width of the query box and the answer card.
const SEARCH_WIDTH: f32 = 560.0;

/// Render the hero banner
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let colors = EduColors::default();

    // Reserve the background slot so the gradient is painted under the content
    let background = ui.painter().add(egui::Shape::Noop);

    let response = egui::Frame::new()
        .inner_margin(Margin::symmetric(32, 56))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(HERO_TITLE).size(44.0).strong().color(Color32::WHITE));
                ui.add_space(14.0);
                ui.scope(|ui| {
                    ui.set_max_width(720.0);
                    ui.label(RichText::new(HERO_SUBTITLE).size(18.0).color(colors.primary_soft));
                });
                ui.add_space(32.0);
                render_search_box(ui, state, app);
                render_answer(ui, state, &colors);
            });
        })
        .response;

    ui.painter().set(
        background,
        horizontal_gradient(response.rect, colors.primary, colors.primary_deep),
    );
}

/// Query input with the submit button.
///
/// Enter submits even while a previous answer is pending; the newest
/// question wins. The button is disabled while in flight.
fn render_search_box(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
    let mut input = state.query.input.clone();
    let in_flight = state.query.is_in_flight();

    ui.allocate_ui_with_layout(
        Vec2::new(SEARCH_WIDTH, 44.0),
        Layout::left_to_right(Align::Center),
        |ui| {
            let edit = egui::TextEdit::singleline(&mut input)
                .hint_text(SEARCH_PLACEHOLDER)
                .desired_width(SEARCH_WIDTH - 56.0)
                .margin(Margin::symmetric(12, 10))
                .font(egui::TextStyle::Body);
            let response = ui.add(edit);

            if response.changed() {
                app.handle_query_input(input.clone());
            }

            let submitted_with_enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let icon = if in_flight { material::HOURGLASS } else { material::SEARCH };
            let button = ui
                .add_enabled(!in_flight, egui::Button::new(Icons::icon(icon, size::MEDIUM)))
                .on_hover_text("Explain this concept");

            if submitted_with_enter || button.clicked() {
                app.handle_search_submit();
                response.request_focus();
            }
        },
    );

    ui.add_space(6.0);
    ui.label(RichText::new(context_label(state)).small().color(EduColors::default().primary_soft));

    if in_flight {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().color(Color32::WHITE));
            ui.label(RichText::new("Thinking...").color(Color32::WHITE));
        });
    }
}

/// Which context the next question is asked in; the subject last explored
/// stays in effect after returning to the landing page.
fn context_label(state: &AppState) -> String {
    let context = state.query_context().map(|s| s.name()).unwrap_or(GENERIC_CONTEXT);
    format!("Asking about: {}", context)
}

/// Answer card, shown once the latest query settled.
fn render_answer(ui: &mut egui::Ui, state: &AppState, colors: &EduColors) {
    let result = state.query.result();
    if result.is_empty() {
        return;
    }

    ui.add_space(24.0);
    egui::Frame::new()
        .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 230))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(SEARCH_WIDTH);
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.label(RichText::new("Here's what I found:").size(18.0).strong().color(colors.text));
                ui.add_space(8.0);
                ui.label(RichText::new(result).size(15.0).color(colors.text));

                if let Some(settled_at) = state.query.settled_at() {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("Answered at {}", lib_utils::format_clock(settled_at)))
                            .small()
                            .color(colors.text_secondary),
                    );
                }
            });
        });
}

/// Left-to-right two-color gradient filling `rect`.
pub fn horizontal_gradient(rect: egui::Rect, left: Color32, right: Color32) -> egui::Shape {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), left);
    mesh.colored_vertex(rect.right_top(), right);
    mesh.colored_vertex(rect.right_bottom(), right);
    mesh.colored_vertex(rect.left_bottom(), left);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    egui::Shape::mesh(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_label_follows_explored_subject() {
        let mut state = AppState::new(false);
        assert_eq!(context_label(&state), "Asking about: General science");

        state.navigation.explore(lib_core::Subject::Physics);
        state.navigation.back();
        assert_eq!(context_label(&state), "Asking about: Physics");
    }

    #[test]
    fn test_gradient_covers_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 40.0));
        let shape = horizontal_gradient(rect, Color32::RED, Color32::BLUE);
        assert_eq!(shape.visual_bounding_rect(), rect);
    }
}
