//! # Subject Cards
//!
//! One card per subject with its blurb and an "Explore" button.

use egui::{self, Color32, CornerRadius, Margin, RichText, Stroke};
use lib_core::catalog::Subject;

use crate::app::AppLike;
use crate::ui::theme::{EduColors, Theme};
use crate::ui::widgets::icons::{material, size, Icons};

/// Render the three subject cards side by side
pub fn render(ui: &mut egui::Ui, app: &mut impl AppLike) {
    let colors = EduColors::default();

    egui::Frame::new()
        .inner_margin(Margin::symmetric(32, 32))
        .show(ui, |ui| {
            ui.columns(Subject::all().len(), |columns| {
                for (column, subject) in columns.iter_mut().zip(Subject::all()) {
                    render_card(column, *subject, &colors, app);
                }
            });
        });
}

fn render_card(ui: &mut egui::Ui, subject: Subject, colors: &EduColors, app: &mut impl AppLike) {
    let accent = colors.subject_accent(subject);

    egui::Frame::new()
        .fill(colors.surface)
        .stroke(Stroke::new(1.0, colors.border))
        .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
        .inner_margin(Margin::same(28))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            icon_disc(ui, Icons::catalog(subject.icon(), size::LARGE, accent), colors.subject_tint(subject), 64.0);
            ui.add_space(14.0);
            ui.label(RichText::new(subject.name()).size(24.0).strong().color(colors.text));
            ui.add_space(6.0);
            ui.label(RichText::new(subject.description()).color(colors.text_secondary));
            ui.add_space(20.0);

            let label = RichText::new(format!("Explore {}  {}", subject.name(), material::ARROW_RIGHT))
                .color(Color32::WHITE)
                .strong();
            if ui.add(egui::Button::new(label).fill(accent)).clicked() {
                app.handle_explore(subject);
            }
        });
}

/// Round tinted disc with a centered icon.
pub fn icon_disc(ui: &mut egui::Ui, icon: RichText, fill: Color32, diameter: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), diameter / 2.0, fill);

    let galley = egui::WidgetText::from(icon).into_galley(
        ui,
        Some(egui::TextWrapMode::Extend),
        f32::INFINITY,
        egui::TextStyle::Body,
    );
    let pos = rect.center() - galley.size() / 2.0;
    ui.painter().galley(pos, galley, Color32::WHITE);
}
