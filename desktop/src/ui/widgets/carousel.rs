//! # Visualization Carousel
//!
//! Dark showcase band: the descriptor list on the left with the active one
//! highlighted, the active image on the right. The index comes from
//! [`lib_core::CarouselState`]; this widget only presents it.

use egui::{self, Color32, CornerRadius, Margin, RichText};
use lib_core::catalog::{VisualizationDescriptor, VISUALIZATIONS};

use crate::app::AppState;
use crate::ui::theme::{EduColors, Theme};
use crate::ui::widgets::icons::{size, Icons};
use crate::ui::widgets::subject_cards::icon_disc;

/// Seconds a highlight or image cross-fade takes.
const TRANSITION_SECS: f32 = 0.5;

/// Height of the image pane.
const IMAGE_HEIGHT: f32 = 360.0;

/// Render the carousel band
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let colors = EduColors::default();

    egui::Frame::new()
        .fill(colors.dark_band)
        .inner_margin(Margin::symmetric(32, 64))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("Interactive Visualizations").size(32.0).strong().color(Color32::WHITE));
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Experience learning like never before with our cutting-edge visualization tools")
                        .size(18.0)
                        .color(colors.text_muted),
                );
            });
            ui.add_space(40.0);

            ui.columns(2, |columns| {
                for (index, descriptor) in VISUALIZATIONS.iter().enumerate() {
                    let t = transition(&columns[0], index, state);
                    render_descriptor(&mut columns[0], descriptor, t, &colors);
                    columns[0].add_space(16.0);
                }
                render_images(&mut columns[1], state);
            });
        });
}

/// 0.0 (inactive) to 1.0 (active); eased when animations are enabled.
fn transition(ui: &egui::Ui, index: usize, state: &AppState) -> f32 {
    let active = state.carousel.is_active(index);
    if state.animations {
        ui.ctx()
            .animate_bool_with_time(egui::Id::new(("carousel_item", index)), active, TRANSITION_SECS)
    } else if active {
        1.0
    } else {
        0.0
    }
}

fn render_descriptor(ui: &mut egui::Ui, descriptor: &VisualizationDescriptor, t: f32, colors: &EduColors) {
    ui.scope(|ui| {
        ui.multiply_opacity(0.5 + 0.5 * t);

        egui::Frame::new()
            .fill(colors.dark_card)
            .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
            .inner_margin(Margin::same(22))
            .outer_margin(Margin {
                left: 0,
                right: (16.0 * (1.0 - t)) as i8,
                top: 0,
                bottom: 0,
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let disc = lerp_color(colors.dark_inactive, colors.primary, t);
                    icon_disc(ui, Icons::catalog(descriptor.icon, size::MEDIUM, Color32::WHITE), disc, 48.0);
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(descriptor.title).size(20.0).strong().color(Color32::WHITE));
                        ui.add_space(4.0);
                        ui.label(RichText::new(descriptor.description).color(colors.text_muted));
                    });
                });
            });
    });
}

/// Cross-fade between the descriptor images.
fn render_images(ui: &mut egui::Ui, state: &AppState) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), IMAGE_HEIGHT), egui::Sense::hover());

    for (index, descriptor) in VISUALIZATIONS.iter().enumerate() {
        let alpha = transition(ui, index, state);
        if alpha <= 0.0 {
            continue;
        }
        egui::Image::new(descriptor.image_url)
            .corner_radius(CornerRadius::same(Theme::CARD_RADIUS))
            .tint(Color32::WHITE.gamma_multiply(alpha))
            .show_loading_spinner(true)
            .paint_at(ui, rect);
    }
}

fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let from = Color32::from_rgb(0, 100, 200);
        let to = Color32::from_rgb(200, 0, 100);
        assert_eq!(lerp_color(from, to, 0.0), from);
        assert_eq!(lerp_color(from, to, 1.0), to);
        assert_eq!(lerp_color(from, to, 0.5), Color32::from_rgb(100, 50, 150));
    }

    #[test]
    fn test_transition_without_animations_is_binary() {
        let ctx = egui::Context::default();
        let mut state = AppState::new(false);
        let mount = state.carousel.mount();
        state.carousel.tick(mount);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                assert_eq!(transition(ui, 0, &state), 0.0);
                assert_eq!(transition(ui, 1, &state), 1.0);
            });
        });
    }
}
