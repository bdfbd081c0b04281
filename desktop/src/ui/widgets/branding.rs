//! # Branding Components
//!
//! Brand mark and the footer shared by both views.

use egui::{self, Color32, Margin, RichText};
use lib_core::catalog::{FooterSection, BRAND_NAME, BRAND_TAGLINE, FOOTER_SECTIONS};

use crate::ui::theme::EduColors;
use crate::ui::widgets::icons::{material, size, Icons};

/// Render the graduation-cap brand mark followed by the name
pub fn render_brand(ui: &mut egui::Ui, text_color: Color32) {
    let colors = EduColors::default();
    ui.horizontal(|ui| {
        ui.label(Icons::icon_color(material::SCHOOL, size::LARGE, colors.primary));
        ui.label(RichText::new(BRAND_NAME).size(22.0).strong().color(text_color));
    });
}

/// Render the dark footer: brand column plus one column per link section
pub fn render_footer(ui: &mut egui::Ui) {
    let colors = EduColors::default();

    egui::Frame::new()
        .fill(colors.dark_band)
        .inner_margin(Margin::symmetric(32, 48))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.columns(FOOTER_SECTIONS.len() + 1, |columns| {
                render_brand(&mut columns[0], Color32::WHITE);
                columns[0].add_space(8.0);
                columns[0].label(RichText::new(BRAND_TAGLINE).color(colors.text_muted));

                for (column, section) in columns[1..].iter_mut().zip(FOOTER_SECTIONS) {
                    render_section(column, section, &colors);
                }
            });
        });
}

fn render_section(ui: &mut egui::Ui, section: &FooterSection, colors: &EduColors) {
    ui.label(RichText::new(section.heading).strong().color(Color32::WHITE));
    ui.add_space(12.0);
    for link in section.links {
        ui.label(RichText::new(*link).color(colors.text_muted));
        ui.add_space(6.0);
    }
}
