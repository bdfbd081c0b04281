//! # GUI Theme
//!
//! EduNexus light theme: gray-50 page, white cards, blue/indigo accents and a
//! dark showcase band for the visualization carousel.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, CornerRadius, Stroke, Visuals};

/// EduNexus color palette
#[derive(Debug, Clone, PartialEq)]
pub struct EduColors {
    /// Page background (gray-50)
    pub background: Color32,
    /// Card surface (white)
    pub surface: Color32,
    /// Primary text (gray-900)
    pub text: Color32,
    /// Secondary text (gray-600)
    pub text_secondary: Color32,
    /// Muted text on dark bands (gray-400)
    pub text_muted: Color32,
    /// Primary accent (blue-600)
    pub primary: Color32,
    /// Hero gradient end (indigo-700)
    pub primary_deep: Color32,
    /// Light accent (blue-100)
    pub primary_soft: Color32,
    /// Dark band background (gray-900)
    pub dark_band: Color32,
    /// Card on the dark band (gray-800)
    pub dark_card: Color32,
    /// Inactive icon disc on the dark band (gray-700)
    pub dark_inactive: Color32,
    /// Borders (gray-200)
    pub border: Color32,
}

impl Default for EduColors {
    fn default() -> Self {
        EduColors {
            background: Color32::from_rgb(249, 250, 251),    // #F9FAFB
            surface: Color32::WHITE,
            text: Color32::from_rgb(17, 24, 39),             // #111827
            text_secondary: Color32::from_rgb(75, 85, 99),   // #4B5563
            text_muted: Color32::from_rgb(156, 163, 175),    // #9CA3AF
            primary: Color32::from_rgb(37, 99, 235),         // #2563EB
            primary_deep: Color32::from_rgb(67, 56, 202),    // #4338CA
            primary_soft: Color32::from_rgb(219, 234, 254),  // #DBEAFE
            dark_band: Color32::from_rgb(17, 24, 39),        // #111827
            dark_card: Color32::from_rgb(31, 41, 55),        // #1F2937
            dark_inactive: Color32::from_rgb(55, 65, 81),    // #374151
            border: Color32::from_rgb(229, 231, 235),        // #E5E7EB
        }
    }
}

impl EduColors {
    /// Accent color of a subject card.
    pub fn subject_accent(&self, subject: lib_core::Subject) -> Color32 {
        let [r, g, b] = subject.accent_rgb();
        Color32::from_rgb(r, g, b)
    }

    /// Pale disc behind a subject icon (the accent at low opacity).
    pub fn subject_tint(&self, subject: lib_core::Subject) -> Color32 {
        let [r, g, b] = subject.accent_rgb();
        Color32::from_rgba_unmultiplied(r, g, b, 32)
    }
}

/// Application theme
pub struct Theme;

impl Theme {
    /// Card corner radius used across screens.
    pub const CARD_RADIUS: u8 = 8;

    /// Create egui Visuals from the palette
    pub fn visuals(colors: &EduColors) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(colors.text);
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = colors.background;
        visuals.extreme_bg_color = colors.surface;

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = colors.surface;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(6);

        visuals.widgets.hovered.weak_bg_fill = colors.primary_soft;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.primary);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(6);

        visuals.widgets.active.weak_bg_fill = colors.primary_soft;
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, colors.primary);
        visuals.widgets.active.corner_radius = CornerRadius::same(6);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(37, 99, 235, 60);
        visuals.selection.stroke = Stroke::new(2.0, colors.primary);

        visuals.hyperlink_color = colors.primary;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply the theme to an egui context
    ///
    /// Uses `style_mut_of` for both egui themes so a system theme switch does
    /// not bring back the default dark visuals.
    pub fn apply(ctx: &Context, colors: &EduColors) {
        let visuals = Self::visuals(colors);

        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(14.0, 8.0);
                style.spacing.interact_size = egui::Vec2::new(40.0, 28.0);
                style.spacing.slider_width = 220.0;
            });
        }
        ctx.set_theme(egui::ThemePreference::Light);

        tracing::debug!("Applied EduNexus theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visuals_use_palette() {
        let colors = EduColors::default();
        let visuals = Theme::visuals(&colors);
        assert!(!visuals.dark_mode);
        assert_eq!(visuals.panel_fill, colors.background);
        assert_eq!(visuals.override_text_color, Some(colors.text));
    }

    #[test]
    fn test_subject_accent_matches_catalog() {
        let colors = EduColors::default();
        assert_eq!(
            colors.subject_accent(lib_core::Subject::Chemistry),
            Color32::from_rgb(22, 163, 74)
        );
    }
}
