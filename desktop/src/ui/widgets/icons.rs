//! # Icons Helper Module
//!
//! Material Design icon glyphs for the catalog's symbolic [`Icon`]s and the
//! few UI controls that carry an icon.

use egui::{Color32, RichText};
use lib_core::catalog::Icon;

/// Icon size constants
pub mod size {
    pub const SMALL: f32 = 16.0;
    pub const MEDIUM: f32 = 24.0;
    pub const LARGE: f32 = 32.0;
    pub const XLARGE: f32 = 48.0;
}

/// Material Design Icons
pub mod material {
    /// Search icon
    pub const SEARCH: &str = "\u{e8b6}"; // search
    /// Spinner stand-in while a query is in flight
    pub const HOURGLASS: &str = "\u{e88b}"; // hourglass_empty
    /// Arrow right icon
    pub const ARROW_RIGHT: &str = "\u{e5c8}"; // arrow_forward
    /// Back chevron
    pub const CHEVRON_LEFT: &str = "\u{e5cb}"; // chevron_left
    /// Start/play icon
    pub const PLAY: &str = "\u{e037}"; // play_arrow
    /// Atom
    pub const ATOM: &str = "\u{e3a5}"; // blur_on
    /// Lab flask
    pub const SCIENCE: &str = "\u{ea4b}"; // science
    /// Calculator
    pub const CALCULATE: &str = "\u{ea5f}"; // calculate
    /// 3D cube
    pub const VIEW_IN_AR: &str = "\u{e9fe}"; // view_in_ar
    /// Microscope
    pub const BIOTECH: &str = "\u{ea3a}"; // biotech
    /// Line chart
    pub const SHOW_CHART: &str = "\u{e6e1}"; // show_chart
    /// People
    pub const GROUP: &str = "\u{e7ef}"; // group
    /// Open book
    pub const MENU_BOOK: &str = "\u{ea19}"; // menu_book
    /// Trophy
    pub const EMOJI_EVENTS: &str = "\u{ea65}"; // emoji_events
    /// Graduation cap
    pub const SCHOOL: &str = "\u{e80c}"; // school
}

/// Glyph for a catalog icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Atom => material::ATOM,
        Icon::Beaker => material::SCIENCE,
        Icon::Calculator => material::CALCULATE,
        Icon::Cube => material::VIEW_IN_AR,
        Icon::Microscope => material::BIOTECH,
        Icon::LineChart => material::SHOW_CHART,
        Icon::Users => material::GROUP,
        Icon::Book => material::MENU_BOOK,
        Icon::Award => material::EMOJI_EVENTS,
        Icon::GraduationCap => material::SCHOOL,
    }
}

/// Icon helper functions
pub struct Icons;

impl Icons {
    /// Render an icon with default styling
    pub fn icon(icon: &str, size: f32) -> RichText {
        RichText::new(icon).size(size)
    }

    /// Render an icon with custom color
    pub fn icon_color(icon: &str, size: f32, color: Color32) -> RichText {
        RichText::new(icon).size(size).color(color)
    }

    /// Render a catalog icon with custom color
    pub fn catalog(icon: Icon, size: f32, color: Color32) -> RichText {
        Self::icon_color(glyph(icon), size, color)
    }
}

/// Register the Material Icons font. Call once before the first frame.
pub fn initialize_material_icons(ctx: &egui::Context) {
    egui_material_icons::initialize(ctx);
}
