//! Application theme and shared text styles.
//!
//! One monospace style for everything, with a dark and a light palette
//! picked from the system preference at startup.

use eframe::egui::{self, Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Accent colors shared by both themes.
pub mod accent {
    use eframe::egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);
    pub const GREEN: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
    pub const RED: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
    pub const AMBER: Color32 = Color32::from_rgb(0xf5, 0x9e, 0x0b);
}

/// Theme-aware palette for panel chrome and text.
#[derive(Clone, Copy)]
pub struct ThemeColors {
    pub bg_panel: Color32,
    pub bg_header: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub text_dim: Color32,
}

impl ThemeColors {
    /// Colors for the current theme, from context.
    pub fn from_ctx(ctx: &egui::Context) -> Self {
        Self::from_dark_mode(ctx.style().visuals.dark_mode)
    }

    /// Colors for the current theme, from UI.
    pub fn from_ui(ui: &egui::Ui) -> Self {
        Self::from_dark_mode(ui.visuals().dark_mode)
    }

    fn from_dark_mode(is_dark: bool) -> Self {
        if is_dark {
            Self {
                bg_panel: Color32::from_rgb(0x1f, 0x1f, 0x1f),
                bg_header: Color32::from_rgb(0x25, 0x25, 0x25),
                border: Color32::from_rgb(0x33, 0x33, 0x33),
                text_primary: Color32::from_rgb(0xe0, 0xe0, 0xe0),
                text_muted: Color32::from_rgb(0x88, 0x88, 0x88),
                text_dim: Color32::from_rgb(0x66, 0x66, 0x66),
            }
        } else {
            Self {
                bg_panel: Color32::from_rgb(0xff, 0xff, 0xff),
                bg_header: Color32::from_rgb(0xfa, 0xfa, 0xfa),
                border: Color32::from_rgb(0xd0, 0xd0, 0xd0),
                text_primary: Color32::from_rgb(0x1a, 0x1a, 0x1a),
                text_muted: Color32::from_rgb(0x66, 0x66, 0x66),
                text_dim: Color32::from_rgb(0x88, 0x88, 0x88),
            }
        }
    }
}

/// Configure egui style for the current system theme.
pub fn configure_style(ctx: &egui::Context) {
    let is_dark = ctx.style().visuals.dark_mode;
    ctx.set_visuals(build_visuals(is_dark));

    let mut style = (*ctx.style()).clone();

    // Monospace everywhere: the table columns are SMILES strings.
    style.text_styles = [
        (TextStyle::Small, FontId::new(10.0, FontFamily::Monospace)),
        (TextStyle::Body, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(12.0, FontFamily::Monospace)),
        (TextStyle::Heading, FontId::new(14.0, FontFamily::Monospace)),
        (
            TextStyle::Monospace,
            FontId::new(12.0, FontFamily::Monospace),
        ),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.indent = 16.0;

    ctx.set_style(style);
}

fn build_visuals(is_dark: bool) -> Visuals {
    let colors = ThemeColors::from_dark_mode(is_dark);
    let mut visuals = if is_dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    visuals.window_fill = colors.bg_panel;
    visuals.panel_fill = colors.bg_panel;

    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text_primary);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, accent::BLUE);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);
    visuals.widgets.active.bg_fill = accent::BLUE;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = accent::BLUE.gamma_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent::BLUE);

    visuals
}

/// Create a form label.
pub fn form_label(text: &str) -> egui::RichText {
    egui::RichText::new(text.to_uppercase()).size(10.0)
}

/// Create a stat label (left column).
pub fn stat_label(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0).weak()
}

/// Create a stat value (right column).
pub fn stat_value(text: &str) -> egui::RichText {
    egui::RichText::new(text).size(11.0)
}
