//! Editor egui styling: flat panels, hard borders, muted colors.

use egui::epaint::Shadow;
use egui::{Frame, Margin, Rounding, Stroke, Style, Visuals};

/// Editor color palette
pub mod colors {
    use egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgb(18, 20, 26);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(52, 58, 72);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(205, 210, 220);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(130, 138, 152);
    pub const TEXT_ACCENT: Color32 = Color32::from_rgb(120, 170, 240);
}

/// Border width for panels
pub const BORDER_WIDTH: f32 = 1.0;

/// Create the editor visuals
pub fn editor_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_rounding = Rounding::ZERO;
    visuals.window_shadow = Shadow::NONE;
    visuals.popup_shadow = Shadow::NONE;
    visuals.window_fill = colors::PANEL_BG;
    visuals.window_stroke = Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER);
    visuals.panel_fill = colors::PANEL_BG;
    visuals.override_text_color = Some(colors::TEXT_PRIMARY);

    visuals
}

/// Create the full editor style
pub fn editor_style() -> Style {
    let mut style = Style::default();
    style.visuals = editor_visuals();
    style
}

/// Frame used for the fixed status window
pub fn status_window_frame() -> Frame {
    Frame::none()
        .fill(colors::PANEL_BG)
        .stroke(Stroke::new(BORDER_WIDTH, colors::PANEL_BORDER))
        .inner_margin(Margin::same(6.0))
}
