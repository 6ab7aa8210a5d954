//! Status bar UI component.
//!
//! Displays the cursor cell, requested zoom level and object count.

use super::style;
use crate::camera::Camera;
use crate::grid::Grid;

/// Data needed to render the status bar
pub struct StatusBarData {
    pub cursor_cell: (i32, i32),
    pub zoom_level: f32,
    pub zoom_factor: f32,
    pub object_count: usize,
}

/// Extract status bar data from the editor state
pub fn get_status_bar_data(grid: &Grid, camera: &Camera, zoom_level: f32) -> StatusBarData {
    StatusBarData {
        cursor_cell: grid.cursor_cell(),
        zoom_level,
        zoom_factor: camera.zoom_factor(),
        object_count: grid.object_count(),
    }
}

/// Render the status bar
pub fn draw_status_bar(ctx: &egui::Context, data: &StatusBarData) {
    egui::Window::new("Status")
        .fixed_pos([6.0, 6.0])
        .title_bar(false)
        .resizable(false)
        .frame(style::status_window_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(format!(
                    "({:>2},{:>2})",
                    data.cursor_cell.0, data.cursor_cell.1
                ));
                ui.separator();
                ui.colored_label(
                    style::colors::TEXT_ACCENT,
                    format!("zoom {:.2} (x{:.2})", data.zoom_level, data.zoom_factor),
                );
                ui.separator();
                ui.colored_label(
                    style::colors::TEXT_MUTED,
                    format!("{} objects", data.object_count),
                );
            });
        });
}
