//! Object glyph overlay.
//!
//! Glyphs are text, so they are painted over the blitted viewport with the
//! egui painter rather than baked into the grid texture. Positions follow
//! the camera's in-flight viewport rectangle, so glyphs track their cells
//! through pan and zoom transitions.

use glam::Vec3;

use crate::camera::Camera;
use crate::constants::*;
use crate::grid::Grid;

/// Render a glyph at the center of every visible object cell
pub fn draw_object_glyphs(ctx: &egui::Context, grid: &Grid, camera: &Camera) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Background,
        egui::Id::new("object_glyphs"),
    ));

    let view = camera.viewport_cells();
    let dest = camera.dest_rect_px();
    let ppp = ctx.pixels_per_point();

    // On-screen cell size in physical pixels at the current zoom
    let cell_w = dest.w / view.w;
    let cell_h = dest.h / view.h;
    let font_id = egui::FontId::monospace(cell_h * GLYPH_SIZE_FACTOR / ppp);

    for ((x, y), info) in grid.objects() {
        let (x, y) = (x as f32, y as f32);
        if x + 1.0 <= view.x || x >= view.x + view.w || y + 1.0 <= view.y || y >= view.y + view.h
        {
            continue;
        }

        // Cell center, cell space -> screen space (both top-left origin)
        let sx = dest.x + (x + 0.5 - view.x) * cell_w;
        let sy = dest.y + (y + 0.5 - view.y) * cell_h;

        painter.text(
            egui::pos2(sx / ppp, sy / ppp),
            egui::Align2::CENTER_CENTER,
            info.glyph,
            font_id.clone(),
            color32(info.glyph_color),
        );
    }
}

fn color32(color: Vec3) -> egui::Color32 {
    egui::Color32::from_rgb(
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
    )
}
