//! Camera/viewport engine: smooth pan and zoom over the grid.
//!
//! Three independent [`TransitionValue`] ramps drive pan-X, pan-Y and zoom;
//! each is either settled or mid-transition, and they converge independently.
//! The camera keeps one authoritative `center` cell: the edge-follow logic
//! and the zoom re-center both write it, and the pan ramps chase it.

use glam::Vec2;

use crate::constants::*;
use crate::transition::TransitionValue;

/// Axis-aligned rectangle. Used in both cell units and pixel units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

pub struct Camera {
    view_size_cells: Vec2,
    grid_size_cells: Vec2,
    cell_size_px: f32,
    view_pos_px: Vec2,
    /// The cell the view settles around. Not necessarily the cursor.
    center: Vec2,
    /// Last-known cursor cell, the anchor for zoom re-centering.
    cursor: Vec2,
    pan_x: TransitionValue,
    pan_y: TransitionValue,
    zoom: TransitionValue,
}

impl Camera {
    pub fn new(
        view_pos_px: Vec2,
        view_size_cells: Vec2,
        grid_size_cells: Vec2,
        cell_size_px: f32,
        center: Vec2,
    ) -> Self {
        Self {
            view_size_cells,
            grid_size_cells,
            cell_size_px,
            view_pos_px,
            center,
            cursor: center,
            pan_x: TransitionValue::new(center.x, CAMERA_TRANSITION_FRAMES),
            pan_y: TransitionValue::new(center.y, CAMERA_TRANSITION_FRAMES),
            zoom: TransitionValue::new(1.0, CAMERA_TRANSITION_FRAMES),
        }
    }

    /// Request a zoom level, clamped to [0.5, 2.0]. The applied zoom factor
    /// is the inverse of the level. A change of the zoom target always
    /// re-centers the camera on the last-known cursor cell.
    pub fn set_zoom(&mut self, level: f32) {
        let level = level.clamp(ZOOM_LEVEL_MIN, ZOOM_LEVEL_MAX);
        let factor = 1.0 / level.abs();
        if factor != self.zoom.target() {
            self.center = self.cursor;
            self.pan_x.set_target(self.center.x);
            self.pan_y.set_target(self.center.y);
            self.zoom.set_target(factor);
        }
    }

    /// Follow a cursor move, re-panning only when the cursor crosses the
    /// edge of the visible area. Half extents are computed against the zoom
    /// *target*, so the decision anticipates where an in-flight zoom ends up.
    pub fn follow_cursor(&mut self, cursor: Vec2) {
        self.cursor = cursor;

        let half_w = self.view_size_cells.x * self.zoom.target() * 0.5;
        let half_h = self.view_size_cells.y * self.zoom.target() * 0.5;
        let offset = cursor - self.center;

        if offset.x >= half_w {
            self.center.x = cursor.x - half_w + 1.0;
        } else if offset.x <= -half_w {
            self.center.x = cursor.x + half_w;
        }
        if offset.y >= half_h {
            self.center.y = cursor.y - half_h + 1.0;
        } else if offset.y <= -half_h {
            self.center.y = cursor.y + half_h;
        }

        self.pan_x.set_target(self.center.x);
        self.pan_y.set_target(self.center.y);
    }

    /// Advance all three ramps. Called exactly once per rendered frame.
    pub fn update(&mut self) {
        self.pan_x.update();
        self.pan_y.update();
        self.zoom.update();
    }

    /// The visible sub-rectangle of the grid in cell units, derived from the
    /// in-flight values and clamped inside the grid even mid-transition.
    pub fn viewport_cells(&self) -> Rect {
        let w = self.view_size_cells.x * self.zoom.value();
        let h = self.view_size_cells.y * self.zoom.value();
        let x = (self.pan_x.value() - w * 0.5)
            .max(0.0)
            .min(self.grid_size_cells.x - w);
        let y = (self.pan_y.value() - h * 0.5)
            .max(0.0)
            .min(self.grid_size_cells.y - h);
        Rect { x, y, w, h }
    }

    /// Source rectangle for the viewport blit, in grid-image pixels.
    pub fn source_rect_px(&self) -> Rect {
        let r = self.viewport_cells();
        Rect {
            x: r.x * self.cell_size_px,
            y: r.y * self.cell_size_px,
            w: r.w * self.cell_size_px,
            h: r.h * self.cell_size_px,
        }
    }

    /// Fixed on-screen destination rectangle, in window pixels.
    pub fn dest_rect_px(&self) -> Rect {
        Rect {
            x: self.view_pos_px.x,
            y: self.view_pos_px.y,
            w: self.view_size_cells.x * self.cell_size_px,
            h: self.view_size_cells.y * self.cell_size_px,
        }
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom.value()
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_camera() -> Camera {
        Camera::new(
            Vec2::ZERO,
            Vec2::new(16.0, 8.0),
            Vec2::new(32.0, 16.0),
            32.0,
            Vec2::new(8.0, 8.0),
        )
    }

    fn settle(camera: &mut Camera) {
        for _ in 0..CAMERA_TRANSITION_FRAMES as usize + 1 {
            camera.update();
        }
    }

    #[test]
    fn cursor_at_right_edge_retargets_center() {
        let mut camera = make_camera();
        // halfW = 16 * 1 / 2 = 8; offset 8 >= 8 crosses the edge.
        camera.follow_cursor(Vec2::new(16.0, 8.0));
        assert_eq!(camera.center(), Vec2::new(9.0, 8.0));
    }

    #[test]
    fn cursor_inside_view_leaves_camera_alone() {
        let mut camera = make_camera();
        camera.follow_cursor(Vec2::new(15.0, 8.0));
        assert_eq!(camera.center(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn cursor_at_left_edge_retargets_symmetrically() {
        let mut camera = make_camera();
        camera.follow_cursor(Vec2::new(0.0, 8.0));
        assert_eq!(camera.center(), Vec2::new(8.0, 8.0));

        // Move the camera right first so a leftward crossing exists.
        camera.follow_cursor(Vec2::new(16.0, 8.0));
        settle(&mut camera);
        camera.follow_cursor(Vec2::new(1.0, 8.0));
        assert_eq!(camera.center().x, 9.0);
    }

    #[test]
    fn axes_follow_independently() {
        let mut camera = make_camera();
        // halfH = 8 * 1 / 2 = 4; y crosses, x does not.
        camera.follow_cursor(Vec2::new(9.0, 12.0));
        assert_eq!(camera.center(), Vec2::new(8.0, 9.0));
    }

    #[test]
    fn pan_transition_settles_on_center() {
        let mut camera = make_camera();
        camera.follow_cursor(Vec2::new(16.0, 8.0));
        settle(&mut camera);
        let view = camera.viewport_cells();
        assert!((view.x + view.w * 0.5 - 9.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_change_recenters_on_cursor() {
        let mut camera = make_camera();
        camera.follow_cursor(Vec2::new(10.0, 8.0));
        camera.set_zoom(0.5);
        settle(&mut camera);
        // Level 0.5 -> factor 2: the whole 32x16 grid is visible.
        let view = camera.viewport_cells();
        assert_eq!((view.w, view.h), (32.0, 16.0));
        assert_eq!((view.x, view.y), (0.0, 0.0));
    }

    #[test]
    fn repeated_zoom_level_does_not_retarget() {
        let mut camera = make_camera();
        camera.set_zoom(2.0);
        settle(&mut camera);
        camera.follow_cursor(Vec2::new(9.0, 8.0));
        // Same level again must not re-center onto the cursor.
        camera.set_zoom(2.0);
        assert_eq!(camera.center(), Vec2::new(8.0, 8.0));
    }

    #[test]
    fn edge_follow_uses_zoom_target_not_current() {
        let mut camera = make_camera();
        camera.set_zoom(2.0);
        // Zoom still at 1.0, target factor 0.5: halfW is already 4.
        camera.follow_cursor(Vec2::new(12.0, 8.0));
        assert_eq!(camera.center().x, 9.0);
    }

    #[test]
    fn viewport_is_clamped_inside_grid_during_transitions() {
        let mut camera = make_camera();
        camera.follow_cursor(Vec2::new(31.0, 15.0));
        camera.set_zoom(0.5);
        for _ in 0..20 {
            camera.update();
            let view = camera.viewport_cells();
            assert!(view.x >= 0.0);
            assert!(view.y >= 0.0);
            assert!(view.x + view.w <= 32.0 + 1e-4);
            assert!(view.y + view.h <= 16.0 + 1e-4);
        }
    }

    #[test]
    fn source_rect_scales_by_cell_size() {
        let camera = make_camera();
        let src = camera.source_rect_px();
        assert_eq!(src.w, 16.0 * 32.0);
        assert_eq!(src.h, 8.0 * 32.0);
    }
}
