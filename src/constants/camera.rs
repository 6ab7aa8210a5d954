//! Camera and viewport constants.

/// Viewport width in grid cells at zoom factor 1
pub const VIEW_WIDTH_CELLS: f32 = 16.0;
/// Viewport height in grid cells at zoom factor 1
pub const VIEW_HEIGHT_CELLS: f32 = 8.0;
/// Viewport destination position in window pixels
pub const VIEW_POS: (f32, f32) = (0.0, 0.0);
/// Frames a pan or zoom transition takes to settle
pub const CAMERA_TRANSITION_FRAMES: f32 = 5.0;
/// Camera starting center cell
pub const CAMERA_START: (f32, f32) = (8.0, 8.0);
/// Lowest requested zoom level (zoomed out)
pub const ZOOM_LEVEL_MIN: f32 = 0.5;
/// Highest requested zoom level (zoomed in)
pub const ZOOM_LEVEL_MAX: f32 = 2.0;
/// Zoom level change per frame while the zoom keys are held
pub const ZOOM_HELD_STEP: f32 = 0.01;
/// Default requested zoom level
pub const ZOOM_LEVEL_DEFAULT: f32 = 1.0;
