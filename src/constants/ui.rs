//! Frame pacing and on-screen chrome.

use std::time::Duration;

/// Frame interval for the fixed-step loop (~30 FPS, matching the
/// five-frame camera transitions to roughly 165 ms)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);
/// Cursor crosshair arm length in grid-image pixels
pub const CURSOR_MARKER_SIZE: i32 = 10;
/// Cursor crosshair arm thickness in grid-image pixels
pub const CURSOR_MARKER_THICKNESS: i32 = 2;
/// Object glyph height as a fraction of the on-screen cell size
pub const GLYPH_SIZE_FACTOR: f32 = 0.6;
