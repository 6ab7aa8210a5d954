//! UI rendering using egui.
//!
//! The viewport itself is drawn with plain GL; egui supplies the status bar
//! and the object glyph overlay.

mod glyphs;
mod status_bar;
pub mod style;

pub use glyphs::draw_object_glyphs;
pub use status_bar::{draw_status_bar, get_status_bar_data, StatusBarData};
