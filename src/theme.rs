//! Grid color theme, loadable from a JSON file next to the binary.

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

/// Colors and toggles for painting the grid image.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridTheme {
    pub show_dots: bool,
    /// Cell background
    pub cell_bg: [u8; 3],
    /// Corner dots marking cell boundaries
    pub dot: [u8; 3],
    /// Cursor crosshair and hovered-object tint
    pub cursor: [u8; 3],
    /// Window clear color outside the viewport
    pub window_bg: [u8; 3],
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            show_dots: true,
            cell_bg: [0, 0, 0],
            dot: [0, 121, 241],
            cursor: [255, 109, 194],
            window_bg: [245, 245, 245],
        }
    }
}

impl GridTheme {
    pub fn load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&json)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Load the theme, falling back to the default palette when the file is
    /// missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(theme) => theme,
            Err(err) => {
                eprintln!("{} (using default theme)", err);
                Self::default()
            }
        }
    }

    pub fn cell_bg_color(&self) -> Vec3 {
        to_vec3(self.cell_bg)
    }

    pub fn dot_color(&self) -> Vec3 {
        to_vec3(self.dot)
    }

    pub fn cursor_color(&self) -> Vec3 {
        to_vec3(self.cursor)
    }

    pub fn window_bg_color(&self) -> Vec3 {
        to_vec3(self.window_bg)
    }
}

fn to_vec3(rgb: [u8; 3]) -> Vec3 {
    Vec3::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_theme_with_defaults() {
        let theme: GridTheme =
            serde_json::from_str(r#"{ "cursor": [255, 0, 0], "show_dots": false }"#).unwrap();
        assert_eq!(theme.cursor, [255, 0, 0]);
        assert!(!theme.show_dots);
        assert_eq!(theme.cell_bg, GridTheme::default().cell_bg);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let theme = GridTheme::load_or_default(Path::new("no/such/theme.json"));
        assert_eq!(theme.dot, GridTheme::default().dot);
    }
}
