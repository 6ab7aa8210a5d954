//! Object sprite texture.

use std::path::Path;
use std::sync::Arc;

use glow::HasContext;

/// A white-on-transparent sprite, tinted per object at draw time.
pub struct Sprite {
    pub texture: glow::Texture,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    /// Load a sprite PNG and upload it as a NEAREST-filtered texture.
    pub fn load(gl: Arc<glow::Context>, path: &Path) -> Result<Self, String> {
        let img = image::open(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?
            .into_rgba8();
        let (width, height) = img.dimensions();

        let texture = unsafe {
            let tex = gl
                .create_texture()
                .map_err(|e| format!("Failed to create texture: {}", e))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(tex));

            // NEAREST for crisp pixel art
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::NEAREST as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::CLAMP_TO_EDGE as i32);

            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(img.as_raw()),
            );

            gl.bind_texture(glow::TEXTURE_2D, None);
            tex
        };

        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
