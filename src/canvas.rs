//! Offscreen render texture holding the painted grid image.
//!
//! Every cell is painted into this texture once up front; after that only
//! dirty cells are repainted. The viewport blit samples the texture through
//! the camera's source rectangle, so panning and zooming never repaint cells.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use glow::*;

use crate::constants::*;
use crate::grid::{Grid, ObjectDrawInfo};
use crate::renderer::{compile_program, unit_quad};
use crate::sprite::Sprite;
use crate::theme::GridTheme;

const FLAT_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;
uniform vec4 uRect; // x, y, w, h in grid-image pixels

void main() {
    vec2 p = uRect.xy + aPos * uRect.zw;
    gl_Position = uProjection * vec4(p, 0.0, 1.0);
}
"#;

const FLAT_FRAGMENT_SHADER: &str = r#"#version 330 core
uniform vec4 uColor;

out vec4 FragColor;

void main() {
    FragColor = uColor;
}
"#;

const SPRITE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;
uniform vec4 uRect;

out vec2 vUv;

void main() {
    vec2 p = uRect.xy + aPos * uRect.zw;
    gl_Position = uProjection * vec4(p, 0.0, 1.0);
    vUv = aPos;
}
"#;

const SPRITE_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 vUv;

uniform sampler2D uTex;
uniform vec4 uTint;

out vec4 FragColor;

void main() {
    FragColor = texture(uTex, vUv) * uTint;
}
"#;

pub struct GridCanvas {
    gl: Arc<glow::Context>,
    pub texture: glow::Texture,
    fbo: NativeFramebuffer,
    width_px: i32,
    height_px: i32,
    cell_size_px: i32,
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    flat_program: NativeProgram,
    flat_rect_loc: NativeUniformLocation,
    flat_color_loc: NativeUniformLocation,
    sprite_program: NativeProgram,
    sprite_rect_loc: NativeUniformLocation,
    sprite_tint_loc: NativeUniformLocation,
}

impl GridCanvas {
    pub fn new(
        gl: Arc<glow::Context>,
        width_cells: i32,
        height_cells: i32,
        cell_size_px: i32,
    ) -> Result<Self, String> {
        let width_px = width_cells * cell_size_px;
        let height_px = height_cells * cell_size_px;

        unsafe {
            let texture = gl
                .create_texture()
                .map_err(|e| format!("Failed to create grid texture: {}", e))?;
            gl.bind_texture(TEXTURE_2D, Some(texture));
            gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST as i32);
            gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST as i32);
            gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE as i32);
            gl.tex_parameter_i32(TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE as i32);
            gl.tex_image_2d(
                TEXTURE_2D,
                0,
                RGBA as i32,
                width_px,
                height_px,
                0,
                RGBA,
                UNSIGNED_BYTE,
                None,
            );
            gl.bind_texture(TEXTURE_2D, None);

            let fbo = gl
                .create_framebuffer()
                .map_err(|e| format!("Failed to create framebuffer: {}", e))?;
            gl.bind_framebuffer(FRAMEBUFFER, Some(fbo));
            gl.framebuffer_texture_2d(FRAMEBUFFER, COLOR_ATTACHMENT0, TEXTURE_2D, Some(texture), 0);
            if gl.check_framebuffer_status(FRAMEBUFFER) != FRAMEBUFFER_COMPLETE {
                return Err("Grid framebuffer is incomplete".to_string());
            }
            gl.bind_framebuffer(FRAMEBUFFER, None);

            let flat_program = compile_program(&gl, FLAT_VERTEX_SHADER, FLAT_FRAGMENT_SHADER)?;
            let sprite_program =
                compile_program(&gl, SPRITE_VERTEX_SHADER, SPRITE_FRAGMENT_SHADER)?;
            let (vao, vbo) = unit_quad(&gl)?;

            // The projection never changes: set it once per program.
            let projection =
                Mat4::orthographic_rh(0.0, width_px as f32, 0.0, height_px as f32, -1.0, 1.0);
            for program in [flat_program, sprite_program] {
                let loc = gl
                    .get_uniform_location(program, "uProjection")
                    .ok_or("Failed to get projection uniform location")?;
                gl.use_program(Some(program));
                gl.uniform_matrix_4_f32_slice(Some(&loc), false, projection.as_ref());
            }

            let flat_rect_loc = gl
                .get_uniform_location(flat_program, "uRect")
                .ok_or("Failed to get rect uniform location")?;
            let flat_color_loc = gl
                .get_uniform_location(flat_program, "uColor")
                .ok_or("Failed to get color uniform location")?;
            let sprite_rect_loc = gl
                .get_uniform_location(sprite_program, "uRect")
                .ok_or("Failed to get sprite rect uniform location")?;
            let sprite_tint_loc = gl
                .get_uniform_location(sprite_program, "uTint")
                .ok_or("Failed to get sprite tint uniform location")?;

            Ok(Self {
                gl,
                texture,
                fbo,
                width_px,
                height_px,
                cell_size_px,
                vao,
                vbo,
                flat_program,
                flat_rect_loc,
                flat_color_loc,
                sprite_program,
                sprite_rect_loc,
                sprite_tint_loc,
            })
        }
    }

    pub fn size_px(&self) -> (f32, f32) {
        (self.width_px as f32, self.height_px as f32)
    }

    /// Paint every cell. Used once at startup; after that only dirty cells
    /// are repainted.
    pub fn paint_full(&self, grid: &Grid, theme: &GridTheme, sprite: &Sprite) {
        self.begin();
        unsafe {
            let bg = theme.cell_bg_color();
            self.gl.clear_color(bg.x, bg.y, bg.z, 1.0);
            self.gl.clear(COLOR_BUFFER_BIT);
        }
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                self.paint_one(grid, (x, y), theme, sprite);
            }
        }
        self.end();
    }

    /// Repaint the given cells from current grid state.
    pub fn paint_cells(&self, grid: &Grid, cells: &[(i32, i32)], theme: &GridTheme, sprite: &Sprite) {
        if cells.is_empty() {
            return;
        }
        self.begin();
        for &cell in cells {
            self.paint_one(grid, cell, theme, sprite);
        }
        self.end();
    }

    fn begin(&self) {
        unsafe {
            self.gl.bind_framebuffer(FRAMEBUFFER, Some(self.fbo));
            self.gl.viewport(0, 0, self.width_px, self.height_px);
            // egui's paint pass leaves a premultiplied blend func behind;
            // the sprite is straight alpha.
            self.gl.enable(BLEND);
            self.gl.blend_func(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
        }
    }

    fn end(&self) {
        unsafe {
            self.gl.bind_framebuffer(FRAMEBUFFER, None);
        }
    }

    fn paint_one(&self, grid: &Grid, cell: (i32, i32), theme: &GridTheme, sprite: &Sprite) {
        let hovered = cell == grid.cursor_cell();
        match grid.occupant_at(cell) {
            Some(info) => self.paint_object_cell(cell, info, hovered, theme, sprite),
            None => self.paint_empty_cell(cell, hovered, theme),
        }
    }

    fn paint_empty_cell(&self, cell: (i32, i32), hovered: bool, theme: &GridTheme) {
        let cs = self.cell_size_px as f32;
        let px = cell.0 as f32 * cs;
        let py = cell.1 as f32 * cs;

        self.draw_rect(px, py, cs, cs, theme.cell_bg_color());

        if theme.show_dots {
            let dot = theme.dot_color();
            for (dx, dy) in [
                (0.0, 0.0),
                (cs - 1.0, 0.0),
                (0.0, cs - 1.0),
                (cs - 1.0, cs - 1.0),
            ] {
                self.draw_rect(px + dx, py + dy, 1.0, 1.0, dot);
            }
        }

        if hovered {
            let arm = CURSOR_MARKER_SIZE as f32;
            let thick = CURSOR_MARKER_THICKNESS as f32;
            let cx = px + cs * 0.5;
            let cy = py + cs * 0.5;
            let color = theme.cursor_color();
            self.draw_rect(cx - arm * 0.5, cy - thick * 0.5, arm, thick, color);
            self.draw_rect(cx - thick * 0.5, cy - arm * 0.5, thick, arm, color);
        }
    }

    fn paint_object_cell(
        &self,
        cell: (i32, i32),
        info: &ObjectDrawInfo,
        hovered: bool,
        theme: &GridTheme,
        sprite: &Sprite,
    ) {
        let cs = self.cell_size_px as f32;
        let px = cell.0 as f32 * cs;
        let py = cell.1 as f32 * cs;

        self.draw_rect(px, py, cs, cs, theme.cell_bg_color());

        let tint = if hovered {
            theme.cursor_color()
        } else {
            info.object_color
        };
        self.draw_sprite(px, py, cs, cs, sprite, tint);
    }

    fn draw_rect(&self, x: f32, y: f32, w: f32, h: f32, color: Vec3) {
        unsafe {
            self.gl.use_program(Some(self.flat_program));
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.uniform_4_f32(Some(&self.flat_rect_loc), x, y, w, h);
            self.gl
                .uniform_4_f32(Some(&self.flat_color_loc), color.x, color.y, color.z, 1.0);
            self.gl.draw_arrays(TRIANGLES, 0, 6);
            self.gl.bind_vertex_array(None);
        }
    }

    fn draw_sprite(&self, x: f32, y: f32, w: f32, h: f32, sprite: &Sprite, tint: Vec3) {
        unsafe {
            self.gl.use_program(Some(self.sprite_program));
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.active_texture(TEXTURE0);
            self.gl.bind_texture(TEXTURE_2D, Some(sprite.texture));
            self.gl.uniform_4_f32(Some(&self.sprite_rect_loc), x, y, w, h);
            self.gl
                .uniform_4_f32(Some(&self.sprite_tint_loc), tint.x, tint.y, tint.z, 1.0);
            self.gl.draw_arrays(TRIANGLES, 0, 6);
            self.gl.bind_vertex_array(None);
            self.gl.bind_texture(TEXTURE_2D, None);
        }
    }
}

impl Drop for GridCanvas {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.flat_program);
            self.gl.delete_program(self.sprite_program);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            self.gl.delete_framebuffer(self.fbo);
            self.gl.delete_texture(self.texture);
        }
    }
}
