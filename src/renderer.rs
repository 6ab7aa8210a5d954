//! Viewport blit: samples the camera's source region of the grid image and
//! draws it into the fixed on-screen destination rectangle.

use std::sync::Arc;

use glam::Mat4;
use glow::*;

use crate::camera::Rect;

const BLIT_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 uProjection;
uniform vec4 uRect;    // destination rect in window pixels, GL origin
uniform vec4 uSrcRect; // normalized source rect within the grid image

out vec2 vUv;

void main() {
    vec2 p = uRect.xy + aPos * uRect.zw;
    gl_Position = uProjection * vec4(p, 0.0, 1.0);
    // Grid-image rows run top-down while the quad runs bottom-up in GL,
    // so V is flipped across the source rect.
    vUv = vec2(uSrcRect.x + aPos.x * uSrcRect.z,
               uSrcRect.y + (1.0 - aPos.y) * uSrcRect.w);
}
"#;

const BLIT_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 vUv;

uniform sampler2D uTex;

out vec4 FragColor;

void main() {
    FragColor = texture(uTex, vUv);
}
"#;

pub struct Renderer {
    gl: Arc<glow::Context>,
    program: NativeProgram,
    vao: NativeVertexArray,
    vbo: NativeBuffer,
    projection_loc: NativeUniformLocation,
    rect_loc: NativeUniformLocation,
    src_rect_loc: NativeUniformLocation,
}

impl Renderer {
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, String> {
        unsafe {
            let program = compile_program(&gl, BLIT_VERTEX_SHADER, BLIT_FRAGMENT_SHADER)?;

            let projection_loc = gl
                .get_uniform_location(program, "uProjection")
                .ok_or("Failed to get projection uniform location")?;
            let rect_loc = gl
                .get_uniform_location(program, "uRect")
                .ok_or("Failed to get rect uniform location")?;
            let src_rect_loc = gl
                .get_uniform_location(program, "uSrcRect")
                .ok_or("Failed to get source rect uniform location")?;

            let (vao, vbo) = unit_quad(&gl)?;

            gl.enable(BLEND);
            gl.blend_func(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);

            Ok(Self {
                gl,
                program,
                vao,
                vbo,
                projection_loc,
                rect_loc,
                src_rect_loc,
            })
        }
    }

    /// Draw `src_px` (grid-image pixels) of the grid texture into `dest`
    /// (window pixels, top-left origin).
    pub fn blit(
        &self,
        grid_texture: glow::Texture,
        grid_size_px: (f32, f32),
        window_size: (u32, u32),
        dest: Rect,
        src_px: Rect,
    ) {
        let win_h = window_size.1 as f32;
        let projection = Mat4::orthographic_rh(
            0.0,
            window_size.0 as f32,
            0.0,
            win_h,
            -1.0,
            1.0,
        );
        // Window coordinates are top-left origin, GL is bottom-left.
        let dest_gl_y = win_h - dest.y - dest.h;

        unsafe {
            self.gl
                .viewport(0, 0, window_size.0 as i32, window_size.1 as i32);
            self.gl.use_program(Some(self.program));
            self.gl.bind_vertex_array(Some(self.vao));
            self.gl.active_texture(TEXTURE0);
            self.gl.bind_texture(TEXTURE_2D, Some(grid_texture));

            self.gl.uniform_matrix_4_f32_slice(
                Some(&self.projection_loc),
                false,
                projection.as_ref(),
            );
            self.gl
                .uniform_4_f32(Some(&self.rect_loc), dest.x, dest_gl_y, dest.w, dest.h);
            self.gl.uniform_4_f32(
                Some(&self.src_rect_loc),
                src_px.x / grid_size_px.0,
                src_px.y / grid_size_px.1,
                src_px.w / grid_size_px.0,
                src_px.h / grid_size_px.1,
            );

            self.gl.draw_arrays(TRIANGLES, 0, 6);

            self.gl.bind_vertex_array(None);
            self.gl.bind_texture(TEXTURE_2D, None);
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.program);
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
    }
}

/// Compile and link a shader pair.
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<NativeProgram, String> {
    unsafe {
        let vertex_shader = gl
            .create_shader(VERTEX_SHADER)
            .map_err(|e| format!("Failed to create vertex shader: {}", e))?;
        gl.shader_source(vertex_shader, vertex_src);
        gl.compile_shader(vertex_shader);
        if !gl.get_shader_compile_status(vertex_shader) {
            return Err(gl.get_shader_info_log(vertex_shader));
        }

        let fragment_shader = gl
            .create_shader(FRAGMENT_SHADER)
            .map_err(|e| format!("Failed to create fragment shader: {}", e))?;
        gl.shader_source(fragment_shader, fragment_src);
        gl.compile_shader(fragment_shader);
        if !gl.get_shader_compile_status(fragment_shader) {
            return Err(gl.get_shader_info_log(fragment_shader));
        }

        let program = gl
            .create_program()
            .map_err(|e| format!("Failed to create program: {}", e))?;
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.link_program(program);
        if !gl.get_program_link_status(program) {
            return Err(gl.get_program_info_log(program));
        }

        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);

        Ok(program)
    }
}

/// A unit quad (0,0)-(1,1) as two triangles, bound to attribute 0.
pub fn unit_quad(gl: &glow::Context) -> Result<(NativeVertexArray, NativeBuffer), String> {
    let vertices: [f32; 12] = [
        0.0, 0.0, // bottom-left
        1.0, 0.0, // bottom-right
        1.0, 1.0, // top-right
        0.0, 0.0, // bottom-left
        1.0, 1.0, // top-right
        0.0, 1.0, // top-left
    ];

    unsafe {
        let vao = gl
            .create_vertex_array()
            .map_err(|e| format!("Failed to create VAO: {}", e))?;
        gl.bind_vertex_array(Some(vao));

        let vbo = gl
            .create_buffer()
            .map_err(|e| format!("Failed to create VBO: {}", e))?;
        gl.bind_buffer(ARRAY_BUFFER, Some(vbo));
        gl.buffer_data_u8_slice(ARRAY_BUFFER, as_u8_slice(&vertices), STATIC_DRAW);

        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_f32(0, 2, FLOAT, false, 8, 0);

        gl.bind_vertex_array(None);
        Ok((vao, vbo))
    }
}

fn as_u8_slice<T>(data: &[T]) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            data.as_ptr() as *const u8,
            data.len() * std::mem::size_of::<T>(),
        )
    }
}
