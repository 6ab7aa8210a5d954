#![allow(dead_code)]

mod app;
mod camera;
mod canvas;
mod constants;
mod grid;
mod input;
mod renderer;
mod sprite;
mod theme;
mod transition;
mod ui;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glam::Vec2;
use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use camera::Camera;
use canvas::GridCanvas;
use constants::*;
use grid::Grid;
use renderer::Renderer;
use sprite::Sprite;
use theme::GridTheme;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional puffin profiler server; connect with puffin_viewer.
    let _puffin_server = if std::env::var_os("GRID_EDITOR_PROFILE").is_some() {
        puffin::set_scopes_on(true);
        Some(puffin_http::Server::new(&format!(
            "127.0.0.1:{}",
            puffin_http::DEFAULT_PORT
        ))?)
    } else {
        None
    };

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Rendering
    camera: Camera,
    canvas: GridCanvas,
    renderer: Renderer,
    sprite: Sprite,
    theme: GridTheme,

    // Editor state
    grid: Grid,
    zoom_level: f32,

    // Input state
    input: input::InputState,

    // Frame pacing
    next_frame: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        // Create window and GL context
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let theme = GridTheme::load_or_default(Path::new("assets/theme.json"));
        let sprite = Sprite::load(gl.clone(), Path::new("assets/object-sprite.png"))
            .expect("Failed to load object sprite");
        let canvas = GridCanvas::new(gl.clone(), GRID_WIDTH, GRID_HEIGHT, CELL_SIZE_PIXELS)
            .expect("Failed to create grid canvas");
        let renderer = Renderer::new(gl.clone()).expect("Failed to create renderer");

        let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE_PIXELS, CURSOR_START);
        let camera = Camera::new(
            Vec2::new(VIEW_POS.0, VIEW_POS.1),
            Vec2::new(VIEW_WIDTH_CELLS, VIEW_HEIGHT_CELLS),
            Vec2::new(GRID_WIDTH as f32, GRID_HEIGHT as f32),
            CELL_SIZE_PIXELS as f32,
            Vec2::new(CAMERA_START.0, CAMERA_START.1),
        );

        // Paint the whole grid image once; afterwards only dirty cells.
        canvas.paint_full(&grid, &theme, &sprite);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            camera,
            canvas,
            renderer,
            sprite,
            theme,
            grid,
            zoom_level: ZOOM_LEVEL_DEFAULT,
            input: input::InputState::new(),
            next_frame: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        match event.state {
                            ElementState::Pressed => {
                                if key == KeyCode::Escape {
                                    event_loop.exit();
                                }
                                state.input.keys_pressed.insert(key);
                            }
                            ElementState::Released => {
                                state.input.keys_pressed.remove(&key);
                            }
                        }
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = &mut self.state {
            let now = Instant::now();
            if now >= state.next_frame {
                state.next_frame = now + FRAME_INTERVAL;
                state.window.request_redraw();
            }
            event_loop.set_control_flow(ControlFlow::WaitUntil(state.next_frame));
        }
    }
}

impl AppState {
    /// One fixed-step frame: input, dirty-cell repaint, camera step, blit.
    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        self.handle_input();

        {
            puffin::profile_scope!("repaint_dirty");
            let dirty = self.grid.take_dirty();
            self.canvas
                .paint_cells(&self.grid, &dirty, &self.theme, &self.sprite);
        }

        // Advance all three camera ramps, exactly once per frame.
        self.camera.update();

        unsafe {
            use glow::HasContext;
            let bg = self.theme.window_bg_color();
            self.gl.clear_color(bg.x, bg.y, bg.z, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        {
            puffin::profile_scope!("blit_viewport");
            let size = self.window.inner_size();
            self.renderer.blit(
                self.canvas.texture,
                self.canvas.size_px(),
                (size.width, size.height),
                self.camera.dest_rect_px(),
                self.camera.source_rect_px(),
            );
        }

        self.run_ui();

        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    fn handle_input(&mut self) {
        let result = input::process_keyboard(&mut self.input);

        if result.zoom_delta != 0.0 {
            self.zoom_level =
                (self.zoom_level + result.zoom_delta).clamp(ZOOM_LEVEL_MIN, ZOOM_LEVEL_MAX);
            self.camera.set_zoom(self.zoom_level);
        }

        if let Some((dx, dy)) = result.movement {
            self.grid.move_cursor(dx, dy);
            self.camera.follow_cursor(self.grid.cursor());
        }

        if result.add_object {
            let cell = self.grid.cursor_cell();
            self.grid.add_object(cell);
        }
        if result.remove_object {
            let cell = self.grid.cursor_cell();
            self.grid.remove_object(cell);
        }
    }

    fn run_ui(&mut self) {
        puffin::profile_scope!("egui");

        let status = ui::get_status_bar_data(&self.grid, &self.camera, self.zoom_level);
        let grid = &self.grid;
        let camera = &self.camera;

        self.egui_glow.run(&self.window, |ctx| {
            ui::draw_object_glyphs(ctx, grid, camera);
            ui::draw_status_bar(ctx, &status);
        });
        self.egui_glow.paint(&self.window);
    }
}
