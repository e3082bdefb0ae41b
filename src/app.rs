//! Event loop glue: init on resume, render on redraw, teardown on exit.
//!
//! All state lives in an explicit struct threaded through the handler; the
//! lifecycle is Uninitialized -> Initialized -> Running -> Torn down, with
//! no step skipped.

use anyhow::{Context as _, Result};
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use crate::mesh::Mesh;
use crate::render;
use crate::scene::Scene;
use crate::shader::ShaderProgram;
use crate::window::GlWindow;

/// Escape is the only key the programs react to.
pub fn is_exit_key(key: &Key) -> bool {
    matches!(key, Key::Named(NamedKey::Escape))
}

/// Runs the render loop for one scene until the window is closed or Escape
/// is pressed. Returns an error if bootstrap failed.
pub fn run(scene: Scene) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(scene);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.init_error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct AppState {
    win: GlWindow,
    mesh: Mesh,
    shader: ShaderProgram,
}

impl AppState {
    fn new(event_loop: &ActiveEventLoop, scene: Scene) -> Result<Self> {
        let win = GlWindow::new(event_loop, scene.window_title())?;
        let mesh = Mesh::upload(&win.gl, scene.vertices(), scene.indices())?;
        let shader = ShaderProgram::new(&win.gl)?;

        info!(
            "{:?} initialized: {} vertices, {} indices",
            scene,
            scene.vertices().len(),
            mesh.index_count()
        );

        Ok(Self { win, mesh, shader })
    }
}

struct App {
    scene: Scene,
    state: Option<AppState>,
    init_error: Option<anyhow::Error>,
}

impl App {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            state: None,
            init_error: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match AppState::new(event_loop, self.scene) {
            Ok(state) => self.state = Some(state),
            Err(err) => {
                self.init_error = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = self.state.as_ref() else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed() && is_exit_key(&event.logical_key) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    state.win.resize_surface(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                let size = state.win.window.inner_size();
                render::draw_frame(
                    &state.win.gl,
                    self.scene,
                    &state.mesh,
                    &state.shader,
                    size.width,
                    size.height,
                );
                if let Err(err) = state.win.swap_buffers() {
                    error!("{err:#}");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_ref() {
            state.win.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Teardown runs exactly once: destroy consumes the GPU-side values,
        // mesh first, then the shader program.
        if let Some(AppState { win, mesh, shader }) = self.state.take() {
            mesh.destroy(&win.gl);
            shader.destroy(&win.gl);
            debug!("GPU objects released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_is_the_exit_key() {
        assert!(is_exit_key(&Key::Named(NamedKey::Escape)));
    }

    #[test]
    fn other_keys_do_not_exit() {
        assert!(!is_exit_key(&Key::Named(NamedKey::Enter)));
        assert!(!is_exit_key(&Key::Named(NamedKey::Space)));
        assert!(!is_exit_key(&Key::Character("q".into())));
    }
}
