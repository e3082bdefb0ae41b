//! Window and OpenGL context bootstrap.
//!
//! Builds a winit window with a glutin 3.3 core context and loads the GL
//! function pointers into a glow context. Every step that can fail returns
//! a descriptive error so `main` can report it and exit nonzero.

use std::num::NonZeroU32;

use anyhow::{anyhow, Context as _, Result};
use glow::HasContext;
use glutin::config::{ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContext, PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::DisplayBuilder;
use log::info;
use raw_window_handle::HasWindowHandle;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// The window together with its current GL context, surface, and loaded
/// function pointers. One of these exists for the lifetime of the process.
pub struct GlWindow {
    pub window: Window,
    gl_context: PossiblyCurrentContext,
    gl_surface: Surface<WindowSurface>,
    pub gl: glow::Context,
}

impl GlWindow {
    pub fn new(event_loop: &ActiveEventLoop, title: &str) -> Result<Self> {
        let window_attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let config_template = ConfigTemplateBuilder::new().with_alpha_size(8);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(window_attrs))
            .build(event_loop, config_template, |configs| {
                // Prefer the config with the most samples; the display
                // always offers at least one matching config here.
                configs
                    .reduce(|best, config| {
                        if config.num_samples() > best.num_samples() {
                            config
                        } else {
                            best
                        }
                    })
                    .expect("display offered no GL configs")
            })
            .map_err(|e| anyhow!("failed to build GL display: {e}"))?;

        let window = window.ok_or_else(|| anyhow!("failed to create window"))?;
        let gl_display = gl_config.display();

        let raw_window_handle = window
            .window_handle()
            .context("failed to get window handle")?
            .into();

        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(Some(raw_window_handle));

        let not_current_context =
            unsafe { gl_display.create_context(&gl_config, &context_attrs) }
                .context("failed to create GL context")?;

        let inner = window.inner_size();
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(inner.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(inner.height).unwrap_or(NonZeroU32::MIN),
        );

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .context("failed to create GL surface")?;

        let gl_context = not_current_context
            .make_current(&gl_surface)
            .context("failed to make GL context current")?;

        // Vsync; not fatal if the platform refuses.
        let _ = gl_surface.set_swap_interval(
            &gl_context,
            SwapInterval::Wait(NonZeroU32::new(1).unwrap_or(NonZeroU32::MIN)),
        );

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        info!("OpenGL version: {version}");

        Ok(Self {
            window,
            gl_context,
            gl_surface,
            gl,
        })
    }

    /// Resizes the GL surface after the OS resized the window. The viewport
    /// is set from the window size at the start of every frame.
    pub fn resize_surface(&self, new_size: PhysicalSize<u32>) {
        self.gl_surface.resize(
            &self.gl_context,
            NonZeroU32::new(new_size.width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(new_size.height).unwrap_or(NonZeroU32::MIN),
        );
    }

    pub fn swap_buffers(&self) -> Result<()> {
        self.gl_surface
            .swap_buffers(&self.gl_context)
            .context("failed to swap buffers")
    }
}
