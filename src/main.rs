//! Raging Sea - a procedurally animated water surface
//!
//! One large rolling wave plus layered noise ripples, shaded along a
//! depth-to-surface color gradient, with a live debug panel for every knob.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ragingsea::camera::CameraSystem;
use ragingsea::cli::Args;
use ragingsea::panel::{ControlSurface, DebugPanel};
use ragingsea::params::{RenderConfig, SceneParams};
use ragingsea::rendering::{OverlayFrame, RenderSystem, WaterUniforms};
use ragingsea::snapshot;
use ragingsea::water::WaterSystem;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,

    // Scene
    water: WaterSystem,
    camera: CameraSystem,

    // Live-edited parameters and the surface that edits them
    params: SceneParams,
    panel: Box<dyn ControlSurface>,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(args: &Args, params: SceneParams) -> Self {
        let geometry = args.surface_geometry();

        Self {
            window: None,
            render_system: None,
            egui_ctx: egui::Context::default(),
            egui_winit: None,
            water: WaterSystem::new(&geometry),
            camera: CameraSystem::new(args.parse_camera_preset()),
            params,
            panel: Box::new(DebugPanel::default()),
            render_config: args.render_config(),
            start_time: Instant::now(),
        }
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> ragingsea::Result<()> {
        let window_attributes = Window::default_attributes()
            .with_title("Raging Sea")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));
        let window = Arc::new(event_loop.create_window(window_attributes)?);

        let render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.water.grid))?;

        let size = window.inner_size();
        self.render_config.resize(size.width, size.height);

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        self.window = Some(window);
        self.render_system = Some(render_system);
        self.egui_winit = Some(egui_winit);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        if let Err(e) = self.init_graphics(event_loop) {
            error!("failed to initialize graphics: {e}");
            event_loop.exit();
            return;
        }

        info!("running (H toggles the debug panel, Esc quits)");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(egui_winit), Some(window)) = (&mut self.egui_winit, &self.window) {
            if egui_winit.on_window_event(window, &event).consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                self.render_config.resize(size.width, size.height);
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        repeat: false,
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => event_loop.exit(),
                KeyCode::KeyH => self.panel.toggle(),
                _ => {}
            },
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

impl App {
    /// Render a single frame
    fn render_frame(&mut self) {
        let (Some(window), Some(render_system), Some(egui_winit)) = (
            self.window.as_ref(),
            self.render_system.as_mut(),
            self.egui_winit.as_mut(),
        ) else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        // Scene reads the parameters as they stood at the start of the frame
        let (view_proj, camera_pos) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);
        self.water.update(time_s, &self.params.wave);

        render_system.update_vertices(&self.water.grid.vertices);
        render_system.update_uniforms(&WaterUniforms::new(view_proj, camera_pos, &self.params));

        // Panel edits take effect next frame
        let raw_input = egui_winit.take_egui_input(window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            if self.panel.show(ctx, &mut self.params) {
                debug!(params = ?self.params, "parameters changed");
            }
        });
        egui_winit.handle_platform_output(window, full_output.platform_output);

        let overlay = OverlayFrame {
            paint_jobs: self
                .egui_ctx
                .tessellate(full_output.shapes, full_output.pixels_per_point),
            textures_delta: full_output.textures_delta,
            pixels_per_point: full_output.pixels_per_point,
        };

        match render_system.render(overlay) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_system.reconfigure();
            }
            Err(e) => error!("render error: {e}"),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    let params = args.load_params()?;

    if args.print_params {
        println!("{}", params.to_json()?);
        return Ok(());
    }

    if let Some(config) = args.snapshot_config() {
        snapshot::save(&params, &config)?;
        return Ok(());
    }

    info!("Raging Sea starting");

    let mut app = App::new(&args, params);
    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
