//! Rendering system with wgpu pipeline, depth buffer and debug overlay.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use tracing::info;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::error::{Error, Result};
use crate::params::SceneParams;
use crate::water::{Vertex, WaterGrid};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Uniform buffer for the water shader (layout matches `WaterUniforms` in shader.wgsl)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaterUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    pub color_offset: f32,
    pub depth_color: [f32; 3],
    pub color_multiplier: f32,
    pub surface_color: [f32; 3],
    pub fog_near: f32,
    pub fog_color: [f32; 3],
    pub fog_far: f32,
    pub fog_density: f32,
    pub fog_mode: u32,
    pub _padding: [f32; 2], // Padding for alignment
}

impl WaterUniforms {
    /// Pack the frame's camera and parameters; colors are converted to linear light
    pub fn new(view_proj: Mat4, camera_pos: Vec3, params: &SceneParams) -> Self {
        let wave = &params.wave;
        let fog = &params.fog;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: camera_pos.to_array(),
            color_offset: wave.color_offset,
            depth_color: wave.depth_color.to_linear().to_array(),
            color_multiplier: wave.color_multiplier,
            surface_color: wave.surface_color.to_linear().to_array(),
            fog_near: fog.near,
            fog_color: fog.color.to_linear().to_array(),
            fog_far: fog.far,
            fog_density: fog.density,
            fog_mode: fog.mode.shader_id(),
            _padding: [0.0; 2],
        }
    }
}

/// Tessellated egui output for one frame
pub struct OverlayFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

/// Rendering system managing wgpu device, pipeline and buffers
pub struct RenderSystem {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    index_count: u32,
    egui_renderer: egui_wgpu::Renderer,
}

impl RenderSystem {
    /// Create new rendering system
    pub async fn new(window: Arc<Window>, water_grid: &WaterGrid) -> Result<Self> {
        let size = window.inner_size();

        // Create wgpu instance
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // Create surface (window must have 'static lifetime via Arc)
        let surface = instance.create_surface(window)?;

        // Request adapter
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Error::NoAdapter)?;

        // Request device
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Main Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await?;

        let adapter_info = adapter.get_info();
        info!(
            adapter = %adapter_info.name,
            backend = adapter_info.backend.to_str(),
            "GPU initialized"
        );

        // Configure surface
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Load shader
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Water Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        // Create buffers
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Vertex Buffer"),
            contents: bytemuck::cast_slice(&water_grid.vertices),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Index Buffer"),
            contents: bytemuck::cast_slice(&water_grid.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let uniforms = WaterUniforms::new(Mat4::IDENTITY, Vec3::ZERO, &SceneParams::default());

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniforms]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Render Pipeline Layout"),
                bind_group_layouts: &[&uniform_bind_group_layout],
                push_constant_ranges: &[],
            });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Water Render Pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &[
                        wgpu::VertexAttribute {
                            offset: 0,
                            shader_location: 0,
                            format: wgpu::VertexFormat::Float32x3,
                        },
                        wgpu::VertexAttribute {
                            offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                            shader_location: 1,
                            format: wgpu::VertexFormat::Float32,
                        },
                    ],
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Water stays visible when the camera dips below a crest
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let depth_view = Self::create_depth_view(&device, config.width, config.height);
        let egui_renderer = egui_wgpu::Renderer::new(&device, config.format, None, 1, false);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            render_pipeline,
            vertex_buffer,
            index_buffer,
            uniform_buffer,
            uniform_bind_group,
            depth_view,
            index_count: water_grid.indices.len() as u32,
            egui_renderer,
        })
    }

    /// Reconfigure the surface and depth buffer for a new window size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = Self::create_depth_view(&self.device, width, height);
    }

    /// Reconfigure with the current size (after a lost or outdated surface)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Update water vertex buffer with new mesh data
    pub fn update_vertices(&self, vertices: &[Vertex]) {
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    /// Update water uniforms
    pub fn update_uniforms(&self, uniforms: &WaterUniforms) {
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::cast_slice(&[*uniforms]));
    }

    /// Render a frame: water first, then the debug overlay on top
    pub fn render(&mut self, overlay: OverlayFrame) -> std::result::Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Water Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            render_pass.draw_indexed(0..self.index_count, 0, 0..1);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: overlay.pixels_per_point,
        };

        for (id, image_delta) in &overlay.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let overlay_commands = self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &overlay.paint_jobs,
            &screen_descriptor,
        );

        {
            let mut overlay_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("Overlay Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    timestamp_writes: None,
                    occlusion_query_set: None,
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut overlay_pass, &overlay.paint_jobs, &screen_descriptor);
        }

        self.queue.submit(
            overlay_commands
                .into_iter()
                .chain(std::iter::once(encoder.finish())),
        );

        for id in &overlay.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();

        Ok(())
    }

    fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::params::FogMode;

    #[test]
    fn test_uniform_layout_matches_shader() {
        // mat4 + four vec3/f32 pairs + (f32, u32, vec2)
        assert_eq!(std::mem::size_of::<WaterUniforms>(), 144);
        assert_eq!(std::mem::size_of::<WaterUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
    }

    #[test]
    fn test_wgsl_uniforms_match_rust_layout() {
        let module = naga::front::wgsl::parse_str(include_str!("shader.wgsl"))
            .expect("shader.wgsl should parse");

        let entry_points: Vec<&str> = module
            .entry_points
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert!(entry_points.contains(&"vs_main"));
        assert!(entry_points.contains(&"fs_main"));

        let (_, ty) = module
            .types
            .iter()
            .find(|(_, ty)| ty.name.as_deref() == Some("WaterUniforms"))
            .expect("WaterUniforms struct in shader");
        let naga::TypeInner::Struct { members, span } = &ty.inner else {
            panic!("WaterUniforms is not a struct");
        };
        assert_eq!(*span as usize, std::mem::size_of::<WaterUniforms>());

        let offset = |name: &str| {
            members
                .iter()
                .find(|m| m.name.as_deref() == Some(name))
                .map(|m| m.offset as usize)
        };
        assert_eq!(
            offset("camera_pos"),
            Some(std::mem::offset_of!(WaterUniforms, camera_pos))
        );
        assert_eq!(
            offset("fog_color"),
            Some(std::mem::offset_of!(WaterUniforms, fog_color))
        );
        assert_eq!(
            offset("fog_mode"),
            Some(std::mem::offset_of!(WaterUniforms, fog_mode))
        );
    }

    #[test]
    fn test_uniforms_carry_linear_colors() {
        let mut params = SceneParams::default();
        params.wave.surface_color = Rgb::new(0.5, 0.5, 0.5);
        params.fog.mode = FogMode::Exponential;

        let uniforms = WaterUniforms::new(Mat4::IDENTITY, Vec3::ONE, &params);

        assert_eq!(uniforms.depth_color[0], 0.0);
        assert!((uniforms.depth_color[2] - 1.0).abs() < 1e-6);
        assert!((uniforms.surface_color[0] - 0.214).abs() < 1e-3);
        assert_eq!(uniforms.camera_pos, [1.0, 1.0, 1.0]);
        assert_eq!(uniforms.color_multiplier, 5.0);
        assert_eq!(uniforms.fog_mode, 2);
    }
}
