use crate::dom;
use crate::error::FxError;
use crate::motion::hex_to_linear;
use crate::scene::{Scene, Viewport};
use wgpu::util::DeviceExt;
use web_sys as web;

mod helpers;
mod uniforms;

use helpers::PipelineSpec;
use uniforms::{
    Globals, SolidInstance, SwarmUniform, MESH_ATTRIBS, POINT_ATTRIBS, POINT_COLOR_ATTRIBS,
};

pub static SOLIDS_WGSL: &str = include_str!("../shaders/solids.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");

struct GpuSolid {
    vertices: wgpu::Buffer,
    vertex_count: u32,
    glow: Option<(wgpu::Buffer, u32)>,
}

struct GpuSwarm {
    positions: wgpu::Buffer,
    colors: wgpu::Buffer,
    count: u32,
    uniform: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// WebGPU renderer bound to one canvas and one scene layout.
///
/// GPU resources are created from the scene's objects at construction; the
/// scene must not add or remove objects afterwards.
pub struct Renderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
    depth_view: wgpu::TextureView,

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    solid_pipeline: wgpu::RenderPipeline,
    glow_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    solids: Vec<GpuSolid>,
    instance_buffer: wgpu::Buffer,
    swarms: Vec<GpuSwarm>,
    clear_color: wgpu::Color,
}

/// Surface, device and queue for one canvas, before any scene resources exist.
pub struct GpuContext {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    view_format: wgpu::TextureFormat,
}

impl GpuContext {
    /// Acquire WebGPU for `canvas`, sized to `width` x `height` CSS pixels.
    pub async fn connect(
        canvas: web::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let (px_w, px_h) = dom::size_canvas(&canvas, width, height);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| FxError::Gpu("no WebGPU adapter".into()))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| FxError::Gpu(format!("request_device: {:?}", e)))?;

        // Canvas formats on the web are usually non-sRGB; render through an
        // sRGB view so the shaders can output linear color.
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .unwrap_or(caps.formats[0]);
        let view_format = format.add_srgb_suffix();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: px_w,
            height: px_h,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: if view_format != format {
                vec![view_format]
            } else {
                vec![]
            },
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            view_format,
        })
    }
}

impl Renderer {
    /// Build pipelines and per-object buffers for `scene`.
    pub fn new(gpu: GpuContext, scene: &Scene) -> Self {
        let GpuContext {
            canvas,
            surface,
            device,
            queue,
            config,
            view_format,
        } = gpu;
        let (px_w, px_h) = (config.width, config.height);
        let depth_view = helpers::create_depth_view(&device, px_w, px_h);

        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let swarm_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("swarm_bgl"),
            entries: &[helpers::uniform_layout_entry(0)],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let solids_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("solids_shader"),
            source: wgpu::ShaderSource::Wgsl(SOLIDS_WGSL.into()),
        });
        let points_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
        });
        let solids_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("solids_pl"),
            bind_group_layouts: &[&globals_bgl],
            push_constant_ranges: &[],
        });
        let points_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&globals_bgl, &swarm_bgl],
            push_constant_ranges: &[],
        });

        let mesh_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<crate::geometry::MeshVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &MESH_ATTRIBS,
            },
            SolidInstance::layout(),
        ];
        let point_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: 12,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POINT_ATTRIBS,
            },
            wgpu::VertexBufferLayout {
                array_stride: 12,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &POINT_COLOR_ATTRIBS,
            },
        ];
        let solid_pipeline = helpers::make_scene_pipeline(
            &device,
            PipelineSpec {
                label: "solid_pipeline",
                layout: &solids_pl,
                shader: &solids_shader,
                vs_entry: "vs_solid",
                fs_entry: "fs_solid",
                buffers: &mesh_layouts,
                color_format: view_format,
                blend: None,
                cull_mode: Some(wgpu::Face::Back),
                depth_write: true,
            },
        );
        // Glow shells show only their inside faces, so cull the front
        let glow_pipeline = helpers::make_scene_pipeline(
            &device,
            PipelineSpec {
                label: "glow_pipeline",
                layout: &solids_pl,
                shader: &solids_shader,
                vs_entry: "vs_solid",
                fs_entry: "fs_glow",
                buffers: &mesh_layouts,
                color_format: view_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                cull_mode: Some(wgpu::Face::Front),
                depth_write: false,
            },
        );
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            PipelineSpec {
                label: "points_pipeline",
                layout: &points_pl,
                shader: &points_shader,
                vs_entry: "vs_points",
                fs_entry: "fs_points",
                buffers: &point_layouts,
                color_format: view_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                cull_mode: None,
                depth_write: false,
            },
        );

        let solids: Vec<GpuSolid> = scene
            .solids()
            .map(|solid| {
                let tris = solid.shape.triangles(&solid.face_colors());
                let glow = solid.glow.map(|g| {
                    let color = hex_to_linear(g.color);
                    let shell = solid.shape.scaled(g.scale).triangles(&[color]);
                    (vertex_buffer(&device, "glow_vertices", &shell), shell.len() as u32)
                });
                GpuSolid {
                    vertices: vertex_buffer(&device, "solid_vertices", &tris),
                    vertex_count: tris.len() as u32,
                    glow,
                }
            })
            .collect();
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("solid_instances"),
            size: (std::mem::size_of::<SolidInstance>() * solids.len().max(1)) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let swarms = scene
            .point_buffers()
            .map(|points| {
                let uniform = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("swarm_uniform"),
                    contents: bytemuck::bytes_of(&SwarmUniform::from_points(points)),
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("swarm_bg"),
                    layout: &swarm_bgl,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform.as_entire_binding(),
                    }],
                });
                GpuSwarm {
                    positions: vertex_buffer(&device, "swarm_positions", &points.positions),
                    colors: vertex_buffer(&device, "swarm_colors", &points.colors),
                    count: points.len() as u32,
                    uniform,
                    bind_group,
                }
            })
            .collect();

        let bg = hex_to_linear(scene.background);
        log::info!(
            "[render] {}x{} px, format {:?}, {} solids",
            px_w,
            px_h,
            view_format,
            scene.solids().count()
        );

        Self {
            canvas,
            surface,
            device,
            queue,
            config,
            view_format,
            depth_view,
            globals_buffer,
            globals_bg,
            solid_pipeline,
            glow_pipeline,
            points_pipeline,
            solids,
            instance_buffer,
            swarms,
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
        }
    }

    /// Upload the scene's per-frame state and draw one frame.
    ///
    /// Point buffers flagged dirty are uploaded and their flag cleared.
    pub fn render(&mut self, scene: &mut Scene) -> Result<(), wgpu::SurfaceError> {
        let globals = Globals::from_scene(scene);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        let instances: Vec<SolidInstance> = scene.solids().map(SolidInstance::from_solid).collect();
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&instances));
        }
        for (gpu, points) in self.swarms.iter().zip(scene.point_buffers_mut()) {
            if points.dirty && !points.is_empty() {
                self.queue
                    .write_buffer(&gpu.positions, 0, bytemuck::cast_slice(&points.positions));
                points.dirty = false;
            }
            self.queue.write_buffer(
                &gpu.uniform,
                0,
                bytemuck::bytes_of(&SwarmUniform::from_points(points)),
            );
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame.texture.create_view(&wgpu::TextureViewDescriptor {
            format: Some(self.view_format),
            ..Default::default()
        });
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            // Opaque solids first, then translucent points and glow shells
            rpass.set_pipeline(&self.solid_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (i, s) in self.solids.iter().enumerate() {
                let i = i as u32;
                rpass.set_vertex_buffer(0, s.vertices.slice(..));
                rpass.draw(0..s.vertex_count, i..i + 1);
            }

            rpass.set_pipeline(&self.points_pipeline);
            for swarm in &self.swarms {
                rpass.set_bind_group(1, &swarm.bind_group, &[]);
                rpass.set_vertex_buffer(0, swarm.positions.slice(..));
                rpass.set_vertex_buffer(1, swarm.colors.slice(..));
                rpass.draw(0..6, 0..swarm.count);
            }

            rpass.set_pipeline(&self.glow_pipeline);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for (i, s) in self.solids.iter().enumerate() {
                if let Some((buf, count)) = &s.glow {
                    let i = i as u32;
                    rpass.set_vertex_buffer(0, buf.slice(..));
                    rpass.draw(0..*count, i..i + 1);
                }
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Viewport for Renderer {
    fn set_viewport_size(&mut self, width: u32, height: u32) {
        let (px_w, px_h) = dom::size_canvas(&self.canvas, width, height);
        if px_w == self.config.width && px_h == self.config.height {
            return;
        }
        self.config.width = px_w;
        self.config.height = px_h;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = helpers::create_depth_view(&self.device, px_w, px_h);
    }
}

fn vertex_buffer<T: bytemuck::Pod>(device: &wgpu::Device, label: &str, data: &[T]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    })
}
