use crate::config::{fit_surface_size, SurfaceFormats};
use crate::constants::{COLOR_ACCENT, COLOR_BACKGROUND, COLOR_COPPER, FOG_DENSITY};
use crate::core::{SceneGraph, SceneMeshes};
use crate::error::Unavailable;
use glam::Vec3;
use web_sys as web;

mod buffers;
mod helpers;
mod targets;
mod uniforms;

use buffers::{GpuMesh, GpuPoints, ObjectSlot};
use helpers::PipelineSpec;
use targets::MsaaTarget;
use uniforms::{GlobalUniforms, ObjectUniforms, SpriteGradient};

struct ObjectSlots {
    core: ObjectSlot,
    rings: [ObjectSlot; 3],
    inner_shell: ObjectSlot,
    outer_shell: ObjectSlot,
    dots: ObjectSlot,
    particles: ObjectSlot,
}

impl ObjectSlots {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout) -> Self {
        Self {
            core: ObjectSlot::new(device, layout, "core_uniforms"),
            rings: [
                ObjectSlot::new(device, layout, "ring1_uniforms"),
                ObjectSlot::new(device, layout, "ring2_uniforms"),
                ObjectSlot::new(device, layout, "ring3_uniforms"),
            ],
            inner_shell: ObjectSlot::new(device, layout, "inner_uniforms"),
            outer_shell: ObjectSlot::new(device, layout, "outer_uniforms"),
            dots: ObjectSlot::new(device, layout, "dots_uniforms"),
            particles: ObjectSlot::new(device, layout, "particles_uniforms"),
        }
    }
}

struct Palette {
    accent: Vec3,
    copper: Vec3,
    background: Vec3,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    formats: SurfaceFormats,
    max_dimension: u32,
    msaa: MsaaTarget,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    points_pipeline: wgpu::RenderPipeline,

    outer_shell: GpuMesh,
    inner_shell: GpuMesh,
    core: GpuMesh,
    ring: GpuMesh,
    dots: GpuPoints,
    particles: GpuPoints,
    slots: ObjectSlots,

    palette: Palette,
    vertex_glow: SpriteGradient,
    ember: SpriteGradient,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(
        canvas: web::HtmlCanvasElement,
        meshes: &SceneMeshes,
        particle_count: usize,
        msaa_samples: u32,
    ) -> Result<Self, Unavailable> {
        let (canvas_width, canvas_height) = (canvas.width(), canvas.height());

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| Unavailable::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(Unavailable::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("parallax_device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| Unavailable::Device(e.to_string()))?;

        let max_dimension = device.limits().max_texture_dimension_2d;
        let (width, height) =
            fit_surface_size(canvas_width as f64, canvas_height as f64, max_dimension);

        let caps = surface.get_capabilities(&adapter);
        let formats = SurfaceFormats::choose(&caps.formats).ok_or(Unavailable::NoSurfaceFormat)?;
        // every pass renders through the view format
        let view_format = formats.view;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: formats.surface,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: formats.view_formats(),
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let msaa = MsaaTarget::new(&device, view_format, width, height, msaa_samples);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let globals_layout = helpers::uniform_layout(&device, "globals_bgl");
        let object_layout = helpers::uniform_layout(&device, "object_bgl");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&globals_layout, &object_layout],
            push_constant_ranges: &[],
        });
        let samples = msaa.samples();
        let mesh_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            view_format,
            samples,
            PipelineSpec {
                label: "mesh_pipeline",
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                topology: wgpu::PrimitiveTopology::TriangleList,
                step_mode: wgpu::VertexStepMode::Vertex,
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            view_format,
            samples,
            PipelineSpec {
                label: "wireframe_pipeline",
                vs_entry: "vs_mesh",
                fs_entry: "fs_mesh",
                topology: wgpu::PrimitiveTopology::LineList,
                step_mode: wgpu::VertexStepMode::Vertex,
                blend: wgpu::BlendState::ALPHA_BLENDING,
            },
        );
        let points_pipeline = helpers::make_scene_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            view_format,
            samples,
            PipelineSpec {
                label: "points_pipeline",
                vs_entry: "vs_points",
                fs_entry: "fs_points",
                topology: wgpu::PrimitiveTopology::TriangleList,
                step_mode: wgpu::VertexStepMode::Instance,
                blend: helpers::ADDITIVE_BLENDING,
            },
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<GlobalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let outer_shell = GpuMesh::new(
            &device,
            "outer_shell",
            &meshes.outer.positions,
            &meshes.outer_edges,
            true,
        );
        let inner_shell = GpuMesh::new(
            &device,
            "inner_shell",
            &meshes.inner.positions,
            &meshes.inner_edges,
            false,
        );
        let core = GpuMesh::new(
            &device,
            "core",
            &meshes.core.positions,
            &meshes.core.indices,
            false,
        );
        let ring = GpuMesh::new(
            &device,
            "ring",
            &meshes.ring.positions,
            &meshes.ring.indices,
            false,
        );
        let dots = GpuPoints::new(&device, "dots", meshes.dot_positions());
        let particles = GpuPoints::new(&device, "particles", &vec![Vec3::ZERO; particle_count]);
        let slots = ObjectSlots::new(&device, &object_layout);

        let palette = Palette {
            accent: formats.color(COLOR_ACCENT),
            copper: formats.color(COLOR_COPPER),
            background: formats.color(COLOR_BACKGROUND),
        };
        let bg = palette.background;
        log::info!(
            "[gpu] {:?} via {:?} view {}x{} msaa={} dots={} particles={}",
            formats.surface,
            formats.view,
            width,
            height,
            samples,
            dots.count,
            particles.count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            formats,
            max_dimension,
            msaa,
            globals_buffer,
            globals_bind_group,
            mesh_pipeline,
            line_pipeline,
            points_pipeline,
            outer_shell,
            inner_shell,
            core,
            ring,
            dots,
            particles,
            slots,
            palette,
            vertex_glow: SpriteGradient::vertex_glow(&formats),
            ember: SpriteGradient::ember(&formats),
            clear_color: wgpu::Color {
                r: bg.x as f64,
                g: bg.y as f64,
                b: bg.z as f64,
                a: 1.0,
            },
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let (width, height) = fit_surface_size(width as f64, height as f64, self.max_dimension);
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Re-apply the surface configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        self.msaa
            .recreate(&self.device, self.formats.view, self.width, self.height);
    }

    fn write_uniforms(&mut self, scene: &SceneGraph, outer_vertices: &[Vec3], particles: &[Vec3]) {
        let camera = &scene.camera;
        let globals = GlobalUniforms::new(
            camera.projection_matrix(),
            camera.view_matrix(),
            self.palette.background,
            FOG_DENSITY,
            camera.fovy_radians,
        );
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        let accent = self.palette.accent;
        let mesh = |node: &crate::core::MeshNode, color: Vec3| {
            ObjectUniforms::mesh(scene.group_child_matrix(&node.transform), color, node.opacity)
        };
        self.slots.core.write(&self.queue, &mesh(&scene.core, accent));
        for (slot, ring) in self.slots.rings.iter().zip(&scene.rings) {
            slot.write(&self.queue, &mesh(ring, accent));
        }
        self.slots
            .inner_shell
            .write(&self.queue, &mesh(&scene.inner_shell, self.palette.copper));
        self.slots
            .outer_shell
            .write(&self.queue, &mesh(&scene.outer_shell, accent));

        let dots = &scene.dots;
        self.slots.dots.write(
            &self.queue,
            &ObjectUniforms::points(
                scene.group_child_matrix(&dots.transform),
                accent,
                dots.opacity,
                dots.size,
                &self.vertex_glow,
            ),
        );
        let layer = &scene.particles;
        self.slots.particles.write(
            &self.queue,
            &ObjectUniforms::points(
                layer.transform.matrix(),
                Vec3::ONE,
                layer.opacity,
                layer.size,
                &self.ember,
            ),
        );

        self.outer_shell.write_vertices(&self.queue, outer_vertices);
        self.particles.write(&self.queue, particles);
    }

    /// Upload this frame's state and draw it.
    pub fn render(
        &mut self,
        scene: &SceneGraph,
        outer_vertices: &[Vec3],
        particles: &[Vec3],
    ) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(scene, outer_vertices, particles);

        let frame = self.surface.get_current_texture()?;
        let frame_view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.formats.view),
                ..Default::default()
            });
        let (view, resolve_target) = match self.msaa.view() {
            Some(msaa_view) => (msaa_view, Some(&frame_view)),
            None => (&frame_view, None),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);

            // glow meshes
            rpass.set_pipeline(&self.mesh_pipeline);
            draw_indexed(&mut rpass, &self.core, &self.slots.core);
            for slot in &self.slots.rings {
                draw_indexed(&mut rpass, &self.ring, slot);
            }

            // wireframe shells
            rpass.set_pipeline(&self.line_pipeline);
            draw_indexed(&mut rpass, &self.inner_shell, &self.slots.inner_shell);
            draw_indexed(&mut rpass, &self.outer_shell, &self.slots.outer_shell);

            // additive sprites
            rpass.set_pipeline(&self.points_pipeline);
            draw_points(&mut rpass, &self.dots, &self.slots.dots);
            draw_points(&mut rpass, &self.particles, &self.slots.particles);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_indexed(rpass: &mut wgpu::RenderPass<'_>, mesh: &GpuMesh, slot: &ObjectSlot) {
    rpass.set_bind_group(1, &slot.bind_group, &[]);
    rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
    rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
}

fn draw_points(rpass: &mut wgpu::RenderPass<'_>, points: &GpuPoints, slot: &ObjectSlot) {
    if points.count == 0 {
        return;
    }
    rpass.set_bind_group(1, &slot.bind_group, &[]);
    rpass.set_vertex_buffer(0, points.instances.slice(..));
    rpass.draw(0..6, 0..points.count);
}
