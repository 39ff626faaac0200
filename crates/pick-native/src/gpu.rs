use pick_core::mesh::{axis_cross, unit_sphere, MeshVertex};
use pick_core::{Renderer, SPHERE_PHI_RESOLUTION, SPHERE_THETA_RESOLUTION};
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const INITIAL_MARKER_CAPACITY: usize = 64;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SphereInstance {
    center: [f32; 3],
    radius: f32,
    diffuse_color: [f32; 3],
    diffuse: f32,
    specular_color: [f32; 3],
    specular: f32,
    specular_power: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MarkerInstance {
    center: [f32; 3],
    size: f32,
    color: [f32; 4],
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,
    sphere_pipeline: wgpu::RenderPipeline,
    marker_pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    sphere_vb: wgpu::Buffer,
    sphere_ib: wgpu::Buffer,
    sphere_index_count: u32,
    sphere_instances: wgpu::Buffer,
    sphere_count: u32,
    cross_vb: wgpu::Buffer,
    marker_instances: wgpu::Buffer,
    marker_capacity: usize,
}

impl<'w> GpuState<'w> {
    pub async fn new(window: &'w winit::window::Window, renderer: &Renderer) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
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
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        let depth_view = create_depth_view(&device, config.width, config.height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene shader"),
            source: wgpu::ShaderSource::Wgsl(pick_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Sphere geometry is shared by every instance; instances never change.
        let mesh = unit_sphere(SPHERE_PHI_RESOLUTION, SPHERE_THETA_RESOLUTION);
        let sphere_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_vb"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sphere_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_ib"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instances = sphere_instances(renderer);
        // wgpu rejects zero-sized vertex buffers
        let instance_bytes: &[u8] = if instances.is_empty() {
            &[0; std::mem::size_of::<SphereInstance>()]
        } else {
            bytemuck::cast_slice(&instances)
        };
        let sphere_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sphere_instances"),
            contents: instance_bytes,
            usage: wgpu::BufferUsages::VERTEX,
        });

        let cross = axis_cross();
        let cross_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cross_vb"),
            contents: bytemuck::cast_slice(&cross),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let marker_instances = create_marker_buffer(&device, INITIAL_MARKER_CAPACITY);

        let sphere_buffers = [
            // slot 0: unit sphere vertices
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MeshVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
            },
            // slot 1: per-sphere placement and material
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<SphereInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![
                    2 => Float32x3,
                    3 => Float32,
                    4 => Float32x3,
                    5 => Float32,
                    6 => Float32x3,
                    7 => Float32,
                    8 => Float32
                ],
            },
        ];
        let marker_buffers = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 3) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x3],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<MarkerInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x4],
            },
        ];

        let sphere_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            ("vs_sphere", "fs_sphere"),
            &sphere_buffers,
            wgpu::PrimitiveTopology::TriangleList,
        );
        let marker_pipeline = create_pipeline(
            &device,
            &pipeline_layout,
            &shader,
            format,
            ("vs_marker", "fs_marker"),
            &marker_buffers,
            wgpu::PrimitiveTopology::LineList,
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            depth_view,
            sphere_pipeline,
            marker_pipeline,
            uniform_buffer,
            bind_group,
            sphere_vb,
            sphere_ib,
            sphere_index_count: mesh.indices.len() as u32,
            sphere_instances,
            sphere_count: instances.len() as u32,
            cross_vb,
            marker_instances,
            marker_capacity: INITIAL_MARKER_CAPACITY,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, new_size.width, new_size.height);
    }

    pub fn render(&mut self, renderer: &Renderer) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let camera = renderer.camera();
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: camera.view_projection().to_cols_array_2d(),
                eye: camera.eye.extend(1.0).to_array(),
            }),
        );

        let markers: Vec<MarkerInstance> = renderer
            .scene()
            .markers()
            .iter()
            .map(|m| MarkerInstance {
                center: m.position.to_vec3().to_array(),
                size: m.style.size,
                color: [m.style.color[0], m.style.color[1], m.style.color[2], 1.0],
            })
            .collect();
        if markers.len() > self.marker_capacity {
            self.marker_capacity = markers.len().next_power_of_two();
            self.marker_instances = create_marker_buffer(&self.device, self.marker_capacity);
        }
        if !markers.is_empty() {
            self.queue
                .write_buffer(&self.marker_instances, 0, bytemuck::cast_slice(&markers));
        }

        let [r, g, b] = renderer.background();
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: 1.0,
                        }),
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
            rpass.set_bind_group(0, &self.bind_group, &[]);
            if self.sphere_count > 0 {
                rpass.set_pipeline(&self.sphere_pipeline);
                rpass.set_vertex_buffer(0, self.sphere_vb.slice(..));
                rpass.set_vertex_buffer(1, self.sphere_instances.slice(..));
                rpass.set_index_buffer(self.sphere_ib.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..self.sphere_index_count, 0, 0..self.sphere_count);
            }
            if !markers.is_empty() {
                rpass.set_pipeline(&self.marker_pipeline);
                rpass.set_vertex_buffer(0, self.cross_vb.slice(..));
                rpass.set_vertex_buffer(1, self.marker_instances.slice(..));
                rpass.draw(0..6, 0..markers.len() as u32);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn sphere_instances(renderer: &Renderer) -> Vec<SphereInstance> {
    renderer
        .scene()
        .spheres()
        .iter()
        .map(|s| SphereInstance {
            center: s.center.to_array(),
            radius: s.radius,
            diffuse_color: s.material.diffuse_color,
            diffuse: s.material.diffuse,
            specular_color: s.material.specular_color,
            specular: s.material.specular,
            specular_power: s.material.specular_power,
            _pad: [0.0; 3],
        })
        .collect()
}

fn create_marker_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("marker_instances"),
        size: (std::mem::size_of::<MarkerInstance>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth"),
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

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    (vs_entry, fs_entry): (&str, &str),
    buffers: &[wgpu::VertexBufferLayout<'_>],
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(vs_entry),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some(vs_entry),
            buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
