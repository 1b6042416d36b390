use crate::core::scene::{Camera, CoreShell, LineStyle, WireframeScene};
use crate::core::{hex_rgb, FOG_COLOR, FOG_DENSITY, GLOW_OPACITY, NOISE_COUNT};
use glam::Mat4;
use web_sys as web;

mod glow;
mod helpers;
mod lines;
mod targets;
use glow::{create_glow_resources, GlowResources};
use lines::{create_line_resources, LineResources};
use targets::MsaaTarget;

const SAMPLE_COUNT: u32 = 4;
// shells + noise shapes + glow sprite
const MAX_DRAWS: usize = 3 + NOISE_COUNT + 1;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    color: [f32; 4],
    fog: [f32; 4],
    params: [f32; 4],
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    msaa: MsaaTarget,

    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    uniform_stride: u64,
    staging: Vec<u8>,

    lines: LineResources,
    glow: GlowResources,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        shells: &[CoreShell],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        // Hex colors are used as-is, so prefer a non-sRGB swapchain.
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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas so the page gradient shows through.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let msaa = MsaaTarget::new(&device, width, height, format, SAMPLE_COUNT);

        // One uniform slot per draw, addressed with dynamic offsets.
        let uniform_size = std::mem::size_of::<ObjectUniforms>() as u64;
        let uniform_stride = helpers::align_up(
            uniform_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniforms"),
            size: uniform_stride * MAX_DRAWS as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(uniform_size),
                },
                count: None,
            }],
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout: &uniform_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &uniform_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(uniform_size),
                }),
            }],
        });

        let lines = create_line_resources(&device, format, SAMPLE_COUNT, &uniform_bgl, shells);
        let glow = create_glow_resources(&device, &queue, format, SAMPLE_COUNT, &uniform_bgl);

        log::info!(
            "[signal] gpu ready {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            msaa,
            uniform_buffer,
            uniform_bind_group,
            uniform_stride,
            staging: vec![0; (uniform_stride * MAX_DRAWS as u64) as usize],
            lines,
            glow,
        })
    }

    /// Resize the swapchain and MSAA targets; geometry is untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.msaa.recreate(&self.device, width, height);
        }
    }

    fn write_slot(&mut self, slot: usize, u: &ObjectUniforms) -> u32 {
        let offset = slot as u64 * self.uniform_stride;
        let start = offset as usize;
        let bytes = bytemuck::bytes_of(u);
        self.staging[start..start + bytes.len()].copy_from_slice(bytes);
        offset as u32
    }

    /// Draw order: noise shapes, core shells (outermost last), then the glow.
    pub fn render(&mut self, scene: &WireframeScene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        let view_m = camera.view_matrix().to_cols_array_2d();
        let proj_m = camera.projection_matrix().to_cols_array_2d();
        let fog_rgb = hex_rgb(FOG_COLOR);
        let fog = [fog_rgb[0], fog_rgb[1], fog_rgb[2], FOG_DENSITY];
        let uniforms = |model: Mat4, style: LineStyle, scale: f32| ObjectUniforms {
            view: view_m,
            proj: proj_m,
            model: model.to_cols_array_2d(),
            color: [style.rgb[0], style.rgb[1], style.rgb[2], style.opacity],
            fog,
            params: [scale, 0.0, 0.0, 0.0],
        };

        let mut slot = 0usize;
        for (i, shape) in scene.noise.iter().enumerate() {
            self.write_slot(slot, &uniforms(scene.noise_model(i), shape.tier.style(), 0.0));
            slot += 1;
        }
        for (i, shell) in scene.shells.iter().enumerate() {
            self.write_slot(slot, &uniforms(scene.shell_model(i), shell.style, 0.0));
            slot += 1;
        }
        let glow_style = LineStyle::new(0xffffff, GLOW_OPACITY);
        let glow_offset = self.write_slot(
            slot,
            &uniforms(scene.scene_model(), glow_style, scene.glow_scale),
        );
        slot += 1;
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            &self.staging[..(slot as u64 * self.uniform_stride) as usize],
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("signal_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("signal_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.msaa.view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.msaa.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.lines.pipeline);
            let mut slot = 0usize;
            for shape in scene.noise.iter() {
                let mesh = self.lines.kind_mesh(shape.kind);
                let off = (slot as u64 * self.uniform_stride) as u32;
                rpass.set_bind_group(0, &self.uniform_bind_group, &[off]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.draw(0..mesh.vertex_count, 0..1);
                slot += 1;
            }
            for mesh in &self.lines.shell_meshes {
                let off = (slot as u64 * self.uniform_stride) as u32;
                rpass.set_bind_group(0, &self.uniform_bind_group, &[off]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.draw(0..mesh.vertex_count, 0..1);
                slot += 1;
            }

            rpass.set_pipeline(&self.glow.pipeline);
            rpass.set_bind_group(0, &self.uniform_bind_group, &[glow_offset]);
            rpass.set_bind_group(1, &self.glow.texture_bind_group, &[]);
            rpass.draw(0..6, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
