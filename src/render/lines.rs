use super::helpers::{self, PipelineSpec};
use crate::core::geometry::{self, LineVertex, Triangles};
use crate::core::scene::{CoreShell, ShapeKind};
use crate::core::EDGE_THRESHOLD_DEG;
use wgpu;
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

/// Line pipeline plus one edge mesh per shell and per noise shape kind.
pub(crate) struct LineResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) shell_meshes: Vec<GpuMesh>,
    pub(crate) kind_meshes: Vec<GpuMesh>,
}

impl LineResources {
    pub(crate) fn kind_mesh(&self, kind: ShapeKind) -> &GpuMesh {
        &self.kind_meshes[kind.index()]
    }
}

fn upload_edges(device: &wgpu::Device, label: &str, tris: &Triangles) -> GpuMesh {
    let verts: Vec<LineVertex> =
        geometry::line_vertices(&geometry::edges(tris, EDGE_THRESHOLD_DEG));
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(&verts),
        usage: wgpu::BufferUsages::VERTEX,
    });
    GpuMesh {
        vertex_buffer,
        vertex_count: verts.len() as u32,
    }
}

pub(crate) fn create_line_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
    uniform_bgl: &wgpu::BindGroupLayout,
    shells: &[CoreShell],
) -> LineResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("wireframe_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::WIREFRAME_WGSL.into()),
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("wireframe_pl"),
        bind_group_layouts: &[uniform_bgl],
        push_constant_ranges: &[],
    });
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<LineVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3],
    }];
    let pipeline = helpers::make_scene_pipeline(
        device,
        &pl,
        &shader,
        color_format,
        sample_count,
        PipelineSpec {
            label: "wireframe_pipeline",
            vs_entry: "vs_main",
            fs_entry: "fs_main",
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            blend: wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
            depth_write: true,
        },
    );

    let shell_meshes = shells
        .iter()
        .map(|s| upload_edges(device, "shell_edges", &s.triangles()))
        .collect();
    let kind_meshes = ShapeKind::ALL
        .iter()
        .map(|k| upload_edges(device, "noise_edges", &k.triangles()))
        .collect();

    LineResources {
        pipeline,
        shell_meshes,
        kind_meshes,
    }
}
