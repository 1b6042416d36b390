use super::helpers;
use wgpu;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Multisampled color and depth targets; color resolves into the swapchain
/// each frame.
///
/// Recreated whenever the surface size changes.
pub(crate) struct MsaaTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    #[allow(dead_code)] // owns the storage behind depth_view
    pub(crate) depth: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (tex, view) = helpers::create_texture_2d(
            device,
            "msaa_color",
            width,
            height,
            format,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (depth, depth_view) = helpers::create_texture_2d(
            device,
            "msaa_depth",
            width,
            height,
            DEPTH_FORMAT,
            sample_count,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self {
            tex,
            view,
            depth,
            depth_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let format = self.tex.format();
        let sample_count = self.tex.sample_count();
        *self = Self::new(device, width, height, format, sample_count);
    }
}
