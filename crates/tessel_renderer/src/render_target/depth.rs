/// Depth texture shared by the filled and wireframe passes.
///
/// The sample count must match the color attachment's.
use crate::resources::texture::{self, RenderTextureDesc};

pub struct DepthTarget {
    pub view: wgpu::TextureView,
    pub sample_count: u32,
}

impl DepthTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    pub fn new(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> Self {
        Self {
            view: Self::make(device, width, height, sample_count),
            sample_count,
        }
    }

    fn make(device: &wgpu::Device, width: u32, height: u32, sample_count: u32) -> wgpu::TextureView {
        let tex = texture::create_render_texture(device, &RenderTextureDesc {
            label: "Depth Texture",
            width,
            height,
            format: Self::FORMAT,
            sample_count,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        });
        texture::default_view(&tex)
    }
}
