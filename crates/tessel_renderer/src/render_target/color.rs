/// A single-sample color texture plus an optional MSAA texture that
/// resolves into it.
///
/// The single-sample texture is always present: it is what gets copied out
/// by [`super::Readback`].
use crate::resources::texture::{self, RenderTextureDesc};

pub struct ColorTarget {
    /// Single-sample texture, also the MSAA resolve target.
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    /// Multisampled texture (present only when `sample_count > 1`).
    pub msaa_view: Option<wgpu::TextureView>,
    pub format: wgpu::TextureFormat,
    pub sample_count: u32,
}

impl ColorTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let (texture, view) = Self::make_resolve(device, width, height, format);
        let msaa_view = Self::make_msaa(device, width, height, format, sample_count);
        Self { texture, view, msaa_view, format, sample_count }
    }

    /// `(render_view, resolve_target)`: with MSAA the pass draws into the
    /// multisampled texture and resolves into `view`; without it, it draws
    /// into `view` directly.
    pub fn attachment_views(&self) -> (&wgpu::TextureView, Option<&wgpu::TextureView>) {
        match &self.msaa_view {
            Some(msaa) => (msaa, Some(&self.view)),
            None => (&self.view, None),
        }
    }

    fn make_resolve(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        let tex = texture::create_render_texture(device, &RenderTextureDesc {
            label: "Color Resolve Texture",
            width,
            height,
            format,
            sample_count: 1,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        });
        let view = texture::default_view(&tex);
        (tex, view)
    }

    fn make_msaa(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Option<wgpu::TextureView> {
        if sample_count <= 1 {
            return None;
        }
        let tex = texture::create_render_texture(device, &RenderTextureDesc {
            label: "Color MSAA Texture",
            width,
            height,
            format,
            sample_count,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        });
        Some(texture::default_view(&tex))
    }
}
