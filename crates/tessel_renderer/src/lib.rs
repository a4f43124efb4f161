/// `tessel_renderer`: procedural triangle-soup meshes, uploaded once and
/// drawn filled with a wireframe overlay.
///
/// # Module layout
///
/// | Module          | Responsibility                                          |
/// |-----------------|---------------------------------------------------------|
/// | `geometry`      | `Vertex`, `MeshBuilder`, shape generators, `Shape`      |
/// | `mesh`          | `MeshResource`: lifecycle, compile/upload, render       |
/// | `resources`     | `VertexUpload` seam, buffer / texture helpers, uniforms |
/// | `shader`        | `ShaderLookup` seam + `ShaderLibrary`                   |
/// | `graph`         | `RenderPass` trait + `FramePacket` / `DrawCommand`      |
/// | `pipeline`      | Bind-group layout + filled / wireframe pipelines        |
/// | `passes`        | Built-in `MeshPass`                                     |
/// | `render_target` | Off-screen color + depth targets, readback              |
pub mod error;
pub mod geometry;
pub mod graph;
pub mod mesh;
pub mod passes;
pub mod pipeline;
pub mod render_target;
pub mod resources;
pub mod shader;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use glam;
pub use tessel_core::{Color, EngineContext};

pub use error::RenderError;
pub use geometry::{MeshBuilder, Shape, Vertex};
pub use graph::{DrawCommand, FillMode, FramePacket, RenderPass};
pub use mesh::{MeshResource, WireframeStyle};
pub use passes::{MeshPass, MeshPassConfig};
pub use render_target::RenderTarget;
pub use resources::VertexUpload;
pub use shader::{ShaderHandle, ShaderLibrary, ShaderLookup};

// ── Internal imports ──────────────────────────────────────────────────────────

use std::sync::Arc;

/// MSAA sample count of the internal target.
pub const DEFAULT_SAMPLE_COUNT: u32 = 4;

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Top-level renderer.
///
/// Owns the device context, the off-screen target, the shader library and
/// an ordered list of [`RenderPass`] stages run with the two-phase
/// **prepare → execute** pattern. Meshes created through
/// [`Renderer::new_mesh`] resolve their shaders against the same library the
/// built-in [`MeshPass`] compiled pipelines for.
pub struct Renderer {
    pub context: EngineContext,
    pub render_target: RenderTarget,
    /// Ordered list of passes executed every frame.
    pub passes: Vec<Box<dyn RenderPass>>,
    shaders: Arc<ShaderLibrary>,
}

impl Renderer {
    /// Creates a `Renderer` with the built-in shaders and default pass settings.
    pub fn new(context: EngineContext, width: u32, height: u32, format: wgpu::TextureFormat) -> Self {
        Self::with_config(
            context,
            ShaderLibrary::with_builtins(),
            width,
            height,
            format,
            MeshPassConfig::default(),
        )
    }

    pub fn with_config(
        context: EngineContext,
        shaders: ShaderLibrary,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        config: MeshPassConfig,
    ) -> Self {
        let rt = RenderTarget::new(&context.device, width, height, format, DEFAULT_SAMPLE_COUNT);
        let mesh_pass = MeshPass::new(&context.device, &shaders, format, rt.sample_count(), config);

        let passes: Vec<Box<dyn RenderPass>> = vec![Box::new(mesh_pass)];

        Self {
            context,
            render_target: rt,
            passes,
            shaders: Arc::new(shaders),
        }
    }

    /// Creates a surface-less `Renderer` rendering into an
    /// `Rgba8UnormSrgb` target.
    pub async fn headless(width: u32, height: u32) -> anyhow::Result<Self> {
        let context = EngineContext::new().await?;
        Ok(Self::new(context, width, height, wgpu::TextureFormat::Rgba8UnormSrgb))
    }

    // ── Meshes ────────────────────────────────────────────────────────────────

    /// The shader registry meshes should resolve against.
    pub fn shaders(&self) -> Arc<dyn ShaderLookup> {
        self.shaders.clone()
    }

    /// An empty, unbound mesh wired to this renderer's shader library.
    pub fn new_mesh(&self) -> MeshResource {
        MeshResource::new(self.shaders())
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Renders `packet` into the internal off-screen [`RenderTarget`].
    pub fn render_to_target(&mut self, encoder: &mut wgpu::CommandEncoder, packet: &FramePacket) {
        let (color_view, resolve_target) = self.render_target.color_views();
        let depth_view = self.render_target.depth_view();

        for pass in &mut self.passes {
            pass.prepare(&self.context.device, &self.context.queue, packet);
            pass.execute(encoder, color_view, resolve_target, depth_view, packet);
        }
    }

    pub fn submit(&self, encoder: wgpu::CommandEncoder) {
        self.context.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Copies the internal target back to the host as tightly packed RGBA8.
    /// Blocks until the GPU is done.
    pub fn read_pixels(&self) -> Result<Vec<u8>, RenderError> {
        let mut encoder = self.begin_frame();
        let readback = self
            .render_target
            .encode_readback(&self.context.device, &mut encoder);
        self.submit(encoder);
        readback.into_rgba(&self.context.device)
    }
}
