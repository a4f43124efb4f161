/// The `RenderPass` trait: every stage that turns a [`FramePacket`] into
/// GPU commands implements this.
///
/// ## Two-phase design
/// `prepare` → `execute` lets passes upload uniforms **before** opening a
/// `wgpu::RenderPass`, because `write_buffer` cannot be interleaved with an
/// encoder that is recording a render pass.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;

pub trait RenderPass: Send + Sync + 'static {
    /// Short human-readable label used as the wgpu debug label.
    fn name(&self) -> &str;

    /// Upload per-frame data. Called before `execute` each frame.
    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket);

    /// Record draw commands into `encoder`.
    ///
    /// - `color_view`:     color attachment (MSAA texture when active)
    /// - `resolve_target`: single-sample resolve target, or `None` without MSAA
    /// - `depth_view`:     depth attachment
    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        depth_view: &TextureView,
        packet: &FramePacket,
    );
}
