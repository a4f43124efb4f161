/// Data bundle assembled once per frame and passed immutably to every
/// `RenderPass`.
///
/// Meshes append draw commands through `MeshResource::render`; passes only
/// see resolved GPU handles, never the host-side geometry.
///
/// Generic over the buffer type so the command stream can be built and
/// inspected without a device.
use std::sync::Arc;

use glam::{Mat4, Vec3};

use crate::shader::ShaderHandle;

/// How a draw command is rasterized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FillMode {
    /// Filled triangles, per-vertex color.
    Solid,
    /// Triangle edges as lines, flat color, pulled toward the camera by a
    /// depth bias so they win the depth test against the filled pass.
    Wireframe,
}

impl FillMode {
    #[inline]
    pub fn is_depth_biased(self) -> bool {
        matches!(self, FillMode::Wireframe)
    }
}

/// A single non-indexed draw of a mesh, fully resolved to GPU handles.
#[derive(Debug)]
pub struct DrawCommand<B = wgpu::Buffer> {
    pub vertex_buffer: Arc<B>,
    pub vertex_count: u32,
    pub shader: ShaderHandle,
    /// `projection * view * model`.
    pub mvp: Mat4,
    /// Negative x means "use vertex colors"; otherwise the line color.
    pub wire: Vec3,
    pub fill_mode: FillMode,
}

/// All data a `RenderPass` may need for one frame.
#[derive(Debug)]
pub struct FramePacket<B = wgpu::Buffer> {
    pub draws: Vec<DrawCommand<B>>,
}

impl<B> FramePacket<B> {
    pub fn new() -> Self {
        Self { draws: Vec::new() }
    }

    pub fn push(&mut self, cmd: DrawCommand<B>) {
        self.draws.push(cmd);
    }

    pub fn clear(&mut self) {
        self.draws.clear();
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }
}

impl<B> Default for FramePacket<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wireframe_is_biased() {
        assert!(FillMode::Wireframe.is_depth_biased());
        assert!(!FillMode::Solid.is_depth_biased());
    }

    #[test]
    fn packet_collects_and_clears() {
        let mut packet: FramePacket<()> = FramePacket::default();
        assert!(packet.is_empty());
        packet.push(DrawCommand {
            vertex_buffer: Arc::new(()),
            vertex_count: 3,
            shader: ShaderHandle(0),
            mvp: Mat4::IDENTITY,
            wire: Vec3::NEG_ONE,
            fill_mode: FillMode::Solid,
        });
        assert_eq!(packet.len(), 1);
        packet.clear();
        assert!(packet.is_empty());
    }
}
