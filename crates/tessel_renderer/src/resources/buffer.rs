/// Vertex upload seam plus thin wrappers over `wgpu::Buffer` creation.
///
/// Meshes never talk to `wgpu::Device` directly; they go through
/// [`VertexUpload`], which lets tests count allocations without a GPU.
use wgpu::util::DeviceExt;

use tessel_core::EngineContext;

use crate::geometry::Vertex;

/// Something that can turn an interleaved vertex stream into a device
/// buffer. The buffer is freed when the returned value is dropped.
pub trait VertexUpload {
    type Buffer;

    /// Uploads `vertices` once as static contents.
    fn upload_vertices(&self, label: &str, vertices: &[Vertex]) -> Self::Buffer;
}

impl VertexUpload for wgpu::Device {
    type Buffer = wgpu::Buffer;

    fn upload_vertices(&self, label: &str, vertices: &[Vertex]) -> wgpu::Buffer {
        create_vertex(self, label, vertices)
    }
}

impl VertexUpload for EngineContext {
    type Buffer = wgpu::Buffer;

    fn upload_vertices(&self, label: &str, vertices: &[Vertex]) -> wgpu::Buffer {
        create_vertex(&self.device, label, vertices)
    }
}

/// Creates a GPU vertex buffer from a slice of `Pod` data.
///
/// The buffer only has the `VERTEX` usage: contents are fixed at creation.
pub fn create_vertex<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &[T],
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(data),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Creates a `UNIFORM | COPY_DST` buffer of `size` zeroed bytes, to be
/// filled with `queue.write_buffer` each frame.
pub fn create_uniform_zeroed(device: &wgpu::Device, label: &str, size: u64) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
