/// Interleaved vertex record uploaded to the GPU.
///
/// Position and color are packed as contiguous `vec3<f32>` fields so that
/// `bytemuck` can reinterpret a `&[Vertex]` as bytes. The stride is two
/// `vec3`s (24 bytes): position at offset 0, color at offset 12. The matching
/// WGSL locations are declared in `assets/shaders/basic.wgsl`.
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Linear RGB vertex color.
    pub color: [f32; 3],
}

impl Vertex {
    /// Byte size of one interleaved record.
    pub const STRIDE: wgpu::BufferAddress = std::mem::size_of::<Vertex>() as wgpu::BufferAddress;

    /// `@location(0)` position, `@location(1)` color.
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
            shader_location: 1,
        },
    ];

    #[inline]
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }

    /// Returns the `VertexBufferLayout` that matches this struct's memory
    /// layout. Pass this to `wgpu::VertexState::buffers` when building a
    /// render pipeline.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_is_two_vec3s() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::ATTRIBUTES[0].offset, 0);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 12);
    }

    #[test]
    fn bytes_are_position_then_color() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 0.25, 0.0));
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.5, 0.25, 0.0]);
    }
}
