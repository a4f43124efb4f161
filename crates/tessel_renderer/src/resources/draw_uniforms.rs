/// Dynamic uniform buffer holding one [`DrawUniform`] per draw command.
///
/// Every mesh is drawn twice per frame (filled, then wireframe) with a
/// different `wire` value, so uniforms are per draw, not per mesh. All slots
/// live in one buffer behind one bind group; `MeshPass` supplies
/// `offset(slot)` as the dynamic offset for each draw call.
///
/// Each slot is `align_up(size_of::<DrawUniform>(), alignment)` bytes, where
/// `alignment` is the device's `min_uniform_buffer_offset_alignment`.
use std::sync::Arc;

use glam::{Mat4, Vec3};

use super::buffer;

/// Per-draw shader input: the combined transform and the wire flag/color.
///
/// `wire.x < 0` tells the fragment shader to output the vertex color;
/// otherwise `wire.rgb` is the line color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub mvp: [[f32; 4]; 4],
    pub wire: [f32; 4],
}

impl DrawUniform {
    pub const SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

    pub fn new(mvp: Mat4, wire: Vec3) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
            wire: wire.extend(0.0).to_array(),
        }
    }
}

pub struct DrawUniformBuffer {
    pub buffer: wgpu::Buffer,
    /// Bind group referencing one slot-sized window with a dynamic offset.
    pub bind_group: Arc<wgpu::BindGroup>,
    /// Byte stride between consecutive slots.
    pub stride: u32,
    capacity: usize,
}

impl DrawUniformBuffer {
    /// `layout` must be the draw layout with `has_dynamic_offset: true`.
    pub fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, initial_capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment;
        let stride = align_up(DrawUniform::SIZE as u32, alignment);

        let capacity = initial_capacity.max(1);
        let buf = Self::create_buffer(device, capacity, stride);
        let bind_group = Self::create_bind_group(device, layout, &buf);

        Self {
            buffer: buf,
            bind_group: Arc::new(bind_group),
            stride,
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Byte offset of slot `index`.
    #[inline]
    pub fn offset(&self, index: usize) -> u32 {
        (index as u32).wrapping_mul(self.stride)
    }

    #[inline]
    pub fn write(&self, queue: &wgpu::Queue, index: usize, uniform: &DrawUniform) {
        debug_assert!(index < self.capacity, "DrawUniformBuffer slot out of range");
        queue.write_buffer(&self.buffer, self.offset(index) as u64, bytemuck::bytes_of(uniform));
    }

    /// Grows (doubling) until `needed` slots fit. Reallocation replaces the
    /// bind group, so commands must be recorded after this call.
    pub fn ensure_capacity(&mut self, device: &wgpu::Device, layout: &wgpu::BindGroupLayout, needed: usize) {
        if needed <= self.capacity {
            return;
        }
        let mut new_cap = self.capacity;
        while new_cap < needed {
            new_cap *= 2;
        }
        log::debug!("growing draw uniform buffer {} -> {new_cap} slots", self.capacity);
        self.buffer = Self::create_buffer(device, new_cap, self.stride);
        self.bind_group = Arc::new(Self::create_bind_group(device, layout, &self.buffer));
        self.capacity = new_cap;
    }

    // ── Private helpers ──────────────────────────────────────────────────────

    fn create_buffer(device: &wgpu::Device, capacity: usize, stride: u32) -> wgpu::Buffer {
        buffer::create_uniform_zeroed(device, "Draw Uniforms", capacity as u64 * stride as u64)
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Draw Uniforms BindGroup"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(DrawUniform::SIZE),
                }),
            }],
        })
    }
}

/// Round `value` up to the next multiple of `alignment` (a power of two).
#[inline]
fn align_up(value: u32, alignment: u32) -> u32 {
    (value + alignment - 1) & !(alignment - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_mat4_plus_vec4() {
        assert_eq!(DrawUniform::SIZE, 80);
    }

    #[test]
    fn align_up_rounds_to_power_of_two() {
        assert_eq!(align_up(80, 256), 256);
        assert_eq!(align_up(256, 256), 256);
        assert_eq!(align_up(80, 64), 128);
    }

    #[test]
    fn wire_flag_is_padded_to_vec4() {
        let u = DrawUniform::new(Mat4::IDENTITY, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(u.wire, [-1.0, -1.0, -1.0, 0.0]);
        assert_eq!(u.mvp[3][3], 1.0);
    }
}
