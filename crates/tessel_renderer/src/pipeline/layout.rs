/// Bind-group layouts shared by every mesh pipeline. Created once and
/// `Arc`-shared so passes can hold them without owning this struct.
use std::sync::Arc;

use crate::resources::DrawUniform;

#[derive(Clone)]
pub struct PipelineLayouts {
    /// group(0): per-draw `DrawUniform` (mvp + wire) via a **dynamic**
    /// uniform buffer: one bind group, a different byte offset per draw.
    pub draw: Arc<wgpu::BindGroupLayout>,
}

impl PipelineLayouts {
    pub fn new(device: &wgpu::Device) -> Self {
        let draw = Arc::new(device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Layout: Draw (dynamic)"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    // the fragment stage reads `wire`
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(DrawUniform::SIZE),
                    },
                    count: None,
                }],
            },
        ));

        Self { draw }
    }
}
