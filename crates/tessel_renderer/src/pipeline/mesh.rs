/// Filled and wireframe render pipelines for one shader program.
///
/// Both variants share the vertex layout, the bind-group layout and the
/// shader module. The wireframe variant rasterizes edges as lines
/// (`PolygonMode::Line`) and applies a depth bias so lines sit on top of
/// the coplanar filled surface.
use std::sync::Arc;

use crate::geometry::Vertex;
use crate::graph::FillMode;
use crate::pipeline::PipelineLayouts;
use crate::render_target::DepthTarget;

/// Depth bias for the line pass. Negative values pull lines toward the
/// camera.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WireframeBias {
    pub constant: i32,
    pub slope_scale: f32,
}

impl Default for WireframeBias {
    fn default() -> Self {
        Self { constant: -1, slope_scale: -1.0 }
    }
}

impl WireframeBias {
    pub fn to_wgpu(self) -> wgpu::DepthBiasState {
        wgpu::DepthBiasState {
            constant: self.constant,
            slope_scale: self.slope_scale,
            clamp: 0.0,
        }
    }
}

#[derive(Clone)]
pub struct MeshPipeline {
    pub fill: Arc<wgpu::RenderPipeline>,
    /// `None` when the device lacks `Features::POLYGON_MODE_LINE`.
    pub wireframe: Option<Arc<wgpu::RenderPipeline>>,
}

impl MeshPipeline {
    /// Compiles `source` (WGSL with `vs_main`/`fs_main`) for the given
    /// `target_format` and `sample_count`.
    pub fn new(
        device: &wgpu::Device,
        label: &str,
        source: &str,
        target_format: wgpu::TextureFormat,
        sample_count: u32,
        layouts: &PipelineLayouts,
        bias: WireframeBias,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Mesh Pipeline Layout"),
            bind_group_layouts: &[&layouts.draw],
            push_constant_ranges: &[],
        });

        let build = |mode: FillMode| {
            let (polygon_mode, depth_bias) = match mode {
                FillMode::Solid => (wgpu::PolygonMode::Fill, wgpu::DepthBiasState::default()),
                FillMode::Wireframe => (wgpu::PolygonMode::Line, bias.to_wgpu()),
            };
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&format!("{label} {mode:?} Pipeline")),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[Vertex::layout()],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: target_format,
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: Some(wgpu::Face::Back),
                    polygon_mode,
                    ..Default::default()
                },
                depth_stencil: Some(wgpu::DepthStencilState {
                    format: DepthTarget::FORMAT,
                    depth_write_enabled: true,
                    depth_compare: wgpu::CompareFunction::LessEqual,
                    stencil: wgpu::StencilState::default(),
                    bias: depth_bias,
                }),
                multisample: wgpu::MultisampleState {
                    count: sample_count,
                    mask: !0,
                    alpha_to_coverage_enabled: false,
                },
                multiview: None,
                cache: None,
            })
        };

        let fill = Arc::new(build(FillMode::Solid));
        let wireframe = if device.features().contains(wgpu::Features::POLYGON_MODE_LINE) {
            Some(Arc::new(build(FillMode::Wireframe)))
        } else {
            log::warn!("{label}: POLYGON_MODE_LINE unavailable, no wireframe pipeline");
            None
        };

        Self { fill, wireframe }
    }

    /// The pipeline for `mode`, if the device supports it.
    pub fn select(&self, mode: FillMode) -> Option<&Arc<wgpu::RenderPipeline>> {
        match mode {
            FillMode::Solid => Some(&self.fill),
            FillMode::Wireframe => self.wireframe.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bias_pulls_lines_forward() {
        let bias = WireframeBias::default().to_wgpu();
        assert_eq!(bias.constant, -1);
        assert_eq!(bias.slope_scale, -1.0);
        assert_eq!(bias.clamp, 0.0);
    }
}
