/// Opaque mesh pass with wireframe overlay.
///
/// Clears color + depth, then walks the `FramePacket` in order. Each draw
/// command selects the filled or wireframe pipeline compiled for its shader,
/// binds its slot of the per-draw uniform buffer by dynamic offset and
/// issues one non-indexed draw.
use std::collections::HashMap;

use tessel_core::Color;
use wgpu::{
    CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDepthStencilAttachment, RenderPassDescriptor, StoreOp, TextureView,
};

use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::{MeshPipeline, PipelineLayouts, WireframeBias};
use crate::resources::{DrawUniform, DrawUniformBuffer};
use crate::shader::{ShaderHandle, ShaderLibrary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshPassConfig {
    pub clear_color: Color,
    pub wireframe_bias: WireframeBias,
}

impl Default for MeshPassConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::NAVY,
            wireframe_bias: WireframeBias::default(),
        }
    }
}

impl MeshPassConfig {
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn with_wireframe_bias(mut self, bias: WireframeBias) -> Self {
        self.wireframe_bias = bias;
        self
    }
}

pub struct MeshPass {
    config: MeshPassConfig,
    layouts: PipelineLayouts,
    pipelines: HashMap<ShaderHandle, MeshPipeline>,
    uniforms: DrawUniformBuffer,
    warned_no_wireframe: bool,
}

impl MeshPass {
    /// Compiles a filled + wireframe pipeline pair for every program in
    /// `library`.
    pub fn new(
        device: &Device,
        library: &ShaderLibrary,
        format: wgpu::TextureFormat,
        sample_count: u32,
        config: MeshPassConfig,
    ) -> Self {
        let layouts = PipelineLayouts::new(device);
        let pipelines = library
            .iter()
            .map(|(handle, name, source)| {
                let pipeline = MeshPipeline::new(
                    device,
                    name,
                    source,
                    format,
                    sample_count,
                    &layouts,
                    config.wireframe_bias,
                );
                (handle, pipeline)
            })
            .collect::<HashMap<_, _>>();
        log::debug!("mesh pass: compiled {} shader(s)", pipelines.len());

        let uniforms = DrawUniformBuffer::new(device, &layouts.draw, 64);

        Self {
            config,
            layouts,
            pipelines,
            uniforms,
            warned_no_wireframe: false,
        }
    }

    pub fn config(&self) -> &MeshPassConfig {
        &self.config
    }
}

impl RenderPass for MeshPass {
    fn name(&self) -> &str {
        "Mesh Pass"
    }

    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket) {
        self.uniforms
            .ensure_capacity(device, &self.layouts.draw, packet.len());
        for (slot, cmd) in packet.draws.iter().enumerate() {
            self.uniforms
                .write(queue, slot, &DrawUniform::new(cmd.mvp, cmd.wire));
        }
    }

    fn execute(
        &mut self,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        resolve_target: Option<&TextureView>,
        depth_view: &TextureView,
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Mesh Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target,
                ops: Operations {
                    load: LoadOp::Clear(self.config.clear_color.to_wgpu()),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(Operations {
                    load: LoadOp::Clear(1.0),
                    store: StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        for (slot, cmd) in packet.draws.iter().enumerate() {
            let Some(pipeline) = self.pipelines.get(&cmd.shader) else {
                log::warn!("no pipeline for {:?}; draw skipped", cmd.shader);
                continue;
            };
            let Some(render_pipeline) = pipeline.select(cmd.fill_mode) else {
                if !self.warned_no_wireframe {
                    log::warn!("wireframe unsupported on this device; overlay skipped");
                    self.warned_no_wireframe = true;
                }
                continue;
            };
            rpass.set_pipeline(render_pipeline);
            rpass.set_bind_group(0, &*self.uniforms.bind_group, &[self.uniforms.offset(slot)]);
            rpass.set_vertex_buffer(0, cmd.vertex_buffer.slice(..));
            rpass.draw(0..cmd.vertex_count, 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_overlay_defaults() {
        let config = MeshPassConfig::default();
        assert_eq!(config.wireframe_bias, WireframeBias { constant: -1, slope_scale: -1.0 });
        assert_eq!(config.clear_color, Color::NAVY);
    }

    #[test]
    fn builders_override_fields() {
        let bias = WireframeBias { constant: -4, slope_scale: -2.0 };
        let config = MeshPassConfig::default()
            .with_clear_color(Color::BLACK)
            .with_wireframe_bias(bias);
        assert_eq!(config.clear_color, Color::BLACK);
        assert_eq!(config.wireframe_bias, bias);
    }
}
