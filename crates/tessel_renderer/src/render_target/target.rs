/// A complete render target composed of a [`ColorTarget`] and a
/// [`DepthTarget`], plus the copy-out path used by headless rendering.
use std::sync::mpsc;

use super::{color::ColorTarget, depth::DepthTarget};
use crate::error::RenderError;

pub struct RenderTarget {
    pub color: ColorTarget,
    pub depth: DepthTarget,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        Self {
            color: ColorTarget::new(device, width, height, format, sample_count),
            depth: DepthTarget::new(device, width, height, sample_count),
            width,
            height,
        }
    }

    #[inline]
    pub fn sample_count(&self) -> u32 {
        self.color.sample_count
    }

    /// The (render_view, resolve_target) pair for color attachments.
    #[inline]
    pub fn color_views(&self) -> (&wgpu::TextureView, Option<&wgpu::TextureView>) {
        self.color.attachment_views()
    }

    #[inline]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }

    /// Records a copy of the resolved color texture into a mappable buffer.
    /// Submit `encoder` before calling [`Readback::into_rgba`].
    pub fn encode_readback(&self, device: &wgpu::Device, encoder: &mut wgpu::CommandEncoder) -> Readback {
        // bytes per row must be a multiple of COPY_BYTES_PER_ROW_ALIGNMENT
        let unpadded = 4 * self.width;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded = unpadded.div_ceil(align) * align;

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Readback Buffer"),
            size: padded as u64 * self.height as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.color.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &buffer,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(padded),
                    rows_per_image: None,
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );

        Readback {
            buffer,
            width: self.width,
            height: self.height,
            padded_bytes_per_row: padded,
            bgra: matches!(
                self.color.format,
                wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
            ),
        }
    }
}

/// A pending copy of the color target. Only 4-byte-per-pixel formats are
/// supported.
pub struct Readback {
    buffer: wgpu::Buffer,
    pub width: u32,
    pub height: u32,
    padded_bytes_per_row: u32,
    bgra: bool,
}

impl Readback {
    /// Blocks until the copy is mapped and returns tightly packed RGBA8.
    pub fn into_rgba(self, device: &wgpu::Device) -> Result<Vec<u8>, RenderError> {
        let slice = self.buffer.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        device.poll(wgpu::Maintain::Wait);

        rx.recv()
            .map_err(|e| RenderError::Readback(e.to_string()))?
            .map_err(|e| RenderError::Readback(e.to_string()))?;

        let pixels = {
            let data = slice.get_mapped_range();
            unpad_rows(&data, self.width, self.height, self.padded_bytes_per_row, self.bgra)
        };
        self.buffer.unmap();
        Ok(pixels)
    }
}

/// Strips row padding and, for BGRA sources, swaps to RGBA.
fn unpad_rows(data: &[u8], width: u32, height: u32, padded_bytes_per_row: u32, bgra: bool) -> Vec<u8> {
    let row_len = (4 * width) as usize;
    let mut out = Vec::with_capacity(row_len * height as usize);
    for row in 0..height as usize {
        let start = row * padded_bytes_per_row as usize;
        let pixels = &data[start..start + row_len];
        if bgra {
            for px in pixels.chunks_exact(4) {
                out.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
            }
        } else {
            out.extend_from_slice(pixels);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_is_dropped_per_row() {
        // 1×2 image, rows padded to 8 bytes
        let data = [1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 0, 0, 0];
        assert_eq!(unpad_rows(&data, 1, 2, 8, false), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn bgra_is_swizzled_to_rgba() {
        let data = [10, 20, 30, 255];
        assert_eq!(unpad_rows(&data, 1, 1, 4, true), vec![30, 20, 10, 255]);
    }
}
