/// Cone standing on +Y: base ring at `-height / 2`, apex at `+height / 2`.
use glam::Vec3;

use super::{clamp_extent, clamp_subdivisions, ring, segments, MIN_EXTENT};
use crate::geometry::MeshBuilder;

pub fn cone(radius: f32, height: f32, subdivisions: u32) -> MeshBuilder {
    let radius = clamp_extent("cone radius", radius, MIN_EXTENT);
    let height = clamp_extent("cone height", height, MIN_EXTENT);
    let n = clamp_subdivisions("cone subdivisions", subdivisions);

    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let base = Vec3::new(0.0, -half, 0.0);
    let rim = ring(radius, -half, n);

    let mut b = MeshBuilder::with_capacity(n * 6);
    for (i, j) in segments(n) {
        b.emit_triangle(rim[j], rim[i], apex);
        b.emit_triangle(rim[i], rim[j], base);
    }
    b
}
