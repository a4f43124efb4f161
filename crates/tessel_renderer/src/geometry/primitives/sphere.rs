/// Latitude/longitude sphere centred at the origin.
///
/// `subdivisions` is the number of latitude bands; each band is split into
/// `2 * subdivisions` longitude segments. The poles are single apex points
/// fanned to the first and last latitude ring; the bands between rings are
/// quads. A subdivision count of zero produces a cube of edge `2 * radius`
/// instead.
use std::f32::consts::PI;

use glam::Vec3;

use super::{
    clamp_count, clamp_extent, cube, ring, segments, MAX_SPHERE_SUBDIVISIONS, MIN_EXTENT,
    MIN_SUBDIVISIONS,
};
use crate::geometry::MeshBuilder;

pub fn sphere(radius: f32, subdivisions: u32) -> MeshBuilder {
    let radius = clamp_extent("sphere radius", radius, MIN_EXTENT);
    if subdivisions < 1 {
        log::warn!("sphere subdivisions 0; generating a cube instead");
        return cube(radius * 2.0);
    }
    let stacks = clamp_count(
        "sphere subdivisions",
        subdivisions,
        MIN_SUBDIVISIONS,
        MAX_SPHERE_SUBDIVISIONS,
    );
    let slices = stacks * 2;

    let north = Vec3::new(0.0, radius, 0.0);
    let south = Vec3::new(0.0, -radius, 0.0);
    let rings: Vec<Vec<Vec3>> = (1..stacks)
        .map(|k| {
            let phi = PI * k as f32 / stacks as f32;
            ring(radius * phi.sin(), radius * phi.cos(), slices)
        })
        .collect();
    let first = &rings[0];
    let last = &rings[rings.len() - 1];

    let mut b = MeshBuilder::with_capacity(slices * (stacks - 1) * 6);
    for (i, j) in segments(slices) {
        b.emit_triangle(first[j], first[i], north);
        for band in rings.windows(2) {
            let (upper, lower) = (&band[0], &band[1]);
            b.emit_quad(lower[j], lower[i], upper[j], upper[i]);
        }
        b.emit_triangle(last[i], last[j], south);
    }
    b
}
