/// Axis-aligned boxes centred at the origin: six quads, 36 positions.
use glam::Vec3;

use super::{clamp_extent, MIN_EXTENT};
use crate::geometry::MeshBuilder;

/// Cube with edge length `size` (minimum 0.01).
pub fn cube(size: f32) -> MeshBuilder {
    let size = clamp_extent("cube size", size, MIN_EXTENT);
    box_faces(Vec3::splat(size * 0.5))
}

/// Box with per-axis edge lengths `dimensions` (each minimum 0.01).
pub fn cuboid(dimensions: Vec3) -> MeshBuilder {
    let dimensions = Vec3::new(
        clamp_extent("cuboid width", dimensions.x, MIN_EXTENT),
        clamp_extent("cuboid height", dimensions.y, MIN_EXTENT),
        clamp_extent("cuboid depth", dimensions.z, MIN_EXTENT),
    );
    box_faces(dimensions * 0.5)
}

fn box_faces(half: Vec3) -> MeshBuilder {
    let Vec3 { x, y, z } = half;

    // front (z+) corners, then back (z-)
    // 3--2
    // |  |
    // 0--1
    let p0 = Vec3::new(-x, -y, z);
    let p1 = Vec3::new(x, -y, z);
    let p2 = Vec3::new(x, y, z);
    let p3 = Vec3::new(-x, y, z);

    let p4 = Vec3::new(-x, -y, -z);
    let p5 = Vec3::new(x, -y, -z);
    let p6 = Vec3::new(x, y, -z);
    let p7 = Vec3::new(-x, y, -z);

    let mut b = MeshBuilder::with_capacity(36);
    b.emit_quad(p0, p1, p3, p2); // front
    b.emit_quad(p5, p4, p6, p7); // back
    b.emit_quad(p4, p0, p7, p3); // left
    b.emit_quad(p1, p5, p2, p6); // right
    b.emit_quad(p3, p2, p7, p6); // up
    b.emit_quad(p4, p5, p0, p1); // down
    b
}
