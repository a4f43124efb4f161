/// Closed cylinder around +Y, centred at the origin.
use glam::Vec3;

use super::{clamp_extent, clamp_subdivisions, ring, segments, MIN_EXTENT};
use crate::geometry::MeshBuilder;

/// Per segment: one triangle on each cap and one wall quad (12 positions).
pub fn cylinder(radius: f32, height: f32, subdivisions: u32) -> MeshBuilder {
    let radius = clamp_extent("cylinder radius", radius, MIN_EXTENT);
    let height = clamp_extent("cylinder height", height, MIN_EXTENT);
    let n = clamp_subdivisions("cylinder subdivisions", subdivisions);

    let half = height * 0.5;
    let top_center = Vec3::new(0.0, half, 0.0);
    let bottom_center = Vec3::new(0.0, -half, 0.0);
    let top = ring(radius, half, n);
    let bottom = ring(radius, -half, n);

    let mut b = MeshBuilder::with_capacity(n * 12);
    for (i, j) in segments(n) {
        b.emit_triangle(top[j], top[i], top_center);
        b.emit_triangle(bottom[i], bottom[j], bottom_center);
        b.emit_quad(bottom[j], bottom[i], top[j], top[i]);
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::test_support::assert_outward;

    #[test]
    fn four_segments_make_48_positions() {
        let b = cylinder(1.0, 2.0, 4);
        assert_eq!(b.vertex_count(), 4 * 3 * 2 + 4 * 6);
    }

    #[test]
    fn subdivisions_are_clamped() {
        assert_eq!(cylinder(1.0, 1.0, 0), cylinder(1.0, 1.0, 3));
        assert_eq!(cylinder(1.0, 1.0, 5000), cylinder(1.0, 1.0, 360));
    }

    #[test]
    fn last_wall_quad_joins_last_and_first_points() {
        let n = 6;
        let b = cylinder(1.0, 2.0, n as u32);
        let top = ring(1.0, 1.0, n);
        let bottom = ring(1.0, -1.0, n);
        let tail = &b.positions()[b.vertex_count() - 6..];
        assert_eq!(
            tail,
            &[bottom[0], bottom[n - 1], top[0], top[0], bottom[n - 1], top[n - 1]]
        );
    }

    #[test]
    fn faces_point_outward() {
        assert_outward(&cylinder(0.5, 3.0, 24));
    }
}
