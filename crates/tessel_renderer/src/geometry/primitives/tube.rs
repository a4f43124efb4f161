/// Hollow tube: outer and inner walls joined by annulus strips at both ends.
use glam::Vec3;

use super::{clamp_extent, clamp_radii, clamp_subdivisions, ring, segments, MIN_EXTENT};
use crate::geometry::MeshBuilder;

/// Per segment: outer wall, inner wall, bottom strip, top strip (24 positions).
pub fn tube(outer_radius: f32, inner_radius: f32, height: f32, subdivisions: u32) -> MeshBuilder {
    let (outer_radius, inner_radius) = clamp_radii("tube", outer_radius, inner_radius);
    let height = clamp_extent("tube height", height, MIN_EXTENT);
    let n = clamp_subdivisions("tube subdivisions", subdivisions);

    let half = height * 0.5;
    let outer_top = ring(outer_radius, half, n);
    let outer_bottom = ring(outer_radius, -half, n);
    let inner_top = ring(inner_radius, half, n);
    let inner_bottom = ring(inner_radius, -half, n);

    let mut b = MeshBuilder::with_capacity(n * 24);
    for (i, j) in segments(n) {
        b.emit_quad(outer_bottom[j], outer_bottom[i], outer_top[j], outer_top[i]);
        b.emit_quad(inner_bottom[i], inner_bottom[j], inner_top[i], inner_top[j]);
        b.emit_quad(outer_bottom[i], outer_bottom[j], inner_bottom[i], inner_bottom[j]);
        b.emit_quad(outer_top[j], outer_top[i], inner_top[j], inner_top[i]);
    }
    b
}

/// Radial distance of `p` from the Y axis.
#[cfg(test)]
fn axis_distance(p: Vec3) -> f32 {
    Vec3::new(p.x, 0.0, p.z).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::test_support::face_normal;

    #[test]
    fn twenty_four_positions_per_segment() {
        assert_eq!(tube(1.0, 0.5, 1.0, 10).vertex_count(), 240);
    }

    #[test]
    fn inverted_radii_are_swapped() {
        assert_eq!(tube(0.5, 1.0, 1.0, 8), tube(1.0, 0.5, 1.0, 8));
    }

    #[test]
    fn inner_radius_has_its_own_minimum() {
        assert_eq!(tube(1.0, 0.0, 1.0, 8), tube(1.0, 0.005, 1.0, 8));
    }

    #[test]
    fn walls_face_away_from_the_material() {
        let b = tube(2.0, 1.0, 1.0, 12);
        for tri in b.triangles() {
            let n = face_normal(tri);
            let c = (tri[0] + tri[1] + tri[2]) / 3.0;
            let r = axis_distance(c);
            if n.y.abs() > 1e-4 {
                // annulus strips: top faces up, bottom faces down
                assert_eq!(n.y > 0.0, c.y > 0.0, "strip {tri:?}");
            } else if r > 1.5 {
                assert!(n.dot(Vec3::new(c.x, 0.0, c.z)) > 0.0, "outer wall {tri:?}");
            } else {
                assert!(n.dot(Vec3::new(c.x, 0.0, c.z)) < 0.0, "inner wall {tri:?}");
            }
        }
    }

    #[test]
    fn no_disk_caps() {
        // every vertex sits on one of the two rings, never on the axis
        let b = tube(2.0, 1.0, 1.0, 6);
        for p in b.positions() {
            let r = axis_distance(*p);
            assert!((r - 2.0).abs() < 1e-4 || (r - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn last_segment_closes_both_walls() {
        let n = 5;
        let b = tube(2.0, 1.0, 1.0, n as u32);
        let (ob, ot) = (ring(2.0, -0.5, n), ring(2.0, 0.5, n));
        let (ib, it) = (ring(1.0, -0.5, n), ring(1.0, 0.5, n));
        let tail = &b.positions()[b.vertex_count() - 24..];
        assert_eq!(&tail[..6], &[ob[0], ob[n - 1], ot[0], ot[0], ob[n - 1], ot[n - 1]]);
        assert_eq!(&tail[6..12], &[ib[n - 1], ib[0], it[n - 1], it[n - 1], ib[0], it[0]]);
        assert_eq!(&tail[12..18], &[ob[n - 1], ob[0], ib[n - 1], ib[n - 1], ob[0], ib[0]]);
        assert_eq!(&tail[18..], &[ot[0], ot[n - 1], it[0], it[0], ot[n - 1], it[n - 1]]);
    }
}
