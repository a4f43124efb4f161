/// Ring torus lying in the XZ plane.
///
/// `subdivisions_a` anchors trace the central circle (radius halfway between
/// the inner and outer radius). Each anchor carries a cross-section ring of
/// `subdivisions_b` points, oriented in the anchor's own frame: the radial
/// direction away from the axis and +Y. Section points are stored anchor by
/// anchor, so point `j` of anchor `i` lives at `i * subdivisions_b + j`.
use glam::Vec3;

use super::{clamp_radii, clamp_subdivisions, ring_direction, segments};
use crate::geometry::MeshBuilder;

pub fn torus(
    outer_radius: f32,
    inner_radius: f32,
    subdivisions_a: u32,
    subdivisions_b: u32,
) -> MeshBuilder {
    let (outer_radius, inner_radius) = clamp_radii("torus", outer_radius, inner_radius);
    let n = clamp_subdivisions("torus subdivisions_a", subdivisions_a);
    let m = clamp_subdivisions("torus subdivisions_b", subdivisions_b);

    let section_radius = (outer_radius - inner_radius) * 0.5;
    let center_radius = inner_radius + section_radius;

    let mut sections = Vec::with_capacity(n * m);
    for i in 0..n {
        let radial = ring_direction(i, n);
        let anchor = radial * center_radius;
        for j in 0..m {
            let phi = std::f32::consts::TAU * j as f32 / m as f32;
            sections.push(anchor + (radial * phi.cos() + Vec3::Y * phi.sin()) * section_radius);
        }
    }
    let at = |i: usize, j: usize| sections[i * m + j];

    let mut b = MeshBuilder::with_capacity(n * m * 6);
    for (i, ni) in segments(n) {
        for (j, nj) in segments(m) {
            b.emit_quad(at(ni, j), at(i, j), at(ni, nj), at(i, nj));
        }
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::primitives::test_support::face_normal;

    /// Closest point on the central circle of radius `center_radius`.
    fn spine_point(p: Vec3, center_radius: f32) -> Vec3 {
        Vec3::new(p.x, 0.0, p.z).normalize_or_zero() * center_radius
    }

    #[test]
    fn six_positions_per_cell() {
        assert_eq!(torus(2.0, 1.0, 8, 5).vertex_count(), 8 * 5 * 6);
    }

    #[test]
    fn uneven_subdivisions_stay_in_bounds() {
        // a stride mix-up between the two counts would index past the end
        assert_eq!(torus(2.0, 1.0, 3, 40).vertex_count(), 3 * 40 * 6);
        assert_eq!(torus(2.0, 1.0, 40, 3).vertex_count(), 40 * 3 * 6);
    }

    #[test]
    fn points_lie_on_the_tube_surface() {
        let b = torus(3.0, 1.0, 12, 9);
        for p in b.positions() {
            let d = (*p - spine_point(*p, 2.0)).length();
            assert!((d - 1.0).abs() < 1e-4, "{p:?} is {d} from the spine");
        }
    }

    #[test]
    fn faces_point_away_from_the_spine() {
        let b = torus(3.0, 1.0, 16, 12);
        for tri in b.triangles() {
            let c = (tri[0] + tri[1] + tri[2]) / 3.0;
            let out = c - spine_point(c, 2.0);
            assert!(face_normal(tri).dot(out) > 0.0, "{tri:?}");
        }
    }

    #[test]
    fn inverted_radii_are_swapped() {
        assert_eq!(torus(1.0, 3.0, 8, 8), torus(3.0, 1.0, 8, 8));
    }

    #[test]
    fn subdivisions_are_clamped_independently() {
        assert_eq!(torus(2.0, 1.0, 1, 1000), torus(2.0, 1.0, 3, 360));
    }

    /// Section point `j` of anchor `i`, computed the way the generator does.
    fn section_point(i: usize, j: usize, n: usize, m: usize) -> Vec3 {
        // outer 3, inner 1: section radius 1, centre radius 2
        let radial = ring_direction(i, n);
        let phi = std::f32::consts::TAU * j as f32 / m as f32;
        radial * 2.0 + (radial * phi.cos() + Vec3::Y * phi.sin()) * 1.0
    }

    #[test]
    fn both_rings_close() {
        let (n, m) = (5, 4);
        let b = torus(3.0, 1.0, n as u32, m as u32);
        let at = |i, j| section_point(i, j, n, m);

        // last cross-section cell of the first anchor wraps j back to 0
        let first_anchor_tail = &b.positions()[(m - 1) * 6..m * 6];
        assert_eq!(
            first_anchor_tail,
            &[at(1, m - 1), at(0, m - 1), at(1, 0), at(1, 0), at(0, m - 1), at(0, 0)]
        );

        // last cell overall also wraps the anchor index back to 0
        let tail = &b.positions()[b.vertex_count() - 6..];
        assert_eq!(
            tail,
            &[at(0, m - 1), at(n - 1, m - 1), at(0, 0), at(0, 0), at(n - 1, m - 1), at(n - 1, 0)]
        );
    }
}
