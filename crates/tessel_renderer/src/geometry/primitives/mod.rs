//! Parametric shape generators.
//!
//! Every generator clamps its parameters, then returns a [`MeshBuilder`]
//! holding positions only; colors are added when the mesh is completed.
//! Ring-based shapes sample `n` evenly spaced angles around +Y and stitch
//! segment `i` to `(i + 1) % n`, so the last segment closes the loop.

mod cone;
mod cube;
mod cylinder;
mod sphere;
mod torus;
mod tube;

pub use cone::cone;
pub use cube::{cube, cuboid};
pub use cylinder::cylinder;
pub use sphere::sphere;
pub use torus::torus;
pub use tube::tube;

use std::f32::consts::TAU;

use glam::Vec3;

/// Smallest radius, size or height a generator accepts.
pub const MIN_EXTENT: f32 = 0.01;
/// Smallest inner radius for tubes and tori.
pub const MIN_INNER_RADIUS: f32 = 0.005;
/// Fewest ring points; fewer cannot close a loop.
pub const MIN_SUBDIVISIONS: u32 = 3;
/// Most ring points.
pub const MAX_SUBDIVISIONS: u32 = 360;
/// Sphere subdivisions grow the triangle count quadratically.
pub const MAX_SPHERE_SUBDIVISIONS: u32 = 6;

/// Raises `value` to `min`. NaN also maps to `min`.
pub(crate) fn clamp_extent(what: &str, value: f32, min: f32) -> f32 {
    if value >= min {
        value
    } else {
        log::warn!("{what} {value} is below {min}; clamped");
        min
    }
}

/// Clamps a subdivision count into `[lo, hi]`.
pub(crate) fn clamp_count(what: &str, value: u32, lo: u32, hi: u32) -> usize {
    let clamped = value.clamp(lo, hi);
    if clamped != value {
        log::warn!("{what} {value} is outside [{lo}, {hi}]; clamped to {clamped}");
    }
    clamped as usize
}

#[inline]
pub(crate) fn clamp_subdivisions(what: &str, value: u32) -> usize {
    clamp_count(what, value, MIN_SUBDIVISIONS, MAX_SUBDIVISIONS)
}

/// Clamps an outer/inner radius pair and swaps them when inner exceeds outer.
/// Returns `(outer, inner)`.
pub(crate) fn clamp_radii(shape: &str, outer: f32, inner: f32) -> (f32, f32) {
    let outer = clamp_extent(&format!("{shape} outer radius"), outer, MIN_EXTENT);
    let inner = clamp_extent(&format!("{shape} inner radius"), inner, MIN_INNER_RADIUS);
    if inner > outer {
        log::warn!("{shape} inner radius {inner} exceeds outer radius {outer}; swapped");
        (inner, outer)
    } else {
        (outer, inner)
    }
}

/// Unit direction in the XZ plane for ring point `i` of `n`.
#[inline]
pub(crate) fn ring_direction(i: usize, n: usize) -> Vec3 {
    let theta = TAU * i as f32 / n as f32;
    Vec3::new(theta.cos(), 0.0, theta.sin())
}

/// `n` points on a circle of `radius` around +Y at height `y`.
pub(crate) fn ring(radius: f32, y: f32, n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| ring_direction(i, n) * radius + Vec3::Y * y)
        .collect()
}

/// Segment index pairs `(i, (i + 1) % n)` for a ring of `n` points.
#[inline]
pub(crate) fn segments(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).map(move |i| (i, (i + 1) % n))
}

#[cfg(test)]
pub(crate) mod test_support {
    use glam::Vec3;

    use crate::geometry::MeshBuilder;

    /// Geometric normal of a triangle (not normalized).
    pub fn face_normal([a, b, c]: [Vec3; 3]) -> Vec3 {
        (b - a).cross(c - a)
    }

    /// Asserts every non-degenerate triangle faces away from the origin.
    pub fn assert_outward(b: &MeshBuilder) {
        for tri in b.triangles() {
            let n = face_normal(tri);
            if n.length_squared() < 1e-12 {
                continue;
            }
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(
                n.dot(centroid) > 0.0,
                "triangle {tri:?} faces inward (normal {n:?})"
            );
        }
    }
}
