//! Host-side triangle soup.
//!
//! A [`MeshBuilder`] keeps two parallel sequences: positions (three per
//! triangle, in render order) and colors. Nothing is shared between
//! triangles, so every corner is its own entry.

use std::iter;

use glam::Vec3;

use super::Vertex;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuilder {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `vertices` positions.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    // ── Raw appends ─────────────────────────────────────────────────────────

    #[inline]
    pub fn add_vertex_position(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    #[inline]
    pub fn add_vertex_color(&mut self, color: Vec3) {
        self.colors.push(color);
    }

    // ── Primitive assembly ──────────────────────────────────────────────────

    /// Appends one triangle with winding `a → b → c`.
    ///
    /// ```text
    /// c
    /// | \
    /// a--b
    /// ```
    pub fn emit_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        self.positions.extend_from_slice(&[a, b, c]);
    }

    /// Appends a quad as the triangles `(bl, br, tl)` and `(tl, br, tr)`.
    ///
    /// Corner roles are relative to the face as seen from its front side;
    /// passing them in another order flips the winding.
    ///
    /// ```text
    /// tl--tr
    /// |  / |
    /// bl--br
    /// ```
    pub fn emit_quad(&mut self, bl: Vec3, br: Vec3, tl: Vec3, tr: Vec3) {
        self.positions.extend_from_slice(&[bl, br, tl, tl, br, tr]);
    }

    // ── Completion ──────────────────────────────────────────────────────────

    /// Pads the color sequence with `fill` until every position has a color.
    /// Colors added explicitly beforehand are kept.
    pub fn complete(&mut self, fill: Vec3) {
        let missing = self.positions.len().saturating_sub(self.colors.len());
        self.colors.extend(iter::repeat(fill).take(missing));
    }

    /// Builds the interleaved record stream. Positions without a color (the
    /// builder was never completed) come out black.
    pub fn interleave(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(self.colors.iter().copied().chain(iter::repeat(Vec3::ZERO)))
            .map(|(&position, color)| Vertex::new(position, color))
            .collect()
    }

    /// Drops all host data.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Iterates complete triangles; a trailing partial triangle is ignored.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BL: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    const BR: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const TL: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    const TR: Vec3 = Vec3::new(1.0, 1.0, 0.0);

    #[test]
    fn triangle_keeps_argument_order() {
        let mut b = MeshBuilder::new();
        b.emit_triangle(BR, TL, BL);
        assert_eq!(b.positions(), &[BR, TL, BL]);
    }

    #[test]
    fn quad_splits_along_the_diagonal() {
        let mut b = MeshBuilder::new();
        b.emit_quad(BL, BR, TL, TR);
        let tris: Vec<_> = b.triangles().collect();
        assert_eq!(tris, vec![[BL, BR, TL], [TL, BR, TR]]);
    }

    #[test]
    fn quad_order_ignores_magnitudes() {
        let (bl, br, tl, tr) = (BL * 1e6, BR * -3.0, TL * 1e-6, TR);
        let mut b = MeshBuilder::new();
        b.emit_quad(bl, br, tl, tr);
        assert_eq!(b.positions(), &[bl, br, tl, tl, br, tr]);
    }

    #[test]
    fn complete_pads_only_missing_colors() {
        let mut b = MeshBuilder::new();
        b.emit_triangle(BL, BR, TL);
        b.add_vertex_color(Vec3::X);
        b.complete(Vec3::Y);
        assert_eq!(b.colors(), &[Vec3::X, Vec3::Y, Vec3::Y]);

        // already complete: nothing changes
        b.complete(Vec3::Z);
        assert_eq!(b.colors().len(), 3);
    }

    #[test]
    fn interleave_pairs_position_with_color() {
        let mut b = MeshBuilder::new();
        b.emit_triangle(BL, BR, TL);
        b.complete(Vec3::new(0.2, 0.4, 0.6));
        let v = b.interleave();
        assert_eq!(v.len(), 3);
        assert_eq!(v[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(v[1].color, [0.2, 0.4, 0.6]);
    }

    #[test]
    fn interleave_without_colors_is_black() {
        let mut b = MeshBuilder::new();
        b.emit_triangle(BL, BR, TL);
        assert!(b.interleave().iter().all(|v| v.color == [0.0; 3]));
    }

    #[test]
    fn degenerate_input_is_accepted() {
        let mut b = MeshBuilder::new();
        b.emit_quad(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);
        assert_eq!(b.vertex_count(), 6);
    }
}
