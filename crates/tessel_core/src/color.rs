//! Linear RGBA colour used for mesh fill colours, wireframe highlights and
//! clear values.
//!
//! Vertex colours travel as RGB only; alpha is kept on the value type so the
//! same `Color` can also describe a render-target clear.
//!
//! # Example
//! ```rust,ignore
//! use tessel_core::Color;
//!
//! let fill = Color::rgb(0.2, 0.6, 1.0);
//! let rgb: glam::Vec3 = fill.to_vec3(); // what the vertex stream stores
//! ```

use glam::Vec3;

/// Linear-space RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    // ── Constructors ────────────────────────────────────────────────────────

    /// Opaque colour from red, green, blue components.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Colour from all four components.
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from an RGB vector, as stored per vertex.
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::rgb(v.x, v.y, v.z)
    }

    // ── Conversions ─────────────────────────────────────────────────────────

    /// Returns `[r, g, b]` (alpha discarded).
    #[inline]
    pub fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns the RGB part as a vector (alpha discarded).
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Convert to a `wgpu::Color` for use as a clear value.
    #[cfg(feature = "gpu")]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }

    // ── Palette ─────────────────────────────────────────────────────────────

    pub const WHITE:   Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK:   Self = Self::rgb(0.0, 0.0, 0.0);

    pub const RED:     Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN:   Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE:    Self = Self::rgb(0.0, 0.0, 1.0);

    pub const YELLOW:  Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN:    Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);

    pub const GRAY:    Self = Self::rgb(0.5, 0.5, 0.5);
    pub const NAVY:    Self = Self::rgb(0.0, 0.0, 0.5);
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self::from_vec3(v)
    }
}

impl From<Color> for Vec3 {
    fn from(c: Color) -> Self {
        c.to_vec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_conversion_drops_alpha() {
        let c = Color::rgba(0.25, 0.5, 0.75, 0.1);
        assert_eq!(c.to_vec3(), Vec3::new(0.25, 0.5, 0.75));
        assert_eq!(Color::from(c.to_vec3()).a, 1.0);
    }

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default().to_rgb_array(), [1.0, 1.0, 1.0]);
    }
}
