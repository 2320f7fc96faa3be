//! The vertex-to-fragment varying block.
//!
//! Varyings are produced per-vertex and linearly interpolated across a
//! primitive by the external fixed-function rasterizer before the fragment
//! stage reads them. The interpolation helpers here model that step for
//! hosts and tests; the rasterizer itself is outside this crate.

use softpipe_core::math::{Vec2, Vec3};

/// Values passed from the vertex stage to the fragment stage.
///
/// `color` is present exactly when the vertex configuration carries a
/// per-vertex color attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Varyings {
    /// Interpolated vertex color, if the configuration has one.
    pub color: Option<Vec3>,
    /// Interpolated texture coordinate.
    pub tex_coord: Vec2,
}

impl Varyings {
    /// Create a varying block with a texture coordinate and no color.
    pub fn new(tex_coord: Vec2) -> Self {
        Self {
            color: None,
            tex_coord,
        }
    }

    /// Set the color component.
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }

    /// Linearly interpolate between two varying blocks.
    ///
    /// Color interpolates only when present on both inputs; otherwise the
    /// result carries no color.
    pub fn lerp(a: &Varyings, b: &Varyings, t: f32) -> Varyings {
        let color = match (a.color, b.color) {
            (Some(ca), Some(cb)) => Some(ca * (1.0 - t) + cb * t),
            _ => None,
        };
        Varyings {
            color,
            tex_coord: a.tex_coord * (1.0 - t) + b.tex_coord * t,
        }
    }

    /// Interpolate three varying blocks with barycentric weights.
    ///
    /// `weights` are the barycentric coordinates of the fragment within
    /// the triangle `(a, b, c)`; they are expected to sum to 1. Color
    /// interpolates only when present on all three inputs.
    pub fn barycentric(a: &Varyings, b: &Varyings, c: &Varyings, weights: [f32; 3]) -> Varyings {
        let [wa, wb, wc] = weights;
        let color = match (a.color, b.color, c.color) {
            (Some(ca), Some(cb), Some(cc)) => Some(ca * wa + cb * wb + cc * wc),
            _ => None,
        };
        Varyings {
            color,
            tex_coord: a.tex_coord * wa + b.tex_coord * wb + c.tex_coord * wc,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_tex_coord() {
        let a = Varyings::new(Vec2::new(0.0, 0.0));
        let b = Varyings::new(Vec2::new(1.0, 0.5));
        let mid = Varyings::lerp(&a, &b, 0.5);
        assert!((mid.tex_coord.x - 0.5).abs() < 1e-6);
        assert!((mid.tex_coord.y - 0.25).abs() < 1e-6);
        assert!(mid.color.is_none());
    }

    #[test]
    fn lerp_color_when_present_on_both() {
        let a = Varyings::new(Vec2::zeros()).with_color(Vec3::new(1.0, 0.0, 0.0));
        let b = Varyings::new(Vec2::zeros()).with_color(Vec3::new(0.0, 1.0, 0.0));
        let mid = Varyings::lerp(&a, &b, 0.5);
        let c = mid.color.unwrap();
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn lerp_drops_color_on_mismatch() {
        let a = Varyings::new(Vec2::zeros()).with_color(Vec3::new(1.0, 0.0, 0.0));
        let b = Varyings::new(Vec2::zeros());
        assert!(Varyings::lerp(&a, &b, 0.5).color.is_none());
    }

    #[test]
    fn barycentric_centroid() {
        let a = Varyings::new(Vec2::new(0.0, 0.0)).with_color(Vec3::new(1.0, 0.0, 0.0));
        let b = Varyings::new(Vec2::new(1.0, 0.0)).with_color(Vec3::new(0.0, 1.0, 0.0));
        let c = Varyings::new(Vec2::new(0.5, 1.0)).with_color(Vec3::new(0.0, 0.0, 1.0));
        let third = 1.0 / 3.0;
        let center = Varyings::barycentric(&a, &b, &c, [third, third, third]);
        assert!((center.tex_coord.x - 0.5).abs() < 1e-6);
        assert!((center.tex_coord.y - third).abs() < 1e-6);
        let color = center.color.unwrap();
        assert!((color.x - third).abs() < 1e-6);
        assert!((color.y - third).abs() < 1e-6);
        assert!((color.z - third).abs() < 1e-6);
    }

    #[test]
    fn barycentric_vertex_weight_recovers_vertex() {
        let a = Varyings::new(Vec2::new(0.2, 0.8));
        let b = Varyings::new(Vec2::new(1.0, 0.0));
        let c = Varyings::new(Vec2::new(0.0, 1.0));
        let at_a = Varyings::barycentric(&a, &b, &c, [1.0, 0.0, 0.0]);
        assert_eq!(at_a.tex_coord, a.tex_coord);
    }
}
