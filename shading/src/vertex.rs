//! The vertex stage.
//!
//! Runs once per vertex: transforms the object-space position to clip
//! space under the active [`TransformMode`] and passes the texture
//! coordinate (and color, when the configuration has one) through to the
//! varying block unchanged.

use softpipe_core::math::{Vec2, Vec3, Vec4};

use crate::transform::TransformMode;
use crate::varying::Varyings;

/// Per-vertex inputs, immutable within an invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexInput {
    /// Object-space position (location 0).
    pub position: Vec3,
    /// Per-vertex color, when the configuration carries one.
    pub color: Option<Vec3>,
    /// Texture coordinate.
    pub tex_coord: Vec2,
}

impl VertexInput {
    /// Create a vertex input without a color attribute.
    pub fn new(position: Vec3, tex_coord: Vec2) -> Self {
        Self {
            position,
            color: None,
            tex_coord,
        }
    }

    /// Set the color attribute.
    #[must_use]
    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = Some(color);
        self
    }
}

/// The vertex stage's outputs: a clip-space position plus varyings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexOutput {
    /// Clip-space position.
    pub clip_position: Vec4,
    /// Varyings handed to the rasterizer for interpolation.
    pub varyings: Varyings,
}

/// Run the vertex stage for one vertex.
///
/// Pure and stateless; invocations are independent and may run in any
/// order or concurrently.
pub fn shade_vertex(mode: &TransformMode, input: &VertexInput) -> VertexOutput {
    let mut varyings = Varyings::new(input.tex_coord);
    if let Some(color) = input.color {
        varyings = varyings.with_color(color);
    }
    VertexOutput {
        clip_position: mode.clip_position(input.position),
        varyings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softpipe_core::math::mat4_from_translation;

    #[test]
    fn tex_coord_passes_through_unchanged() {
        let mode = TransformMode::single(mat4_from_translation(Vec3::new(5.0, -1.0, 2.0)));
        for uv in [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.25, 0.75),
            Vec2::new(2.5, -0.5),
        ] {
            let out = shade_vertex(&mode, &VertexInput::new(Vec3::zeros(), uv));
            assert_eq!(out.varyings.tex_coord, uv);
        }
    }

    #[test]
    fn color_passes_through_when_present() {
        let input =
            VertexInput::new(Vec3::zeros(), Vec2::zeros()).with_color(Vec3::new(0.1, 0.2, 0.3));
        let out = shade_vertex(&TransformMode::Identity, &input);
        assert_eq!(out.varyings.color, Some(Vec3::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn no_color_varying_without_color_attribute() {
        let out = shade_vertex(
            &TransformMode::Identity,
            &VertexInput::new(Vec3::new(1.0, 2.0, 3.0), Vec2::zeros()),
        );
        assert!(out.varyings.color.is_none());
    }

    #[test]
    fn identity_clip_position() {
        let p = Vec3::new(0.5, -0.5, 0.25);
        let out = shade_vertex(&TransformMode::Identity, &VertexInput::new(p, Vec2::zeros()));
        assert_eq!(out.clip_position, Vec4::new(0.5, -0.5, 0.25, 1.0));
    }
}
