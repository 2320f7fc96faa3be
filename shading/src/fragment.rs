//! The fragment stage.
//!
//! Runs once per covered pixel: samples the `crate` and `face` textures at
//! the interpolated texture coordinate, blends them with the fixed mix
//! factor, and multiplies by the interpolated vertex color when the
//! configuration carries one.

use softpipe_core::math::{mix, Vec4};

use crate::sampler::Sampler2d;
use crate::varying::Varyings;

/// Fixed blend factor between the two texture samples.
///
/// The `crate` sample contributes `1 - MIX_FACTOR` (0.8) and the `face`
/// sample `MIX_FACTOR` (0.2).
pub const MIX_FACTOR: f32 = 0.2;

/// Run the fragment stage for one fragment.
///
/// Pure and stateless. The blend is `mix(crate, face, MIX_FACTOR)`; a
/// color varying, when present, scales the blended RGB componentwise
/// while alpha stays the blended texture alpha.
pub fn shade_fragment(
    crate_tex: &Sampler2d<'_>,
    face_tex: &Sampler2d<'_>,
    varyings: &Varyings,
) -> Vec4 {
    let base = crate_tex.sample(varyings.tex_coord);
    let overlay = face_tex.sample(varyings.tex_coord);
    let blended = mix(base, overlay, MIX_FACTOR);
    match varyings.color {
        Some(color) => Vec4::new(color.x, color.y, color.z, 1.0).component_mul(&blended),
        None => blended,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softpipe_core::math::{Vec2, Vec3};
    use softpipe_core::sampler::CpuSampler;
    use softpipe_core::texture::CpuTexture;

    fn assert_vec4_close(a: Vec4, b: Vec4) {
        assert!((a - b).norm() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn blend_weights_are_point_eight_point_two() {
        let red = CpuTexture::solid([1.0, 0.0, 0.0, 1.0]);
        let green = CpuTexture::solid([0.0, 1.0, 0.0, 1.0]);
        let sampler = CpuSampler::nearest();
        let out = shade_fragment(
            &Sampler2d::new(&red, &sampler),
            &Sampler2d::new(&green, &sampler),
            &Varyings::new(Vec2::new(0.5, 0.5)),
        );
        assert_vec4_close(out, Vec4::new(0.8, 0.2, 0.0, 1.0));
    }

    #[test]
    fn vertex_color_scales_rgb_and_keeps_blended_alpha() {
        let red = CpuTexture::solid([1.0, 0.0, 0.0, 1.0]);
        let green = CpuTexture::solid([0.0, 1.0, 0.0, 1.0]);
        let sampler = CpuSampler::nearest();
        let varyings =
            Varyings::new(Vec2::new(0.5, 0.5)).with_color(Vec3::new(0.5, 0.5, 0.5));
        let out = shade_fragment(
            &Sampler2d::new(&red, &sampler),
            &Sampler2d::new(&green, &sampler),
            &varyings,
        );
        assert_vec4_close(out, Vec4::new(0.4, 0.1, 0.0, 1.0));
    }

    #[test]
    fn no_color_outputs_raw_blend() {
        let a = CpuTexture::solid([0.6, 0.4, 0.2, 1.0]);
        let b = CpuTexture::solid([0.1, 0.9, 0.7, 0.5]);
        let sampler = CpuSampler::nearest();
        let out = shade_fragment(
            &Sampler2d::new(&a, &sampler),
            &Sampler2d::new(&b, &sampler),
            &Varyings::new(Vec2::zeros()),
        );
        let expected = mix(
            Vec4::new(0.6, 0.4, 0.2, 1.0),
            Vec4::new(0.1, 0.9, 0.7, 0.5),
            MIX_FACTOR,
        );
        assert_vec4_close(out, expected);
    }

    #[test]
    fn samples_at_the_interpolated_coordinate() {
        // crate: 4x1 strip, face: solid black with zero weight influence
        // checked by sampling two different coordinates.
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,   0, 255, 0, 255,
            0, 0, 255, 255,   255, 255, 255, 255,
        ];
        let strip =
            CpuTexture::new(4, 1, softpipe_core::texture::TextureFormat::Rgba8Unorm, data)
                .unwrap();
        let black = CpuTexture::solid([0.0, 0.0, 0.0, 1.0]);
        let sampler = CpuSampler::nearest();
        let crate_tex = Sampler2d::new(&strip, &sampler);
        let face_tex = Sampler2d::new(&black, &sampler);

        let at_red = shade_fragment(&crate_tex, &face_tex, &Varyings::new(Vec2::new(0.125, 0.5)));
        let at_blue = shade_fragment(&crate_tex, &face_tex, &Varyings::new(Vec2::new(0.625, 0.5)));
        assert_vec4_close(at_red, Vec4::new(0.8, 0.0, 0.0, 1.0));
        assert_vec4_close(at_blue, Vec4::new(0.0, 0.0, 0.8, 1.0));
    }
}
