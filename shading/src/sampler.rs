//! Sampler execution.
//!
//! [`Sampler2d`] pairs a [`CpuTexture`] with a [`CpuSampler`] descriptor
//! and resolves texture reads: address-mode wrapping per axis, then
//! nearest or bilinear filtering. There is no mipmapping or LOD selection
//! at this scope, so the magnification filter applies to every read.

use softpipe_core::math::{Vec2, Vec4};
use softpipe_core::sampler::{AddressMode, CpuSampler, FilterMode};
use softpipe_core::texture::CpuTexture;

/// A texture bound together with its sampling configuration.
#[derive(Debug, Clone, Copy)]
pub struct Sampler2d<'a> {
    texture: &'a CpuTexture,
    sampler: &'a CpuSampler,
}

/// Map a normalized coordinate into [0, 1] per the address mode.
fn wrap_coord(c: f32, mode: AddressMode) -> f32 {
    match mode {
        AddressMode::Repeat => c - c.floor(),
        AddressMode::ClampToEdge => c.clamp(0.0, 1.0),
        AddressMode::MirrorRepeat => {
            let t = c.rem_euclid(2.0);
            if t > 1.0 {
                2.0 - t
            } else {
                t
            }
        }
    }
}

/// Map a texel index into [0, size) per the address mode.
fn wrap_texel(i: i64, size: i64, mode: AddressMode) -> u32 {
    let wrapped = match mode {
        AddressMode::Repeat => i.rem_euclid(size),
        AddressMode::ClampToEdge => i.clamp(0, size - 1),
        AddressMode::MirrorRepeat => {
            let m = i.rem_euclid(2 * size);
            if m >= size {
                2 * size - 1 - m
            } else {
                m
            }
        }
    };
    wrapped as u32
}

impl<'a> Sampler2d<'a> {
    /// Bind a texture and sampler together.
    pub fn new(texture: &'a CpuTexture, sampler: &'a CpuSampler) -> Self {
        Self { texture, sampler }
    }

    /// The bound texture.
    pub fn texture(&self) -> &CpuTexture {
        self.texture
    }

    /// Sample the texture at a normalized coordinate.
    ///
    /// Coordinates outside [0, 1] follow the sampler's address modes.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        match self.sampler.mag_filter {
            FilterMode::Nearest => self.sample_nearest(uv),
            FilterMode::Linear => self.sample_linear(uv),
        }
    }

    fn sample_nearest(&self, uv: Vec2) -> Vec4 {
        let w = self.texture.width() as i64;
        let h = self.texture.height() as i64;
        let u = wrap_coord(uv.x, self.sampler.address_mode_u);
        let v = wrap_coord(uv.y, self.sampler.address_mode_v);
        let x = wrap_texel(
            (u * w as f32).floor() as i64,
            w,
            self.sampler.address_mode_u,
        );
        let y = wrap_texel(
            (v * h as f32).floor() as i64,
            h,
            self.sampler.address_mode_v,
        );
        Vec4::from(self.texture.texel(x, y))
    }

    fn sample_linear(&self, uv: Vec2) -> Vec4 {
        let w = self.texture.width() as i64;
        let h = self.texture.height() as i64;
        // Texel centers sit at half-integer coordinates.
        let x = wrap_coord(uv.x, self.sampler.address_mode_u) * w as f32 - 0.5;
        let y = wrap_coord(uv.y, self.sampler.address_mode_v) * h as f32 - 0.5;
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;

        let mode_u = self.sampler.address_mode_u;
        let mode_v = self.sampler.address_mode_v;
        let x0i = wrap_texel(x0 as i64, w, mode_u);
        let x1i = wrap_texel(x0 as i64 + 1, w, mode_u);
        let y0i = wrap_texel(y0 as i64, h, mode_v);
        let y1i = wrap_texel(y0 as i64 + 1, h, mode_v);

        let t00 = Vec4::from(self.texture.texel(x0i, y0i));
        let t10 = Vec4::from(self.texture.texel(x1i, y0i));
        let t01 = Vec4::from(self.texture.texel(x0i, y1i));
        let t11 = Vec4::from(self.texture.texel(x1i, y1i));

        let top = t00 * (1.0 - fx) + t10 * fx;
        let bottom = t01 * (1.0 - fx) + t11 * fx;
        top * (1.0 - fy) + bottom * fy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softpipe_core::texture::TextureFormat;

    /// 4x1 texture with texels red, green, blue, white.
    fn strip() -> CpuTexture {
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,   0, 255, 0, 255,
            0, 0, 255, 255,   255, 255, 255, 255,
        ];
        CpuTexture::new(4, 1, TextureFormat::Rgba8Unorm, data).unwrap()
    }

    #[test]
    fn nearest_picks_texel_centers() {
        let tex = strip();
        let sampler = CpuSampler::nearest();
        let s = Sampler2d::new(&tex, &sampler);
        assert_eq!(s.sample(Vec2::new(0.125, 0.5)), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(s.sample(Vec2::new(0.375, 0.5)), Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(s.sample(Vec2::new(0.625, 0.5)), Vec4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(s.sample(Vec2::new(0.875, 0.5)), Vec4::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn repeat_wraps_past_one() {
        let tex = strip();
        let sampler = CpuSampler::nearest().with_address_mode(AddressMode::Repeat);
        let s = Sampler2d::new(&tex, &sampler);
        // 1.25 wraps to 0.25, the second texel.
        assert_eq!(s.sample(Vec2::new(1.25, 0.5)), s.sample(Vec2::new(0.25, 0.5)));
        assert_eq!(s.sample(Vec2::new(-0.75, 0.5)), s.sample(Vec2::new(0.25, 0.5)));
    }

    #[test]
    fn clamp_pins_to_edge_texels() {
        let tex = strip();
        let sampler = CpuSampler::nearest().with_address_mode(AddressMode::ClampToEdge);
        let s = Sampler2d::new(&tex, &sampler);
        assert_eq!(s.sample(Vec2::new(3.0, 0.5)), Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(s.sample(Vec2::new(-2.0, 0.5)), Vec4::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn mirror_reflects_past_one() {
        let tex = strip();
        let sampler = CpuSampler::nearest().with_address_mode(AddressMode::MirrorRepeat);
        let s = Sampler2d::new(&tex, &sampler);
        // 1.125 reflects to 0.875, the last texel.
        assert_eq!(
            s.sample(Vec2::new(1.125, 0.5)),
            s.sample(Vec2::new(0.875, 0.5))
        );
    }

    #[test]
    fn bilinear_midpoint_averages_neighbors() {
        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,   0, 255, 0, 255,
        ];
        let tex = CpuTexture::new(2, 1, TextureFormat::Rgba8Unorm, data).unwrap();
        let sampler = CpuSampler::linear().with_address_mode(AddressMode::ClampToEdge);
        let s = Sampler2d::new(&tex, &sampler);
        let mid = s.sample(Vec2::new(0.5, 0.5));
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert!((mid.y - 0.5).abs() < 1e-6);
        assert!((mid.z - 0.0).abs() < 1e-6);
        assert!((mid.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bilinear_at_texel_center_is_exact() {
        let tex = strip();
        let sampler = CpuSampler::linear().with_address_mode(AddressMode::ClampToEdge);
        let s = Sampler2d::new(&tex, &sampler);
        assert_eq!(s.sample(Vec2::new(0.375, 0.5)), Vec4::new(0.0, 1.0, 0.0, 1.0));
    }
}
