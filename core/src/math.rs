//! Math type aliases and helper functions.
//!
//! Provides f32 rendering types backed by `nalgebra` plus the matrix and
//! blend helpers used by the shading stages.

pub use nalgebra;

// ===== Rendering math (always f32) =====

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

// ===== Helper functions =====

/// Build a right-handed perspective projection with depth range [0, 1].
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Right-handed look-at view matrix.
pub fn look_at_rh(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(*eye);
    let target_point = nalgebra::Point3::from(*target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, up).to_homogeneous()
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Build a rotation matrix around an arbitrary axis.
///
/// The axis does not need to be normalized. `angle` is in radians.
pub fn mat4_from_axis_angle(axis: Vec3, angle: f32) -> Mat4 {
    let unit_axis = nalgebra::Unit::new_normalize(axis);
    nalgebra::Rotation3::from_axis_angle(&unit_axis, angle).to_homogeneous()
}

/// Linear interpolation between two vectors, GLSL `mix` semantics.
///
/// Returns `a * (1 - t) + b * t`. `t` is not clamped.
pub fn mix(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translation_matrix() {
        let t = Vec3::new(1.0, 2.0, 3.0);
        let m = mat4_from_translation(t);
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);
    }

    #[test]
    fn rotation_y_90() {
        let m = mat4_from_axis_angle(Vec3::new(0.0, 1.0, 0.0), FRAC_PI_2);
        let v = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((v.x - 0.0).abs() < 1e-5);
        assert!((v.z - (-1.0)).abs() < 1e-5);
        assert!((v.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn perspective_maps_near_plane_to_zero_depth() {
        let m = perspective_rh(FRAC_PI_2, 1.0, 0.1, 100.0);
        let p = m * Vec4::new(0.0, 0.0, -0.1, 1.0);
        assert!((p.z / p.w).abs() < 1e-5);
    }

    #[test]
    fn look_at_origin_down_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 3.0);
        let m = look_at_rh(&eye, &Vec3::zeros(), &Vec3::new(0.0, 1.0, 0.0));
        let p = m * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((p.z - (-3.0)).abs() < 1e-5);
    }

    #[test]
    fn mix_endpoints_and_midpoint() {
        let a = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let b = Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        let mid = mix(a, b, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-6);
        assert!((mid.y - 0.5).abs() < 1e-6);
    }
}
