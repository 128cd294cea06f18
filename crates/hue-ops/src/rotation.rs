//! Color-space rotation engine.
//!
//! Each pixel's RGB maps to a signed vector centered on channel value 127,
//! is turned by one quaternion built from the three angle bytes, and maps
//! back. The rotated vector is rescaled to its original length before the
//! conversion, which removes the drift accumulated by the rotation; the
//! mid-gray origin (zero vector) passes through unchanged.

use hue_core::pixel::{A, rgb, with_alpha};
use hue_core::{RgbaImage, RotationParams};
use hue_math::{Quat, Vec3};
use tracing::{debug, trace};

use crate::render::map_opaque;

/// Builds the rotation for a set of angle bytes (`n * PI / 128` radians each).
pub fn rotation_quat(params: &RotationParams) -> Quat {
    let [roll, pitch, yaw] = params.radians();
    Quat::from_euler(roll, pitch, yaw)
}

/// Rotates one color, keeping the length of its signed vector.
///
/// # Example
///
/// ```rust
/// use hue_math::Quat;
/// use hue_ops::rotation::rotate_color;
///
/// assert_eq!(rotate_color(Quat::IDENTITY, [12, 200, 99]), [12, 200, 99]);
/// ```
#[inline]
pub fn rotate_color(q: Quat, rgb: [u8; 3]) -> [u8; 3] {
    let v = Vec3::from_color(rgb[0], rgb[1], rgb[2]);
    let length = v.length();
    q.rotate(v).with_length(length).to_color()
}

/// Rotates the colors of `base` by the three angle bytes.
pub fn apply_rotation(base: &RgbaImage, params: &RotationParams) -> RgbaImage {
    trace!(
        width = base.width(),
        height = base.height(),
        angles = ?params.0,
        "rotation::apply"
    );

    let q = rotation_quat(params);
    debug!(w = q.w, x = q.x, y = q.y, z = q.z, "rotation quaternion");

    map_opaque(base, |_, _, px| {
        with_alpha(rotate_color(q, rgb(px)), px[A])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn signed_length(rgb: [u8; 3]) -> f32 {
        Vec3::from_color(rgb[0], rgb[1], rgb[2]).length()
    }

    #[test]
    fn test_zero_angles_are_identity() {
        let base = RgbaImage::from_fn(16, 16, |x, y| [(x * 16) as u8, (y * 16) as u8, 77, 255]);
        let out = apply_rotation(&base, &RotationParams([0, 0, 0]));
        assert_eq!(out, base);
    }

    #[test]
    fn test_mid_gray_is_fixed_point() {
        for angles in [[10, 200, 33], [128, 128, 128], [255, 1, 64]] {
            let q = rotation_quat(&RotationParams(angles));
            assert_eq!(rotate_color(q, [127, 127, 127]), [127, 127, 127]);
        }
    }

    #[test]
    fn test_half_turn_about_blue_axis() {
        // yaw = 128 -> PI: red and green offsets flip sign
        let q = rotation_quat(&RotationParams([0, 0, 128]));
        assert_eq!(rotate_color(q, [191, 63, 150]), [63, 191, 150]);
    }

    #[test]
    fn test_length_preserved_inside_cube() {
        let q = rotation_quat(&RotationParams([37, 201, 90]));
        for rgb in [[100, 150, 130], [64, 64, 190], [180, 90, 127], [127, 127, 128]] {
            let out = rotate_color(q, rgb);
            assert_abs_diff_eq!(signed_length(out), signed_length(rgb), epsilon = 0.01);
        }
    }

    #[test]
    fn test_alpha_preserved_and_transparent_skipped() {
        let mut base = RgbaImage::filled(2, 2, [90, 140, 200, 128]);
        base.set_pixel(0, 1, [90, 140, 200, 0]);
        let out = apply_rotation(&base, &RotationParams([50, 60, 70]));
        assert_eq!(out.pixel(1, 1)[A], 128);
        assert_eq!(out.pixel(0, 1), [0, 0, 0, 0]);
    }
}
