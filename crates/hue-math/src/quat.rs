//! Rotation quaternion built from three Euler angles.
//!
//! Used by the rotation engine to turn the signed color cube. The
//! construction follows the usual half-angle product; roll turns about X
//! (red), pitch about Y (green), yaw about Z (blue).

use crate::Vec3;

/// A rotation quaternion `w + xi + yj + zk`.
///
/// [`Quat::from_euler`] yields a unit quaternion. [`Quat::rotate`] does not
/// renormalize; callers that need exact length preservation rescale the
/// result themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part
    pub w: f32,
    /// i component
    pub x: f32,
    /// j component
    pub y: f32,
    /// k component
    pub z: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Builds a unit quaternion from roll (X), pitch (Y) and yaw (Z), in radians.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hue_math::{Quat, Vec3};
    ///
    /// let q = Quat::from_euler(0.0, 0.0, std::f32::consts::FRAC_PI_2);
    /// let v = q.rotate(Vec3::X);
    /// assert!((v.y - 1.0).abs() < 1e-6);
    /// ```
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        let (sy, cy) = (yaw * 0.5).sin_cos();
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();

        Self {
            w: cy * cr * cp + sy * sr * sp,
            x: cy * sr * cp - sy * cr * sp,
            y: cy * cr * sp + sy * sr * cp,
            z: sy * cr * cp - cy * sr * sp,
        }
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Quaternion norm.
    #[inline]
    pub fn length(self) -> f32 {
        (self.w * self.w + self.vector().length_squared()).sqrt()
    }

    /// Rotates `v` with the sandwich product `q v q*`.
    ///
    /// Expanded form, with `u` the vector part:
    ///
    /// ```text
    /// v' = 2(u.v)u + (w^2 - |u|^2)v + 2w(u x v)
    /// ```
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let u = self.vector();
        let t1 = u * (u.dot(v) * 2.0);
        let t2 = v * (self.w * self.w - u.length_squared());
        let t3 = u.cross(v) * (self.w * 2.0);
        t1 + t2 + t3
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}
