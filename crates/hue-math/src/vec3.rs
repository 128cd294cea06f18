//! 3D vector type for signed color vectors.
//!
//! A byte color maps into the signed cube with `(c - 127) / 128`, which puts
//! channel value 127 at the origin, 0 at `-0.9921875` and 255 at `1.0`.
//! [`Vec3::to_color`] maps back with rounding and clamping.
//!
//! # Usage
//!
//! ```rust
//! use hue_math::Vec3;
//!
//! let v = Vec3::from_color(255, 127, 0);
//! assert_eq!(v, Vec3::new(1.0, 0.0, -127.0 / 128.0));
//! assert_eq!(v.to_color(), [255, 127, 0]);
//! ```

use std::ops::{Add, Index, Mul, Neg, Sub};

/// Color channel value that maps to 0 in the signed cube.
pub const COLOR_ORIGIN: f32 = 127.0;

/// Scale between byte steps and signed-cube units.
pub const COLOR_SCALE: f32 = 128.0;

/// A single-precision 3D vector.
///
/// Used for signed color vectors (x=R, y=G, z=B) and for the vector part
/// of a [`Quat`](crate::Quat).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component (R)
    pub x: f32,
    /// Y component (G)
    pub y: f32,
    /// Z component (B)
    pub z: f32,
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Maps byte channels into the signed cube: `(c - 127) / 128`.
    #[inline]
    pub fn from_color(red: u8, green: u8, blue: u8) -> Self {
        Self::new(to_signed(red), to_signed(green), to_signed(blue))
    }

    /// Maps back to byte channels: `clamp(0, 255, round(v * 128 + 127))`.
    ///
    /// Lossy where the vector leaves the cube; exact inverse of
    /// [`from_color`](Self::from_color) inside it.
    #[inline]
    pub fn to_color(self) -> [u8; 3] {
        [to_channel(self.x), to_channel(self.y), to_channel(self.z)]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt).
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Scales the vector to unit length.
    ///
    /// The zero vector is returned unchanged.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.x / len, self.y / len, self.z / len)
        } else {
            self
        }
    }

    /// Rescales the vector to `length`, keeping its direction.
    ///
    /// The zero vector stays zero.
    #[inline]
    pub fn with_length(self, length: f32) -> Self {
        self.normalize() * length
    }

    /// Converts to glam Vec3.
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x, self.y, self.z)
    }

    /// Creates from glam Vec3.
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[inline]
fn to_signed(c: u8) -> f32 {
    (c as f32 - COLOR_ORIGIN) / COLOR_SCALE
}

#[inline]
fn to_channel(v: f32) -> u8 {
    (v * COLOR_SCALE + COLOR_ORIGIN).round().clamp(0.0, 255.0) as u8
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vec3 index out of bounds: {}", i),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::from_glam(v)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> glam::Vec3 {
        v.to_glam()
    }
}
