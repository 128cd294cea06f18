//! # hue-math
//!
//! Small value types for the rotation engine:
//!
//! - [`Vec3`] - 3D single-precision vector, including the byte color
//!   mapping to and from the signed `[-1, 1]` cube
//! - [`Quat`] - unit quaternion built from roll/pitch/yaw, with `rotate`
//!
//! # Usage
//!
//! ```rust
//! use hue_math::{Quat, Vec3};
//!
//! let q = Quat::from_euler(0.0, 0.0, std::f32::consts::FRAC_PI_2);
//! let v = Vec3::from_color(255, 127, 127);
//! let rotated = q.rotate(v);
//! assert!((rotated.length() - v.length()).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop for hosts already using glam types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod quat;
mod vec3;

pub use quat::*;
pub use vec3::*;
