//! # hue-ops
//!
//! Pixel-wise color grading engines for interactive photo editing.
//!
//! Every engine reads a base [`RgbaImage`](hue_core::RgbaImage) and returns a
//! freshly allocated image of the same size. Pixels with alpha 0 are skipped
//! and stay `[0, 0, 0, 0]` in the output; alpha of the others is kept.
//!
//! # Modules
//!
//! - [`matrix`] - 3x5 channel-mixing matrix over base RGB and modifier RG
//! - [`rotation`] - quaternion rotation of the signed RGB cube
//! - [`pigment`] - six-parameter tint with channel swapping
//! - [`negate`] - two's-complement negation
//! - [`transform`] - transform selection and dispatch
//! - [`session`] - one open document with snapshot/revert
//! - [`render`] - the shared per-pixel pass
//!
//! # Example
//!
//! ```rust
//! use hue_core::{RgbaImage, RotationParams};
//! use hue_ops::apply_rotation;
//!
//! let base = RgbaImage::filled(8, 8, [200, 120, 40, 255]);
//! let out = apply_rotation(&base, &RotationParams([0, 0, 0]));
//! assert_eq!(out, base);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - shade rows on the rayon thread pool

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod matrix;
pub mod negate;
pub mod pigment;
pub mod render;
pub mod rotation;
pub mod session;
pub mod transform;

pub use error::{OpsError, OpsResult};
pub use matrix::{MixMatrix, apply_matrix};
pub use negate::apply_negate;
pub use pigment::{PigmentTint, apply_pigments};
pub use rotation::apply_rotation;
pub use session::{Session, Snapshot};
pub use transform::{Transform, apply_transform};
