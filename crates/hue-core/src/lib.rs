//! # hue-core
//!
//! Core types shared by every hue-rs crate.
//!
//! - [`RgbaImage`] - row-major 8-bit RGBA grid with copy-on-write storage
//! - [`pixel`] - `[u8; 4]` pixel helpers and the truncating clamp
//! - [`MatrixParams`], [`RotationParams`], [`PigmentParams`] - byte
//!   parameter sets for the three grading transforms
//! - [`Error`] - the core error type
//!
//! ## Crate Structure
//!
//! ```text
//! hue-core (this crate)
//!    ^
//!    |
//!    +-- hue-math (signed color vectors, quaternions)
//!    +-- hue-ops  (grading engines, session)
//!    +-- hue-io   (PNG / JPEG)
//!    +-- hue-cli
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize the parameter sets (used for presets)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod params;
pub mod pixel;

pub use error::{Error, Result};
pub use image::RgbaImage;
pub use params::{
    GradeParams, MATRIX_COLS, MATRIX_ROWS, MATRIX_SIZE, MatrixParams, PIGMENT_NEUTRAL,
    PigmentParams, RotationParams,
};
pub use pixel::Rgba8;

/// Prelude module for convenient imports.
///
/// ```
/// use hue_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::RgbaImage;
    pub use crate::params::{GradeParams, MatrixParams, PigmentParams, RotationParams};
    pub use crate::pixel::Rgba8;
}
