//! Transform selection and dispatch.
//!
//! A document shows exactly one transform at a time. [`Transform`] names it,
//! and [`apply_transform`] runs the matching engine against the document's
//! parameter sets.

use std::fmt;
use std::str::FromStr;

use hue_core::{GradeParams, RgbaImage};

use crate::{OpsError, OpsResult, apply_matrix, apply_negate, apply_pigments, apply_rotation};

/// One of the grading engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Channel-mixing matrix (uses the modifier image when present).
    Matrix,
    /// Quaternion color-space rotation.
    Rotation,
    /// Pigment tint and channel swap.
    Pigment,
    /// Two's-complement negation.
    Negate,
}

impl Transform {
    /// All transforms, in menu order.
    pub const ALL: [Transform; 4] = [
        Transform::Matrix,
        Transform::Rotation,
        Transform::Pigment,
        Transform::Negate,
    ];

    /// Lowercase name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Matrix => "matrix",
            Transform::Rotation => "rotation",
            Transform::Pigment => "pigment",
            Transform::Negate => "negate",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transform {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" | "mix" => Ok(Transform::Matrix),
            "rotation" | "rotate" | "angles" => Ok(Transform::Rotation),
            "pigment" | "pigments" => Ok(Transform::Pigment),
            "negate" | "invert" => Ok(Transform::Negate),
            other => Err(OpsError::InvalidParameter(format!(
                "unknown transform '{}', expected one of matrix, rotation, pigment, negate",
                other
            ))),
        }
    }
}

/// Runs `transform` on `base` with the matching parameter set from `params`.
///
/// # Errors
///
/// Only the matrix transform can fail, on a modifier size mismatch.
pub fn apply_transform(
    transform: Transform,
    base: &RgbaImage,
    modifier: Option<&RgbaImage>,
    params: &GradeParams,
) -> OpsResult<RgbaImage> {
    match transform {
        Transform::Matrix => apply_matrix(base, modifier, &params.matrix),
        Transform::Rotation => Ok(apply_rotation(base, &params.angles)),
        Transform::Pigment => Ok(apply_pigments(base, &params.pigments)),
        Transform::Negate => Ok(apply_negate(base)),
    }
}
