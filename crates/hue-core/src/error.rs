//! Error types for hue-core operations.
//!
//! The [`Error`] enum covers the narrow failure surface of the grading core:
//! malformed buffers and the precondition that a modifier image must match
//! the base image's dimensions.
//!
//! Numeric degeneracies (gray pixels, zero-length color vectors) are never
//! errors; the engines handle them locally.
//!
//! # Usage
//!
//! ```rust
//! use hue_core::{Error, Result};
//!
//! fn check_pair(base: (u32, u32), modifier: (u32, u32)) -> Result<()> {
//!     if base != modifier {
//!         return Err(Error::dimension_mismatch(base, modifier));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_pair((4, 4), (4, 4)).is_ok());
//! assert!(check_pair((4, 4), (2, 2)).unwrap_err().is_invalid_input());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing images.
#[derive(Debug, Error)]
pub enum Error {
    /// Two images that must share a size do not.
    ///
    /// Raised when a modifier image is paired with a base image of a
    /// different size.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First image width
        a_width: u32,
        /// First image height
        a_height: u32,
        /// Second image width
        b_width: u32,
        /// Second image height
        b_height: u32,
    },

    /// Buffer length does not describe a `width x height` RGBA grid.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` for caller precondition violations (mismatched pairs).
    ///
    /// A malformed buffer is a decoding fault, not a caller precondition.
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_is_invalid_input() {
        let err = Error::dimension_mismatch((640, 480), (320, 240));
        let msg = err.to_string();
        assert!(msg.contains("640x480"));
        assert!(msg.contains("320x240"));
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(2, 2, "expected 16 bytes, got 3");
        assert!(err.to_string().contains("expected 16 bytes"));
        assert!(!err.is_invalid_input());
    }
}
