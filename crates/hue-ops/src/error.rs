//! Error types for grading operations.

use thiserror::Error;

/// Error type for grading operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Images have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A render was requested but no base image is loaded.
    #[error("no base image loaded")]
    NoImage,

    /// Error raised by hue-core.
    #[error(transparent)]
    Core(#[from] hue_core::Error),
}

impl OpsError {
    /// Returns `true` for caller precondition violations.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::SizeMismatch(_) | Self::NoImage => true,
            Self::Core(e) => e.is_invalid_input(),
            Self::InvalidParameter(_) => false,
        }
    }
}

/// Result type for grading operations.
pub type OpsResult<T> = Result<T, OpsError>;
