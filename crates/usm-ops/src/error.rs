//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Images have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Image buffer construction failed.
    #[error(transparent)]
    Core(#[from] usm_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
