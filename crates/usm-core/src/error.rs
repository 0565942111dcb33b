//! Error types for core image buffer operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match the stated dimensions.
    #[error("invalid dimensions for {width}x{height} image: {reason}")]
    InvalidDimensions {
        /// Image width.
        width: u32,
        /// Image height.
        height: u32,
        /// What was wrong with the buffer.
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] with the given reason.
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_contains_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 48 bytes, got 12");
        let msg = err.to_string();
        assert!(msg.contains("4x4"));
        assert!(msg.contains("48"));
    }
}
