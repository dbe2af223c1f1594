//! Error types for strata-core operations.
//!
//! Dimension violations are programming errors in the calling application and
//! are rejected at construction or attachment time, never papered over by
//! cropping or stretching. Everything else in the engine (invalid layer
//! indices, last-layer removal) is an expected condition signaled through
//! boolean/optional returns, not through this enum.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or combining pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer data length does not match the declared dimensions.
    ///
    /// Returned by `from_data` constructors when
    /// `data.len() != width * height * channels`.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// What disagreed with the dimensions
        reason: String,
    },

    /// Two buffers that must agree in size do not.
    ///
    /// Returned when attaching a mask whose dimensions differ from the
    /// owning layer's buffer.
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Required (width, height)
        expected: (u32, u32),
        /// Offered (width, height)
        actual: (u32, u32),
    },

    /// Pixel coordinates are outside buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] with a formatted reason.
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] from two (width, height) pairs.
    pub fn dimension_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        Self::DimensionMismatch { expected, actual }
    }
}
