//! Error types for raster construction and pixel access

use thiserror::Error;

/// Color channel of a [`Pixel`](crate::Pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Red channel (bits 16-23 of a packed pixel)
    Red,
    /// Green channel (bits 8-15 of a packed pixel)
    Green,
    /// Blue channel (bits 0-7 of a packed pixel)
    Blue,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Errors produced while building pixels and rasters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// A channel value outside [0, 255]
    #[error("invalid {channel} channel value {value} (expected 0..=255)")]
    InvalidChannelValue {
        /// Channel that was rejected
        channel: Channel,
        /// Offending value
        value: i32,
    },

    /// Width or height is zero
    #[error("invalid raster dimensions {width}x{height} (both must be positive)")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// Raw input uses a pixel layout the engine does not understand
    #[error("unsupported pixel format: {0}")]
    InvalidPixelFormat(String),

    /// Buffer length disagrees with the raster dimensions
    #[error("buffer holds {actual} elements, expected {expected}")]
    BufferSizeMismatch {
        /// Element count implied by the dimensions
        expected: usize,
        /// Element count actually supplied
        actual: usize,
    },

    /// Coordinate outside the raster
    #[error("pixel ({x}, {y}) is outside a {width}x{height} raster")]
    OutOfBounds {
        /// Column
        x: usize,
        /// Row
        y: usize,
        /// Raster width
        width: usize,
        /// Raster height
        height: usize,
    },
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RasterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RasterError::InvalidChannelValue {
            channel: Channel::Green,
            value: 300,
        };
        assert_eq!(
            err.to_string(),
            "invalid green channel value 300 (expected 0..=255)"
        );

        let err = RasterError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert!(err.to_string().contains("0x4"));
    }
}
