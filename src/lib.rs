//! raster_fx - deterministic pixel transforms for in-memory rasters
//!
//! Grayscale, negative, 3x3 mean and median filters, black-and-white
//! thresholding, halftone and ordered dithering over a packed 32-bit ARGB
//! [`Raster`]. File decoding, encoding and display are left to the caller.
//!
//! # Example
//! ```
//! use raster_fx::{Pixel, Raster, Transform};
//!
//! let mut raster = Raster::filled(4, 4, Pixel::from_rgb8(200, 200, 200)).unwrap();
//! let gray = raster.get_grayscale();
//! assert_eq!(gray.pixel(0, 0), Some(Pixel::from_rgb8(200, 200, 200)));
//!
//! "dither".parse::<Transform>().unwrap().apply(&mut raster);
//! assert_eq!(raster.pixel(1, 0), Some(Pixel::BLACK));
//! assert_eq!(raster.pixel(0, 1), Some(Pixel::WHITE));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Execution strategy and environment settings
pub mod config;
/// Error types
pub mod error;
/// Core data structures (Raster, Pixel)
pub mod models;
/// Conversion to and from `image` crate buffers
pub mod tools;
/// Grayscale, negative, filters, black-and-white, halftone and dithering
pub mod transforms;
/// Packed pixel codec and luminance
pub mod utils;

pub use config::Execution;
pub use error::{Channel, RasterError, Result};
pub use models::{Pixel, Raster};
pub use transforms::{Transform, UnknownTransform};
pub use utils::codec::{decode, encode, luminance};

/// Apply a sequence of transforms in place, in order
///
/// # Example
/// ```
/// use raster_fx::{Raster, Transform, apply_all};
///
/// let mut raster = Raster::new(2, 2).unwrap();
/// apply_all(&mut raster, &[Transform::Negative, Transform::BlackAndWhite]);
/// assert!(raster.as_pixels().iter().all(|&p| p == 0xFFFF_FFFF));
/// ```
pub fn apply_all(raster: &mut Raster, transforms: &[Transform]) {
    for transform in transforms {
        transform.apply(raster);
    }
}

/// Copy of `raster` with a sequence of transforms applied
pub fn apply_all_copied(raster: &Raster, transforms: &[Transform]) -> Raster {
    let mut out = raster.clone();
    apply_all(&mut out, transforms);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_all_empty_is_identity() {
        let raster = Raster::filled(3, 3, Pixel::from_rgb8(1, 2, 3)).unwrap();
        assert_eq!(apply_all_copied(&raster, &[]), raster);
    }

    #[test]
    fn test_apply_all_runs_in_order() {
        let raster = Raster::filled(2, 2, Pixel::from_rgb8(30, 30, 30)).unwrap();
        // grayscale must see the inverted value
        let out = apply_all_copied(&raster, &[Transform::Negative, Transform::Grayscale]);
        assert_eq!(out.pixel(0, 0), Some(Pixel::from_rgb8(225, 225, 225)));
        let out = apply_all_copied(
            &raster,
            &[Transform::BlackAndWhite, Transform::Negative],
        );
        assert_eq!(out.pixel(1, 1), Some(Pixel::WHITE));
    }
}
