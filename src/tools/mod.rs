//! In-memory interop with the `image` crate
//!
//! Decoding and encoding files stays with the caller; these helpers only
//! move pixels between `image` buffers and [`Raster`].

use crate::error::{RasterError, Result};
use crate::models::Raster;
use crate::utils::codec;
use image::{DynamicImage, GenericImageView, RgbaImage};
use tracing::debug;

/// Build a raster from an RGBA buffer. Source alpha is discarded.
pub fn raster_from_rgba(image: &RgbaImage) -> Result<Raster> {
    let (width, height) = image.dimensions();
    Raster::from_rgb_bytes(image.as_raw(), width as usize, height as usize, 4)
}

/// Build a raster from any decoded image
pub fn raster_from_dynamic(image: &DynamicImage) -> Result<Raster> {
    let (width, height) = image.dimensions();
    debug!(
        width,
        height,
        color = ?image.color(),
        "converting decoded image"
    );
    match image {
        DynamicImage::ImageRgb8(rgb) => {
            Raster::from_rgb_bytes(rgb.as_raw(), width as usize, height as usize, 3)
        }
        DynamicImage::ImageRgba8(rgba) => raster_from_rgba(rgba),
        other => raster_from_rgba(&other.to_rgba8()),
    }
}

/// Copy a raster into an opaque RGBA buffer
pub fn raster_to_rgba(raster: &Raster) -> Result<RgbaImage> {
    let overflow = || RasterError::InvalidDimensions {
        width: raster.width(),
        height: raster.height(),
    };
    let width = u32::try_from(raster.width()).map_err(|_| overflow())?;
    let height = u32::try_from(raster.height()).map_err(|_| overflow())?;
    RgbaImage::from_raw(width, height, raster.to_rgba_bytes()).ok_or_else(|| {
        RasterError::BufferSizeMismatch {
            expected: raster.width() * raster.height() * 4,
            actual: raster.as_pixels().len() * 4,
        }
    })
}

/// Wrap a raster as a `DynamicImage` ready for the caller's encoder
pub fn raster_to_dynamic(raster: &Raster) -> Result<DynamicImage> {
    raster_to_rgba(raster).map(DynamicImage::ImageRgba8)
}

/// Summary statistics for a raster's luminance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminanceStats {
    /// Darkest pixel
    pub min: u8,
    /// Brightest pixel
    pub max: u8,
    /// Mean luminance
    pub mean: f64,
}

/// Luminance range and mean, useful to sanity-check a transform's output
pub fn luminance_stats(raster: &Raster) -> LuminanceStats {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0u64;
    for &packed in raster.as_pixels() {
        let y = codec::packed_luminance(packed);
        min = min.min(y);
        max = max.max(y);
        sum += y as u64;
    }
    LuminanceStats {
        min,
        max,
        mean: sum as f64 / raster.as_pixels().len() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn test_rgba_round_trip() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        img.put_pixel(2, 1, Rgba([200, 100, 50, 255]));

        let raster = raster_from_rgba(&img).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.get_rgb(0, 0), Some(0xFF0A141E));
        assert_eq!(raster.get_rgb(2, 1), Some(0xFFC86432));

        let back = raster_to_rgba(&raster).unwrap();
        // Transparent black in the source becomes opaque black
        assert_eq!(back.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(back.get_pixel(2, 1), &Rgba([200, 100, 50, 255]));

        let negative = raster.get_negative();
        let dynamic = raster_to_dynamic(&negative).unwrap();
        assert_eq!(raster_from_dynamic(&dynamic).unwrap(), negative);
    }

    #[test]
    fn test_from_dynamic_rgb_and_luma() {
        let mut rgb = RgbImage::new(2, 2);
        rgb.put_pixel(1, 1, Rgb([1, 2, 3]));
        let raster = raster_from_dynamic(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(raster.get_rgb(1, 1), Some(0xFF010203));

        let luma = DynamicImage::new_luma8(4, 1);
        let raster = raster_from_dynamic(&luma).unwrap();
        assert_eq!(raster.width(), 4);
        assert!(raster.as_pixels().iter().all(|&p| p == codec::BLACK));
    }

    #[test]
    fn test_empty_image_rejected() {
        let empty = RgbaImage::new(0, 0);
        assert!(matches!(
            raster_from_rgba(&empty),
            Err(RasterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_luminance_stats() {
        let mut raster = Raster::new(2, 1).unwrap();
        raster.set_rgb(1, 0, codec::WHITE).unwrap();
        let stats = luminance_stats(&raster);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.max, 255);
        assert_eq!(stats.mean, 127.5);
    }
}
