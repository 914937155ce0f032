//! Per-pixel transforms: grayscale, negative and black-and-white

use super::engine::map_pixels;
use crate::config::Execution;
use crate::models::Raster;
use crate::utils::codec::{self, BLACK, WHITE, pack_rgb, packed_luminance};
use tracing::instrument;

/// Luminance at or above this value maps to white
pub const BLACK_AND_WHITE_THRESHOLD: u8 = 128;

/// Gray pixel with every channel set to the luminance of `packed`
#[inline]
pub fn grayscale_pixel(packed: u32) -> u32 {
    let y = packed_luminance(packed);
    pack_rgb(y, y, y)
}

/// Per-channel complement `255 - c`
#[inline]
pub fn negative_pixel(packed: u32) -> u32 {
    // Flipping the low 24 bits is 255 - c on each channel
    codec::OPAQUE | (!packed & codec::RGB_MASK)
}

/// Black when luminance is below 128, white otherwise
#[inline]
pub fn black_and_white_pixel(packed: u32) -> u32 {
    if packed_luminance(packed) < BLACK_AND_WHITE_THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

/// Convert every pixel to its gray level
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn grayscale(raster: &mut Raster, execution: Execution) {
    map_pixels(raster, execution, grayscale_pixel);
}

/// Invert every channel
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn negative(raster: &mut Raster, execution: Execution) {
    map_pixels(raster, execution, negative_pixel);
}

/// Threshold every pixel to pure black or pure white
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn black_and_white(raster: &mut Raster, execution: Execution) {
    map_pixels(raster, execution, black_and_white_pixel);
}
