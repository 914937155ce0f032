//! 3x3 low-pass filters
//!
//! Both filters only write interior pixels and read from a snapshot of the
//! input, see [`map_interior`].

use super::engine::map_interior;
use crate::config::Execution;
use crate::models::Raster;
use crate::utils::codec::{OPAQUE, RGB_MASK, pack_rgb};
use tracing::instrument;

/// Per-channel mean of a 3x3 window, truncated
pub fn mean_of(window: &[u32; 9]) -> u32 {
    let mut sums = [0u32; 3];
    for &packed in window {
        sums[0] += (packed >> 16) & 0xFF;
        sums[1] += (packed >> 8) & 0xFF;
        sums[2] += packed & 0xFF;
    }
    pack_rgb(
        (sums[0] / 9) as u8,
        (sums[1] / 9) as u8,
        (sums[2] / 9) as u8,
    )
}

/// Median of a 3x3 window compared as packed `0xRRGGBB` integers
///
/// The packed value orders by red first, so the result is always one of
/// the nine input colors rather than a per-channel median.
pub fn median_of(window: &[u32; 9]) -> u32 {
    let mut values = window.map(|p| p & RGB_MASK);
    values.sort_unstable();
    OPAQUE | values[4]
}

/// Box blur over each interior pixel's 3x3 neighborhood
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn mean_filter(raster: &mut Raster, execution: Execution) {
    map_interior(raster, execution, mean_of);
}

/// Median of each interior pixel's 3x3 neighborhood
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn median_filter(raster: &mut Raster, execution: Execution) {
    map_interior(raster, execution, median_of);
}
