//! Ordered dithering over 2x2 blocks
//!
//! Unlike [`halftone`](super::halftone), every channel gets its own dot
//! pattern, so a block can come out in up to four saturated colors.

use super::engine::map_blocks;
use super::halftone::{LEVEL_12, LEVEL_37, LEVEL_62, LEVEL_87};
use crate::config::Execution;
use crate::models::Raster;
use crate::utils::codec::{BLACK, pack_rgb};
use tracing::instrument;

/// Lit positions for one channel average, as
/// `[top_left, top_right, bottom_left, bottom_right]`
pub fn channel_pattern(average: f64) -> [bool; 4] {
    if average > LEVEL_37 {
        [true, average > LEVEL_87, average > LEVEL_62, true]
    } else {
        [false, average > LEVEL_12, false, false]
    }
}

/// Per-channel averages `[red, green, blue]` of a block
pub fn block_averages(block: [u32; 4]) -> [f64; 3] {
    let mut sums = [0u32; 3];
    for packed in block {
        sums[0] += (packed >> 16) & 0xFF;
        sums[1] += (packed >> 8) & 0xFF;
        sums[2] += packed & 0xFF;
    }
    sums.map(|s| s as f64 / 4.0)
}

/// Replace a block with its per-channel dot pattern
pub fn dither_block(block: [u32; 4]) -> [u32; 4] {
    let [red, green, blue] = block_averages(block).map(channel_pattern);
    let level = |lit: bool| if lit { 255 } else { 0 };

    let mut out = [BLACK; 4];
    for (i, px) in out.iter_mut().enumerate() {
        *px = pack_rgb(level(red[i]), level(green[i]), level(blue[i]));
    }
    out
}

/// Ordered-dither every full 2x2 block
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn dithering(raster: &mut Raster, execution: Execution) {
    map_blocks(raster, execution, dither_block);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pixel;
    use crate::utils::codec::{WHITE, encode};

    #[test]
    fn test_channel_pattern_bands() {
        assert_eq!(channel_pattern(0.0), [false, false, false, false]);
        assert_eq!(channel_pattern(31.875), [false, false, false, false]);
        assert_eq!(channel_pattern(32.0), [false, true, false, false]);
        assert_eq!(channel_pattern(95.625), [false, true, false, false]);
        assert_eq!(channel_pattern(100.0), [true, false, false, true]);
        assert_eq!(channel_pattern(159.375), [true, false, false, true]);
        assert_eq!(channel_pattern(200.0), [true, false, true, true]);
        assert_eq!(channel_pattern(223.125), [true, false, true, true]);
        assert_eq!(channel_pattern(255.0), [true, true, true, true]);
    }

    #[test]
    fn test_uniform_200_block() {
        let block = [encode(Pixel::from_rgb8(200, 200, 200)); 4];
        assert_eq!(dither_block(block), [WHITE, BLACK, WHITE, WHITE]);
    }

    #[test]
    fn test_channels_dither_independently() {
        // red 255, green 100, blue 50
        let block = [encode(Pixel::from_rgb8(255, 100, 50)); 4];
        assert_eq!(
            dither_block(block),
            [0xFF_FF_FF_00, 0xFF_FF_00_FF, 0xFF_FF_00_00, 0xFF_FF_FF_00]
        );
    }

    #[test]
    fn test_block_averages() {
        let block = [0xFF_FF_00_00, 0xFF_00_00_00, 0xFF_00_00_00, 0xFF_00_00_01];
        assert_eq!(block_averages(block), [63.75, 0.0, 0.25]);
    }
}
