//! Halftone rendering over 2x2 blocks
//!
//! Each block is reduced to its mean luminance and replaced by one of five
//! black/white dot patterns.

use super::engine::map_blocks;
use crate::config::Execution;
use crate::models::Raster;
use crate::utils::codec::{BLACK, WHITE, packed_luminance};
use tracing::instrument;

/// Band breakpoints at 12.5%, 37.5%, 62.5% and 87.5% of full scale
pub(crate) const LEVEL_12: f64 = 255.0 * 0.125;
pub(crate) const LEVEL_37: f64 = 255.0 * 0.375;
pub(crate) const LEVEL_62: f64 = 255.0 * 0.625;
pub(crate) const LEVEL_87: f64 = 255.0 * 0.875;

/// Share of white pixels in a halftone block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// All black
    Empty,
    /// Top-right white
    Quarter,
    /// Top-left and bottom-right white
    Half,
    /// All white except top-right
    ThreeQuarters,
    /// All white
    Full,
}

impl Coverage {
    /// Band for a mean luminance. A level exactly on a breakpoint falls
    /// into the lower band.
    pub fn from_level(level: f64) -> Self {
        if level > LEVEL_87 {
            Coverage::Full
        } else if level > LEVEL_62 {
            Coverage::ThreeQuarters
        } else if level > LEVEL_37 {
            Coverage::Half
        } else if level > LEVEL_12 {
            Coverage::Quarter
        } else {
            Coverage::Empty
        }
    }

    /// White flags as `[top_left, top_right, bottom_left, bottom_right]`
    pub fn mask(self) -> [bool; 4] {
        match self {
            Coverage::Full => [true, true, true, true],
            Coverage::ThreeQuarters => [true, false, true, true],
            Coverage::Half => [true, false, false, true],
            Coverage::Quarter => [false, true, false, false],
            Coverage::Empty => [false, false, false, false],
        }
    }
}

/// Mean luminance of a block
pub fn block_level(block: [u32; 4]) -> f64 {
    let sum: u32 = block.iter().map(|&p| packed_luminance(p) as u32).sum();
    sum as f64 / 4.0
}

/// Replace a block with its dot pattern
pub fn halftone_block(block: [u32; 4]) -> [u32; 4] {
    Coverage::from_level(block_level(block))
        .mask()
        .map(|white| if white { WHITE } else { BLACK })
}

/// Render the raster as black/white dot patterns
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn halftone(raster: &mut Raster, execution: Execution) {
    map_blocks(raster, execution, halftone_block);
}
