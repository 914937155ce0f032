//! Iteration drivers shared by the transforms
//!
//! Each driver owns the traversal and the sequential/parallel split; the
//! transforms only supply the per-pixel, per-window or per-block function.
//! Parallel work is split by rows (or row pairs), which never overlap, so
//! both strategies write identical output.

use crate::config::Execution;
use crate::models::Raster;
use rayon::prelude::*;
use tracing::debug;

/// Replace every pixel with `f(pixel)`
pub(crate) fn map_pixels<F>(raster: &mut Raster, execution: Execution, f: F)
where
    F: Fn(u32) -> u32 + Sync,
{
    let width = raster.width();
    let parallel = execution.is_parallel(raster.as_pixels().len());
    debug!(parallel, "per-pixel pass");

    let pixels = raster.as_pixels_mut();
    if parallel {
        pixels
            .par_chunks_mut(width)
            .for_each(|row| row.iter_mut().for_each(|p| *p = f(*p)));
    } else {
        pixels.iter_mut().for_each(|p| *p = f(*p));
    }
}

/// Replace every interior pixel with `f(window)` over its 3x3 neighborhood
///
/// The window is read from a snapshot taken before any write, in row-major
/// order (top-left first, centre at index 4). Border pixels are untouched;
/// rasters narrower or shorter than 3 pixels have no interior.
pub(crate) fn map_interior<F>(raster: &mut Raster, execution: Execution, f: F)
where
    F: Fn(&[u32; 9]) -> u32 + Sync,
{
    let width = raster.width();
    let height = raster.height();
    if width < 3 || height < 3 {
        debug!("no interior pixels");
        return;
    }
    let parallel = execution.is_parallel(width * height);
    debug!(parallel, "3x3 neighborhood pass");

    let snapshot = raster.as_pixels().to_vec();
    let filter_row = |y: usize, row: &mut [u32]| {
        let above = &snapshot[(y - 1) * width..y * width];
        let here = &snapshot[y * width..(y + 1) * width];
        let below = &snapshot[(y + 1) * width..(y + 2) * width];
        for x in 1..width - 1 {
            let window = [
                above[x - 1],
                above[x],
                above[x + 1],
                here[x - 1],
                here[x],
                here[x + 1],
                below[x - 1],
                below[x],
                below[x + 1],
            ];
            row[x] = f(&window);
        }
    };

    let interior = &mut raster.as_pixels_mut()[width..(height - 1) * width];
    if parallel {
        interior
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(i, row)| filter_row(i + 1, row));
    } else {
        interior
            .chunks_mut(width)
            .enumerate()
            .for_each(|(i, row)| filter_row(i + 1, row));
    }
}

/// Replace every full 2x2 block with `f(block)`
///
/// Blocks start at even coordinates and are passed and returned as
/// `[top_left, top_right, bottom_left, bottom_right]`. A trailing odd
/// column or row is left untouched.
pub(crate) fn map_blocks<F>(raster: &mut Raster, execution: Execution, f: F)
where
    F: Fn([u32; 4]) -> [u32; 4] + Sync,
{
    let width = raster.width();
    let parallel = execution.is_parallel(raster.as_pixels().len());
    debug!(parallel, "2x2 block pass");

    let process = |pair: &mut [u32]| {
        let (top, bottom) = pair.split_at_mut(width);
        for x in (0..width.saturating_sub(1)).step_by(2) {
            let [tl, tr, bl, br] = f([top[x], top[x + 1], bottom[x], bottom[x + 1]]);
            top[x] = tl;
            top[x + 1] = tr;
            bottom[x] = bl;
            bottom[x + 1] = br;
        }
    };

    let pixels = raster.as_pixels_mut();
    if parallel {
        pixels.par_chunks_exact_mut(2 * width).for_each(process);
    } else {
        pixels.chunks_exact_mut(2 * width).for_each(process);
    }
}
