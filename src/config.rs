//! Execution settings
//!
//! Environment knobs are read once per process:
//! - `RASTER_FX_PARALLEL` (0/1, default 1): allow multi-threaded execution
//! - `RASTER_FX_PARALLEL_MIN_PIXELS` (default 65536): smallest raster the
//!   automatic strategy will split across threads

use std::sync::OnceLock;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_ENABLED: OnceLock<bool> = OnceLock::new();

pub(crate) fn parallel_enabled() -> bool {
    *PARALLEL_ENABLED.get_or_init(|| parse_env_bool_u8("RASTER_FX_PARALLEL", true))
}

static PARALLEL_MIN_PIXELS: OnceLock<usize> = OnceLock::new();

pub(crate) fn parallel_min_pixels() -> usize {
    *PARALLEL_MIN_PIXELS
        .get_or_init(|| parse_env_usize("RASTER_FX_PARALLEL_MIN_PIXELS", 256 * 256))
}

/// How a transform distributes its work
///
/// Every strategy produces bit-identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Parallel for large rasters when the environment allows it
    #[default]
    Auto,
    /// Single-threaded
    Sequential,
    /// Rows (or row pairs) spread over the rayon pool
    Parallel,
}

impl Execution {
    /// Decide whether a raster of `pixel_count` pixels runs in parallel
    pub fn is_parallel(self, pixel_count: usize) -> bool {
        match self {
            Execution::Sequential => false,
            Execution::Parallel => true,
            Execution::Auto => {
                auto_parallel(pixel_count, parallel_enabled(), parallel_min_pixels())
            }
        }
    }
}

fn auto_parallel(pixel_count: usize, enabled: bool, min_pixels: usize) -> bool {
    enabled && pixel_count >= min_pixels
}
