use crate::error::{RasterError, Result};
use crate::models::Pixel;
use crate::utils::codec::{self, BLACK};
use tracing::warn;

const DEFAULT_NAME: &str = "Modifiable Image";

/// Owned 2D grid of packed `0xAARRGGBB` pixels, stored row-major
///
/// Width and height are always positive and the buffer always holds exactly
/// `width * height` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    name: String,
}

impl Raster {
    /// Create an opaque black raster
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create a raster where every pixel is `pixel`
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![codec::encode(pixel); len],
            name: DEFAULT_NAME.to_string(),
        })
    }

    /// Wrap an existing packed buffer
    ///
    /// Alpha bits are forced to 0xFF, so every stored pixel is opaque.
    pub fn from_pixels(width: usize, height: usize, mut pixels: Vec<u32>) -> Result<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            warn!(
                expected = len,
                actual = pixels.len(),
                "pixel buffer size mismatch"
            );
            return Err(RasterError::BufferSizeMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }
        pixels.iter_mut().for_each(|p| *p |= codec::OPAQUE);
        Ok(Self {
            width,
            height,
            pixels,
            name: DEFAULT_NAME.to_string(),
        })
    }

    /// Build a raster from interleaved 8-bit samples
    ///
    /// `channels` must be 3 (RGB) or 4 (RGBA, alpha discarded).
    pub fn from_rgb_bytes(
        bytes: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self> {
        if channels != 3 && channels != 4 {
            warn!(channels, "unsupported interleaved layout");
            return Err(RasterError::InvalidPixelFormat(format!(
                "{} channels per pixel (expected 3 or 4)",
                channels
            )));
        }
        let expected = checked_len(width, height)?
            .checked_mul(channels)
            .ok_or(RasterError::InvalidDimensions { width, height })?;
        if bytes.len() != expected {
            warn!(expected, actual = bytes.len(), "byte buffer size mismatch");
            return Err(RasterError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(channels)
            .map(|px| codec::pack_rgb(px[0], px[1], px[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Get raster width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get raster height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Display name of the raster
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the raster
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Builder-style rename
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    /// Packed value at (x, y), or `None` outside the raster
    pub fn get_rgb(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Store a packed value at (x, y), forcing alpha to 0xFF
    pub fn set_rgb(&mut self, x: usize, y: usize, packed: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels[y * self.width + x] = packed | codec::OPAQUE;
        Ok(())
    }

    /// Decoded pixel at (x, y)
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        self.get_rgb(x, y).map(codec::decode)
    }

    /// Store an opaque pixel at (x, y)
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<()> {
        self.set_rgb(x, y, codec::encode(pixel))
    }

    /// Packed buffer, row-major
    pub fn as_pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable packed buffer, row-major. Writers keep alpha at 0xFF.
    pub(crate) fn as_pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Consume the raster and return its packed buffer
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Interleaved RGBA bytes
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &packed in &self.pixels {
            let [a, r, g, b] = packed.to_be_bytes();
            out.extend_from_slice(&[r, g, b, a]);
        }
        out
    }

    /// True when every stored pixel has alpha 0xFF
    pub fn is_opaque(&self) -> bool {
        self.pixels
            .iter()
            .all(|&p| p & codec::OPAQUE == codec::OPAQUE)
    }
}

impl Default for Raster {
    /// 1x1 black raster
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![BLACK],
            name: DEFAULT_NAME.to_string(),
        }
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize> {
    match width.checked_mul(height) {
        Some(len) if len > 0 => Ok(len),
        _ => {
            warn!(width, height, "rejected raster dimensions");
            Err(RasterError::InvalidDimensions { width, height })
        }
    }
}
