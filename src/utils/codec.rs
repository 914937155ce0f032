//! Packed pixel codec
//!
//! Pixels are stored as `0xAARRGGBB`. Decoding ignores alpha; encoding
//! always produces an opaque value.

use crate::models::Pixel;

/// Alpha bits of a fully opaque packed pixel
pub const OPAQUE: u32 = 0xFF00_0000;
/// Mask selecting the red, green and blue bytes of a packed pixel
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Packed opaque black
pub const BLACK: u32 = OPAQUE;
/// Packed opaque white
pub const WHITE: u32 = OPAQUE | RGB_MASK;

/// Luminance weights applied to red, green and blue
const WEIGHT_R: f64 = 0.3;
const WEIGHT_G: f64 = 0.59;
const WEIGHT_B: f64 = 0.11;

/// Split a packed value into its color channels
#[inline]
pub fn decode(packed: u32) -> Pixel {
    Pixel::from_rgb8(
        ((packed >> 16) & 0xFF) as u8,
        ((packed >> 8) & 0xFF) as u8,
        (packed & 0xFF) as u8,
    )
}

/// Pack a pixel, forcing alpha to 0xFF
#[inline]
pub fn encode(pixel: Pixel) -> u32 {
    pack_rgb(pixel.red(), pixel.green(), pixel.blue())
}

/// Pack raw channel bytes, forcing alpha to 0xFF
#[inline]
pub fn pack_rgb(red: u8, green: u8, blue: u8) -> u32 {
    OPAQUE | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Weighted brightness `trunc(0.3*R + 0.59*G + 0.11*B)`
///
/// Evaluated in `f64`, left to right. An integer approximation would
/// disagree with this on roughly 0.2% of inputs, so the float form is kept.
#[inline]
pub fn luminance(pixel: Pixel) -> u8 {
    let y = pixel.red() as f64 * WEIGHT_R
        + pixel.green() as f64 * WEIGHT_G
        + pixel.blue() as f64 * WEIGHT_B;
    // Max is 255.0 for white, so the cast never saturates
    y as u8
}

/// Luminance of a packed value
#[inline]
pub fn packed_luminance(packed: u32) -> u8 {
    luminance(decode(packed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_alpha() {
        let p = decode(0x12_34_56_78);
        assert_eq!(p.channels(), [0x34, 0x56, 0x78]);
        assert_eq!(decode(0x00_34_56_78), p);
    }

    #[test]
    fn test_encode_forces_opaque() {
        let packed = encode(Pixel::from_rgb8(1, 2, 3));
        assert_eq!(packed, 0xFF_01_02_03);
        assert_eq!(encode(Pixel::BLACK), BLACK);
        assert_eq!(encode(Pixel::WHITE), WHITE);
    }

    #[test]
    fn test_round_trip_all_channel_values() {
        for v in 0..=255u8 {
            let p = Pixel::from_rgb8(v, 255 - v, v / 2);
            assert_eq!(decode(encode(p)), p);
        }
    }

    #[test]
    fn test_luminance_reference_values() {
        assert_eq!(luminance(Pixel::WHITE), 255);
        assert_eq!(luminance(Pixel::BLACK), 0);
        assert_eq!(luminance(Pixel::from_rgb8(255, 0, 0)), 76);
        assert_eq!(luminance(Pixel::from_rgb8(0, 255, 0)), 150);
        assert_eq!(luminance(Pixel::from_rgb8(0, 0, 255)), 28);
        // 127.99999999999999 in f64
        assert_eq!(luminance(Pixel::from_rgb8(128, 128, 128)), 127);
        assert_eq!(luminance(Pixel::from_rgb8(129, 128, 128)), 128);
        // (30*0 + 59*23 + 11*13) / 100 would give 15
        assert_eq!(luminance(Pixel::from_rgb8(0, 23, 13)), 14);
    }
}
