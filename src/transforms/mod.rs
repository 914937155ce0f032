//! Pixel transforms
//!
//! Every transform comes as a pair of [`Raster`] methods: `to_*` mutates the
//! raster in place and `get_*` returns a transformed copy, leaving `self`
//! untouched. Both run the same algorithm core. Every output pixel is opaque.
//!
//! - Per-pixel: grayscale, negative, black-and-white
//! - 3x3 neighborhood: mean and median filters (interior pixels only)
//! - 2x2 blocks: halftone and ordered dithering

pub mod dithering;
pub(crate) mod engine;
pub mod halftone;
pub mod neighborhood;
pub mod point;

use crate::config::Execution;
use crate::models::Raster;
use std::fmt;
use std::str::FromStr;

/// Named transform, for callers that pick transforms at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Luminance gray
    Grayscale,
    /// Channel complement
    Negative,
    /// 3x3 box blur
    MeanFilter,
    /// 3x3 packed-value median
    MedianFilter,
    /// Fixed threshold at luminance 128
    BlackAndWhite,
    /// 2x2 black/white dot patterns
    Halftone,
    /// 2x2 per-channel ordered dithering
    Dithering,
}

impl Transform {
    /// Every transform, in declaration order
    pub const ALL: [Transform; 7] = [
        Transform::Grayscale,
        Transform::Negative,
        Transform::MeanFilter,
        Transform::MedianFilter,
        Transform::BlackAndWhite,
        Transform::Halftone,
        Transform::Dithering,
    ];

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Transform::Grayscale => "grayscale",
            Transform::Negative => "negative",
            Transform::MeanFilter => "mean",
            Transform::MedianFilter => "median",
            Transform::BlackAndWhite => "black-and-white",
            Transform::Halftone => "halftone",
            Transform::Dithering => "dithering",
        }
    }

    /// Apply in place with the default execution strategy
    pub fn apply(self, raster: &mut Raster) {
        self.apply_with(raster, Execution::Auto);
    }

    /// Apply in place with an explicit execution strategy
    pub fn apply_with(self, raster: &mut Raster, execution: Execution) {
        match self {
            Transform::Grayscale => point::grayscale(raster, execution),
            Transform::Negative => point::negative(raster, execution),
            Transform::MeanFilter => neighborhood::mean_filter(raster, execution),
            Transform::MedianFilter => neighborhood::median_filter(raster, execution),
            Transform::BlackAndWhite => point::black_and_white(raster, execution),
            Transform::Halftone => halftone::halftone(raster, execution),
            Transform::Dithering => dithering::dithering(raster, execution),
        }
    }

    /// Transformed copy of `raster`
    pub fn applied(self, raster: &Raster) -> Raster {
        self.applied_with(raster, Execution::Auto)
    }

    /// Transformed copy of `raster` with an explicit execution strategy
    pub fn applied_with(self, raster: &Raster, execution: Execution) -> Raster {
        let mut out = raster.clone();
        self.apply_with(&mut out, execution);
        out
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown transform name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transform '{0}'")]
pub struct UnknownTransform(pub String);

impl FromStr for Transform {
    type Err = UnknownTransform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Transform::Grayscale),
            "negative" | "invert" => Ok(Transform::Negative),
            "mean" | "blur" => Ok(Transform::MeanFilter),
            "median" => Ok(Transform::MedianFilter),
            "black-and-white" | "bw" | "threshold" => Ok(Transform::BlackAndWhite),
            "halftone" => Ok(Transform::Halftone),
            "dithering" | "dither" => Ok(Transform::Dithering),
            _ => Err(UnknownTransform(s.to_string())),
        }
    }
}

// `to_*` mutates, matching the `get_*` copy names
#[allow(clippy::wrong_self_convention)]
impl Raster {
    /// Convert to grayscale in place
    pub fn to_grayscale(&mut self) {
        Transform::Grayscale.apply(self);
    }

    /// Grayscale copy
    pub fn get_grayscale(&self) -> Raster {
        Transform::Grayscale.applied(self)
    }

    /// Invert every channel in place
    pub fn to_negative(&mut self) {
        Transform::Negative.apply(self);
    }

    /// Inverted copy
    pub fn get_negative(&self) -> Raster {
        Transform::Negative.applied(self)
    }

    /// 3x3 box blur in place (border pixels unchanged)
    pub fn to_mean_filter(&mut self) {
        Transform::MeanFilter.apply(self);
    }

    /// 3x3 box-blurred copy
    pub fn get_mean_filter(&self) -> Raster {
        Transform::MeanFilter.applied(self)
    }

    /// 3x3 median filter in place (border pixels unchanged)
    pub fn to_median_filter(&mut self) {
        Transform::MedianFilter.apply(self);
    }

    /// 3x3 median-filtered copy
    pub fn get_median_filter(&self) -> Raster {
        Transform::MedianFilter.applied(self)
    }

    /// Threshold to black and white in place
    pub fn to_black_and_white(&mut self) {
        Transform::BlackAndWhite.apply(self);
    }

    /// Black-and-white copy
    pub fn get_black_and_white(&self) -> Raster {
        Transform::BlackAndWhite.applied(self)
    }

    /// Halftone in place
    pub fn to_halftone(&mut self) {
        Transform::Halftone.apply(self);
    }

    /// Halftoned copy
    pub fn get_halftone(&self) -> Raster {
        Transform::Halftone.applied(self)
    }

    /// Ordered dithering in place
    pub fn to_dithering(&mut self) {
        Transform::Dithering.apply(self);
    }

    /// Dithered copy
    pub fn get_dithering(&self) -> Raster {
        Transform::Dithering.applied(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for t in Transform::ALL {
            assert_eq!(t.name().parse::<Transform>(), Ok(t));
            assert_eq!(t.to_string(), t.name());
        }
        assert_eq!(" Grey ".parse::<Transform>(), Ok(Transform::Grayscale));
        assert_eq!(
            "sepia".parse::<Transform>(),
            Err(UnknownTransform("sepia".to_string()))
        );
    }

    #[test]
    fn test_copy_keeps_name() {
        let raster = Raster::new(2, 2).unwrap().with_name("photo.png");
        assert_eq!(raster.get_negative().name(), "photo.png");
    }

    #[test]
    fn test_get_matches_to() {
        let pixels = (0..16u32).map(|i| i.wrapping_mul(0x0012_3457)).collect();
        let raster = Raster::from_pixels(4, 4, pixels).unwrap();
        for t in Transform::ALL {
            let mut in_place = raster.clone();
            t.apply(&mut in_place);
            assert_eq!(t.applied(&raster), in_place, "{}", t);
        }
    }
}
