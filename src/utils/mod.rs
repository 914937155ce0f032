//! Utility functions for pixel handling
//!
//! This module provides the packed pixel codec:
//! - Decoding `0xAARRGGBB` into channels and encoding them back
//! - Luminance weighting shared by grayscale, black-and-white and halftone

pub mod codec;
