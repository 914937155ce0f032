//! Shared fixtures for integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raster_fx::{Pixel, Raster};

pub const IMG_WIDTH: usize = 50;
pub const IMG_HEIGHT: usize = 25;

/// Raster of uniformly random opaque pixels, reproducible from `seed`
pub fn random_raster(width: usize, height: usize, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut raster = Raster::new(width, height).expect("valid dimensions");
    for y in 0..height {
        for x in 0..width {
            let pixel = Pixel::from_rgb8(rng.random(), rng.random(), rng.random());
            raster.set_pixel(x, y, pixel).expect("in bounds");
        }
    }
    raster
}

/// Random raster with a random size between 1x1 and 40x40
pub fn random_sized_raster(seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
    let width = rng.random_range(1..=40);
    let height = rng.random_range(1..=40);
    random_raster(width, height, seed)
}
