use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raster_fx::{Raster, Result};

pub fn noise_raster(width: usize, height: usize) -> Result<Raster> {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let pixels = (0..width * height)
        .map(|_| 0xFF00_0000 | (rng.random::<u32>() & 0x00FF_FFFF))
        .collect();
    Raster::from_pixels(width, height, pixels)
}
