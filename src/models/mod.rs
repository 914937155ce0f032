/// Checked RGB pixel value type
pub mod pixel;
/// Owned packed-pixel raster
pub mod raster;

pub use pixel::Pixel;
pub use raster::Raster;
