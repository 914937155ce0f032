use crate::error::{Channel, RasterError, Result};

/// RGB pixel with 8-bit channels
///
/// Channels are always within [0, 255]; the checked constructor and setters
/// reject anything else with [`RasterError::InvalidChannelValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    /// Pure black
    pub const BLACK: Pixel = Pixel::from_rgb8(0, 0, 0);
    /// Pure white
    pub const WHITE: Pixel = Pixel::from_rgb8(255, 255, 255);

    /// Create a pixel from integer channels, validating each one
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self> {
        Ok(Self {
            red: check_channel(Channel::Red, red)?,
            green: check_channel(Channel::Green, green)?,
            blue: check_channel(Channel::Blue, blue)?,
        })
    }

    /// Create a pixel from channels that are already in range
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red channel
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green channel
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Set the red channel. The pixel is left unchanged on error.
    pub fn set_red(&mut self, red: i32) -> Result<()> {
        self.red = check_channel(Channel::Red, red)?;
        Ok(())
    }

    /// Set the green channel. The pixel is left unchanged on error.
    pub fn set_green(&mut self, green: i32) -> Result<()> {
        self.green = check_channel(Channel::Green, green)?;
        Ok(())
    }

    /// Set the blue channel. The pixel is left unchanged on error.
    pub fn set_blue(&mut self, blue: i32) -> Result<()> {
        self.blue = check_channel(Channel::Blue, blue)?;
        Ok(())
    }

    /// Channels as `[red, green, blue]`
    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Default for Pixel {
    /// Mid gray
    fn default() -> Self {
        Self::from_rgb8(127, 127, 127)
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::from_rgb8(red, green, blue)
    }
}

fn check_channel(channel: Channel, value: i32) -> Result<u8> {
    u8::try_from(value).map_err(|_| RasterError::InvalidChannelValue { channel, value })
}
