use crate::foundation::error::{EmocanvasError, EmocanvasResult};

/// Straight (opaque) 8-bit RGB color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Construct from channel bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Construct from floating-point channels, rounding and clamping each into `[0, 255]`.
    ///
    /// `NaN` maps to 0.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel_from_f64(r),
            g: channel_from_f64(g),
            b: channel_from_f64(b),
        }
    }

    /// Channels as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels as floats in `0.0..=255.0`.
    pub fn to_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Linear interpolation toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let [ar, ag, ab] = self.to_f64();
        let [br, bg, bb] = other.to_f64();
        Rgb::from_f64(
            ar + (br - ar) * t,
            ag + (bg - ag) * t,
            ab + (bb - ab) * t,
        )
    }

    /// Multiply every channel by `factor` (brightness), clamping the result.
    pub fn scale(self, factor: f64) -> Rgb {
        let [r, g, b] = self.to_f64();
        Rgb::from_f64(r * factor, g * factor, b * factor)
    }

    /// `#RRGGBB` (upper-case hex).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

pub(crate) fn channel_from_f64(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Largest edge the vector composition surface supports.
    pub const MAX_EDGE: u32 = u16::MAX as u32;

    /// Full HD, the default output size.
    pub const FULL_HD: Resolution = Resolution {
        width: 1920,
        height: 1080,
    };

    /// Create a validated resolution.
    pub fn new(width: u32, height: u32) -> EmocanvasResult<Self> {
        let res = Self { width, height };
        res.validate()?;
        Ok(res)
    }

    /// Both edges must be in `1..=MAX_EDGE`.
    pub fn validate(self) -> EmocanvasResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EmocanvasError::invalid_input(format!(
                "resolution must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > Self::MAX_EDGE || self.height > Self::MAX_EDGE {
            return Err(EmocanvasError::invalid_input(format!(
                "resolution edges must be <= {}, got {}x{}",
                Self::MAX_EDGE,
                self.width,
                self.height
            )));
        }
        Ok(())
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FULL_HD
    }
}

/// An RGB8 pixel buffer, tightly packed, row-major.
///
/// A canvas is created by exactly one render call and handed to the caller by value once
/// post-processing finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 3;

    /// Allocate a canvas filled with `fill`.
    pub fn new(resolution: Resolution, fill: Rgb) -> EmocanvasResult<Self> {
        resolution.validate()?;
        let data = fill.to_array().repeat(resolution.pixel_count());
        Ok(Self {
            width: resolution.width,
            height: resolution.height,
            data,
        })
    }

    /// Wrap raw RGB8 bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> EmocanvasResult<Self> {
        let resolution = Resolution { width, height };
        resolution.validate()?;
        if data.len() != resolution.pixel_count() * Self::CHANNELS {
            return Err(EmocanvasError::invalid_input(format!(
                "canvas bytes must be width*height*3 ({}), got {}",
                resolution.pixel_count() * Self::CHANNELS,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions.
    pub fn resolution(&self) -> Resolution {
        Resolution {
            width: self.width,
            height: self.height,
        }
    }

    /// Bytes in one row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    /// Raw RGB8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the canvas, returning its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`; `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        Some(Rgb::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Overwrite one pixel; out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        self.data[idx..idx + Self::CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(Self::CHANNELS)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
