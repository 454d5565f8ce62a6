//! Canvas persistence through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};

use crate::foundation::core::Canvas;
use crate::foundation::error::{EmocanvasError, EmocanvasResult};

/// Quality used for lossy output.
pub const JPEG_QUALITY: u8 = 95;

/// Output container picked from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless.
    Png,
    /// Quality [`JPEG_QUALITY`].
    Jpeg,
}

impl OutputFormat {
    /// `.jpg`/`.jpeg` (any case) select JPEG; everything else, including no extension, is PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                OutputFormat::Jpeg
            }
            _ => OutputFormat::Png,
        }
    }
}

fn to_rgb_image(canvas: &Canvas) -> EmocanvasResult<RgbImage> {
    RgbImage::from_raw(canvas.width(), canvas.height(), canvas.as_raw().to_vec())
        .ok_or_else(|| EmocanvasError::encode("canvas buffer does not match its dimensions"))
}

/// Encode the canvas in `format`.
pub fn encode(canvas: &Canvas, format: OutputFormat) -> EmocanvasResult<Vec<u8>> {
    let img = to_rgb_image(canvas)?;
    let mut out = Cursor::new(Vec::new());
    match format {
        OutputFormat::Png => img.write_to(&mut out, ImageFormat::Png)?,
        OutputFormat::Jpeg => {
            let encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            img.write_with_encoder(encoder)?;
        }
    }
    Ok(out.into_inner())
}

/// Lossless PNG bytes.
pub fn encode_png(canvas: &Canvas) -> EmocanvasResult<Vec<u8>> {
    encode(canvas, OutputFormat::Png)
}

/// Decode any format `image` understands into an RGB canvas.
pub fn decode(bytes: &[u8]) -> EmocanvasResult<Canvas> {
    let img = image::load_from_memory(bytes)?.into_rgb8();
    let (width, height) = img.dimensions();
    Canvas::from_raw(width, height, img.into_raw())
}

/// Encode by extension and write to `path`.
///
/// Encoding happens fully in memory first, so an encode failure never leaves a partial file.
pub fn save_canvas(canvas: &Canvas, path: &Path) -> EmocanvasResult<()> {
    let bytes = encode(canvas, OutputFormat::from_path(path))?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), "saved canvas");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/mod.rs"]
mod tests;
