//! Whole-canvas color adjustments.
//!
//! Each adjustment blends the canvas with a "degenerate" version of itself:
//! `out = degenerate + (pixel - degenerate) * factor`. A factor of 1.0 is the identity, values
//! above 1.0 push pixels away from the degenerate image.

use crate::foundation::core::{Canvas, channel_from_f64};
use crate::foundation::error::EmocanvasResult;
use crate::foundation::math::luma;
use crate::render::exec::RenderExec;

/// Degenerate image: per-pixel grayscale (luma).
pub(crate) fn saturation(canvas: &mut Canvas, factor: f64, exec: &RenderExec) -> EmocanvasResult<()> {
    if factor == 1.0 {
        return Ok(());
    }
    let stride = canvas.row_stride();
    exec.for_each_row(canvas.as_raw_mut(), stride, |_, row| {
        for px in row.chunks_exact_mut(Canvas::CHANNELS) {
            let [r, g, b] = [f64::from(px[0]), f64::from(px[1]), f64::from(px[2])];
            let gray = luma(r, g, b);
            px[0] = channel_from_f64(gray + (r - gray) * factor);
            px[1] = channel_from_f64(gray + (g - gray) * factor);
            px[2] = channel_from_f64(gray + (b - gray) * factor);
        }
    })
}

/// Degenerate image: flat gray at the canvas' mean luma.
pub(crate) fn contrast(canvas: &mut Canvas, factor: f64, exec: &RenderExec) -> EmocanvasResult<()> {
    if factor == 1.0 {
        return Ok(());
    }
    let mean = mean_luma(canvas, exec)?;
    let stride = canvas.row_stride();
    exec.for_each_row(canvas.as_raw_mut(), stride, |_, row| {
        for c in row.iter_mut() {
            *c = channel_from_f64(mean + (f64::from(*c) - mean) * factor);
        }
    })
}

/// Degenerate image: 3×3 smoothing (center weight 5, neighbours 1); border pixels are left as is.
pub(crate) fn sharpness(canvas: &mut Canvas, factor: f64, exec: &RenderExec) -> EmocanvasResult<()> {
    if factor == 1.0 || canvas.width() < 3 || canvas.height() < 3 {
        return Ok(());
    }
    const C: usize = Canvas::CHANNELS;
    let width = canvas.width() as usize;
    let height = canvas.height();
    let stride = canvas.row_stride();
    let src = canvas.as_raw().to_vec();

    exec.for_each_row(canvas.as_raw_mut(), stride, |y, row| {
        if y == 0 || y + 1 >= height {
            return;
        }
        let y = y as usize;
        let above = &src[(y - 1) * stride..y * stride];
        let here = &src[y * stride..(y + 1) * stride];
        let below = &src[(y + 1) * stride..(y + 2) * stride];
        for x in 1..width - 1 {
            for c in 0..C {
                let i = x * C + c;
                let ring = u32::from(above[i - C])
                    + u32::from(above[i])
                    + u32::from(above[i + C])
                    + u32::from(here[i - C])
                    + u32::from(here[i + C])
                    + u32::from(below[i - C])
                    + u32::from(below[i])
                    + u32::from(below[i + C]);
                let smooth = f64::from(ring + 5 * u32::from(here[i])) / 13.0;
                row[i] = channel_from_f64(smooth + (f64::from(here[i]) - smooth) * factor);
            }
        }
    })
}

pub(crate) fn mean_luma(canvas: &Canvas, exec: &RenderExec) -> EmocanvasResult<f64> {
    let total = exec.sum_rows(canvas.as_raw(), canvas.row_stride(), |row| {
        row.chunks_exact(Canvas::CHANNELS)
            .map(|px| luma(f64::from(px[0]), f64::from(px[1]), f64::from(px[2])))
            .sum()
    })?;
    Ok(total / canvas.resolution().pixel_count() as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/adjust.rs"]
mod tests;
