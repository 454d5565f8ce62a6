use crate::foundation::core::Canvas;
use crate::foundation::error::{EmocanvasError, EmocanvasResult};
use crate::render::exec::RenderExec;

/// Separable Gaussian blur of the canvas, in place.
///
/// `sigma` is the standard deviation in pixels (the "radius" knob of the styles); the kernel
/// reaches `ceil(3 * sigma)` pixels to each side and samples clamp to the edge.
pub(crate) fn gaussian_blur(canvas: &mut Canvas, sigma: f64, exec: &RenderExec) -> EmocanvasResult<()> {
    if sigma <= 0.0 {
        return Ok(());
    }
    let radius = kernel_radius(sigma);
    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let width = canvas.width();
    let height = canvas.height();
    let stride = canvas.row_stride();

    let src = canvas.as_raw().to_vec();
    let mut tmp = vec![0u8; src.len()];
    exec.for_each_row(&mut tmp, stride, |y, row| {
        horizontal_row(&src, row, width, y, &kernel);
    })?;
    exec.for_each_row(canvas.as_raw_mut(), stride, |y, row| {
        vertical_row(&tmp, row, width, height, y, &kernel);
    })?;
    Ok(())
}

pub(crate) fn kernel_radius(sigma: f64) -> u32 {
    (sigma * 3.0).ceil().max(1.0) as u32
}

/// Fixed-point one.
const ONE_Q16: u32 = 1 << 16;

/// `2 * radius + 1` Q16 taps of a normalized Gaussian; they sum to exactly [`ONE_Q16`].
fn gaussian_kernel_q16(radius: u32, sigma: f64) -> EmocanvasResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(EmocanvasError::invalid_input(format!(
            "blur sigma must be finite and > 0, got {sigma}"
        )));
    }
    let r = i64::from(radius);
    let two_var = 2.0 * sigma * sigma;
    let falloff = |i: i64| (-((i * i) as f64) / two_var).exp();
    // The center term is 1, so the norm is never zero.
    let norm: f64 = (-r..=r).map(falloff).sum();
    let mut taps: Vec<u32> = (-r..=r)
        .map(|i| (falloff(i) / norm * f64::from(ONE_Q16)).round() as u32)
        .collect();

    // Center tap absorbs the rounding drift.
    let center = radius as usize;
    let off_center: u32 = taps.iter().sum::<u32>() - taps[center];
    taps[center] = ONE_Q16.saturating_sub(off_center);
    Ok(taps)
}

fn horizontal_row(src: &[u8], dst_row: &mut [u8], width: u32, y: u32, k: &[u32]) {
    const C: usize = Canvas::CHANNELS;
    let radius = (k.len() / 2) as i64;
    let w = i64::from(width);
    let row_base = y as usize * width as usize * C;
    for x in 0..w {
        let mut acc = [0u64; C];
        for (ki, &kw) in k.iter().enumerate() {
            let sx = (x + ki as i64 - radius).clamp(0, w - 1) as usize;
            let idx = row_base + sx * C;
            for c in 0..C {
                acc[c] += u64::from(kw) * u64::from(src[idx + c]);
            }
        }
        let out = x as usize * C;
        for c in 0..C {
            dst_row[out + c] = q16_to_u8(acc[c]);
        }
    }
}

fn vertical_row(src: &[u8], dst_row: &mut [u8], width: u32, height: u32, y: u32, k: &[u32]) {
    const C: usize = Canvas::CHANNELS;
    let radius = (k.len() / 2) as i64;
    let h = i64::from(height);
    let stride = width as usize * C;
    // Accumulate whole source rows tap by tap; contiguous reads beat per-pixel column walks.
    let mut acc = vec![0u64; stride];
    for (ki, &kw) in k.iter().enumerate() {
        let sy = (i64::from(y) + ki as i64 - radius).clamp(0, h - 1) as usize;
        let src_row = &src[sy * stride..(sy + 1) * stride];
        for (a, &s) in acc.iter_mut().zip(src_row) {
            *a += u64::from(kw) * u64::from(s);
        }
    }
    for (d, a) in dst_row.iter_mut().zip(acc) {
        *d = q16_to_u8(a);
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + u64::from(ONE_Q16 / 2)) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
