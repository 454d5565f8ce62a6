use std::f64::consts::TAU;

use crate::effects::blur::gaussian_blur;
use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::EmocanvasResult;
use crate::render::exec::RenderExec;
use crate::zones::blend::{BLEND_THRESHOLD_RANGE, color_at};
use crate::zones::builder::ColorZone;

use super::config::{MarbleOctave, MarbleParams, ParamSampler, StyleParams};
use super::{Style, StyleRenderer, mismatched, scale_px, shade, unit_coord};

/// Octave sums cluster around zero; stretch them before mapping onto zone positions.
const NOISE_GAIN: f64 = 2.0;

pub(crate) struct MarbleRenderer;

impl MarbleRenderer {
    /// Weighted octave sum in `[-1, 1]`.
    fn noise(p: &MarbleParams, nx: f64, ny: f64) -> f64 {
        let mut sum = 0.0;
        let mut total = 0.0;
        for o in &p.octaves {
            sum += o.weight * (TAU * o.freq_x * nx + o.phase_x).sin() * (TAU * o.freq_y * ny + o.phase_y).cos();
            total += o.weight;
        }
        if total > 0.0 { sum / total } else { 0.0 }
    }

    fn is_vein(p: &MarbleParams, nx: f64, ny: f64, noise: f64) -> bool {
        let v = (TAU * (p.vein_frequency * (nx + 0.5 * ny) + p.vein_turbulence * noise)).sin();
        v.abs() < p.vein_threshold
    }
}

impl StyleRenderer for MarbleRenderer {
    fn style(&self) -> Style {
        Style::Marble
    }

    fn sample_params(&self, _zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams {
        let count = sampler.tune_count(4, 7);
        let base = sampler.tune(1.0, 2.5);
        let octaves = (0..count)
            .map(|i| {
                let scale = base * f64::from(1u32 << i);
                MarbleOctave {
                    freq_x: scale * sampler.layout(0.8, 1.2),
                    freq_y: scale * sampler.layout(0.8, 1.2),
                    phase_x: sampler.phase(),
                    phase_y: sampler.phase(),
                    weight: 0.5f64.powi(i as i32),
                }
            })
            .collect();
        StyleParams::Marble(MarbleParams {
            octaves,
            vein_frequency: sampler.tune(6.0, 14.0),
            vein_turbulence: sampler.tune(1.0, 3.0),
            vein_threshold: sampler.tune(0.04, 0.1),
            vein_darken: sampler.tune(0.06, 0.15),
            blend_threshold: sampler.tune(BLEND_THRESHOLD_RANGE.0, BLEND_THRESHOLD_RANGE.1),
            blur_radius: sampler.tune(1.0, 4.0),
        })
    }

    fn render(
        &self,
        zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas> {
        let StyleParams::Marble(p) = params else {
            return Err(mismatched(Style::Marble, params));
        };
        let mut canvas = shade(resolution, exec, |x, y| {
            let nx = unit_coord(x, resolution.width);
            let ny = unit_coord(y, resolution.height);
            let noise = Self::noise(p, nx, ny);
            let position = ((noise * NOISE_GAIN).clamp(-1.0, 1.0) + 1.0) * 50.0;
            let color = color_at(zones, position, p.blend_threshold);
            if Self::is_vein(p, nx, ny, noise) {
                color.scale(1.0 - p.vein_darken)
            } else {
                color
            }
        })?;
        gaussian_blur(&mut canvas, scale_px(p.blur_radius, resolution), exec)?;
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/marble.rs"]
mod tests;
