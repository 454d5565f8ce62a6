use crate::effects::blur::gaussian_blur;
use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::EmocanvasResult;
use crate::render::exec::RenderExec;
use crate::zones::blend::{BLEND_THRESHOLD_RANGE, color_at};
use crate::zones::builder::ColorZone;

use super::config::{ParamSampler, SineWave, StyleParams, WaveParams};
use super::{Style, StyleRenderer, mismatched, scale_px, shade, unit_coord};

pub(crate) struct WaveRenderer;

impl WaveRenderer {
    /// Horizontal gradient displaced by the layers, which only depend on `ny`.
    fn position(p: &WaveParams, nx: f64, ny: f64) -> f64 {
        let offset: f64 = p.layers.iter().map(|l| l.eval(0.0, ny)).sum();
        (nx + offset).clamp(0.0, 1.0) * 100.0
    }
}

impl StyleRenderer for WaveRenderer {
    fn style(&self) -> Style {
        Style::Waves
    }

    fn sample_params(&self, _zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams {
        let count = sampler.tune_count(3, 6);
        let layers = (1..=count)
            .map(|i| SineWave {
                frequency: sampler.tune(1.5, 4.5),
                amplitude: sampler.tune(0.05, 0.2) / f64::from(i),
                phase: sampler.phase(),
                // along y
                angle: std::f64::consts::FRAC_PI_2,
            })
            .collect();
        StyleParams::Waves(WaveParams {
            layers,
            blend_threshold: sampler.tune(BLEND_THRESHOLD_RANGE.0, BLEND_THRESHOLD_RANGE.1),
            blur_radius: sampler.tune(10.0, 25.0),
        })
    }

    fn render(
        &self,
        zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas> {
        let StyleParams::Waves(p) = params else {
            return Err(mismatched(Style::Waves, params));
        };
        let mut canvas = shade(resolution, exec, |x, y| {
            let nx = unit_coord(x, resolution.width);
            let ny = unit_coord(y, resolution.height);
            color_at(zones, Self::position(p, nx, ny), p.blend_threshold)
        })?;
        gaussian_blur(&mut canvas, scale_px(p.blur_radius, resolution), exec)?;
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/wave.rs"]
mod tests;
