use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::EmocanvasResult;
use crate::foundation::math::hash_signed_unit;
use crate::render::exec::RenderExec;
use crate::zones::blend::{CAPTURE_MARGIN_RANGE, weighted_color_at};
use crate::zones::builder::ColorZone;

use super::config::{DynamicParams, ParamSampler, SineWave, StyleParams};
use super::{Style, StyleRenderer, mismatched, shade, unit_coord};

pub(crate) struct DynamicRenderer;

impl DynamicRenderer {
    /// Position in `[0, 100)`: direction base plus every wave, wrapped into the unit interval.
    fn position(p: &DynamicParams, nx: f64, ny: f64) -> f64 {
        let warped = p.direction.base(nx, ny) + p.waves.iter().map(|w| w.eval(nx, ny)).sum::<f64>();
        warped.rem_euclid(1.0) * 100.0
    }
}

impl StyleRenderer for DynamicRenderer {
    fn style(&self) -> Style {
        Style::Dynamic
    }

    fn sample_params(&self, _zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams {
        let direction = sampler.direction();
        let count = sampler.tune_count(3, 6);
        let waves = (0..count)
            .map(|_| SineWave {
                frequency: sampler.tune(1.5, 4.0),
                amplitude: sampler.tune(0.1, 0.4),
                phase: sampler.phase(),
                angle: sampler.phase(),
            })
            .collect();
        StyleParams::Dynamic(DynamicParams {
            direction,
            waves,
            capture_margin: sampler.tune(CAPTURE_MARGIN_RANGE.0, CAPTURE_MARGIN_RANGE.1),
            jitter: sampler.tune(0.03, 0.06),
            jitter_seed: sampler.layout_seed(),
        })
    }

    fn render(
        &self,
        zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas> {
        let StyleParams::Dynamic(p) = params else {
            return Err(mismatched(Style::Dynamic, params));
        };
        shade(resolution, exec, |x, y| {
            let nx = unit_coord(x, resolution.width);
            let ny = unit_coord(y, resolution.height);
            let color = weighted_color_at(zones, Self::position(p, nx, ny), p.capture_margin);
            color.scale(1.0 + p.jitter * hash_signed_unit(p.jitter_seed, x, y))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/dynamic.rs"]
mod tests;
