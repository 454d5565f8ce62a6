use kurbo::Point;

use crate::effects::blur::gaussian_blur;
use crate::foundation::core::{Canvas, Resolution, Rgb};
use crate::foundation::error::EmocanvasResult;
use crate::render::exec::RenderExec;
use crate::render::vector::{VectorLayer, composite_over};
use crate::zones::builder::ColorZone;

use super::config::{AuroraParams, AuroraStroke, ParamSampler, SineWave, StyleParams};
use super::{Style, StyleRenderer, mismatched, scale_px};

/// Zones under this percentage get no strokes.
const MIN_ZONE_PERCENT: f64 = 3.0;
const BACKGROUND: Rgb = Rgb::new(10, 10, 20);
/// Polyline vertices per stroke.
const STROKE_SEGMENTS: usize = 128;

pub(crate) struct AuroraRenderer;

impl AuroraRenderer {
    fn stroke_points(stroke: &AuroraStroke, resolution: Resolution) -> Vec<Point> {
        let w = f64::from(resolution.width);
        let h = f64::from(resolution.height);
        // Overshoot both edges so round caps never show inside the frame.
        (0..=STROKE_SEGMENTS)
            .map(|i| {
                let t = -0.05 + 1.1 * (i as f64 / STROKE_SEGMENTS as f64);
                Point::new(t * w, stroke.y_at(t) * h)
            })
            .collect()
    }
}

impl StyleRenderer for AuroraRenderer {
    fn style(&self) -> Style {
        Style::Aurora
    }

    fn sample_params(&self, zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams {
        let intensity = sampler.tune(1.0, 1.6);
        let mut strokes = Vec::new();
        // Smallest zones first so the dominant emotion ends up on top.
        for zone in zones.iter().rev() {
            if zone.percent() < MIN_ZONE_PERCENT {
                continue;
            }
            let alpha = (255.0 * zone.strength * intensity).round().clamp(24.0, 200.0) as u8;
            for _ in 0..sampler.tune_count(2, 5) {
                strokes.push(AuroraStroke {
                    emotion: zone.emotion,
                    color: zone.color,
                    alpha,
                    width: sampler.tune(60.0, 120.0),
                    base_y: sampler.layout(0.15, 0.85),
                    sine: SineWave {
                        frequency: sampler.tune(0.5, 2.0),
                        amplitude: sampler.tune(0.05, 0.2),
                        phase: sampler.phase(),
                        angle: 0.0,
                    },
                    cosine: SineWave {
                        frequency: sampler.tune(1.0, 3.0),
                        amplitude: sampler.tune(0.02, 0.1),
                        phase: sampler.phase(),
                        angle: 0.0,
                    },
                });
            }
        }
        StyleParams::Aurora(AuroraParams {
            background: BACKGROUND,
            strokes,
            blur_radius: sampler.tune(30.0, 50.0),
        })
    }

    fn render(
        &self,
        _zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas> {
        let StyleParams::Aurora(p) = params else {
            return Err(mismatched(Style::Aurora, params));
        };
        exec.check()?;
        let mut layer = VectorLayer::new(resolution)?;
        layer.fill_background(p.background);
        for stroke in &p.strokes {
            let points = Self::stroke_points(stroke, resolution);
            layer.stroke_polyline(&points, scale_px(stroke.width, resolution), stroke.color, stroke.alpha);
        }
        let mut canvas = Canvas::new(resolution, p.background)?;
        composite_over(&mut canvas, &layer.finish())?;
        exec.check()?;
        gaussian_blur(&mut canvas, scale_px(p.blur_radius, resolution), exec)?;
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/aurora.rs"]
mod tests;
