use kurbo::{Affine, BezPath, Ellipse, Point, Rect, Shape};

use crate::effects::blur::gaussian_blur;
use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::EmocanvasResult;
use crate::render::exec::RenderExec;
use crate::render::vector::{VectorLayer, composite_over};
use crate::zones::blend::{BLEND_THRESHOLD_RANGE, color_at};
use crate::zones::builder::ColorZone;

use super::config::{AbstractParams, AbstractShape, ParamSampler, ShapeKind, StyleParams};
use super::{Style, StyleRenderer, mismatched, scale_px, shade, unit_coord};

/// Zones under this percentage get no shapes.
const MIN_ZONE_PERCENT: f64 = 5.0;
const PATH_TOLERANCE: f64 = 0.1;

pub(crate) struct AbstractRenderer;

impl AbstractRenderer {
    fn shape_path(shape: &AbstractShape, resolution: Resolution) -> BezPath {
        let w = f64::from(resolution.width);
        let h = f64::from(resolution.height);
        let unit = w.min(h);
        let center = Point::new(shape.center.0 * w, shape.center.1 * h);
        let (rx, ry) = (shape.radii.0 * unit, shape.radii.1 * unit);
        match shape.kind {
            ShapeKind::Ellipse => Ellipse::new(center, (rx, ry), shape.rotation).to_path(PATH_TOLERANCE),
            ShapeKind::Rect => {
                let rect = Rect::from_center_size(center, (2.0 * rx, 2.0 * ry));
                Affine::rotate_about(shape.rotation, center) * rect.to_path(PATH_TOLERANCE)
            }
        }
    }
}

impl StyleRenderer for AbstractRenderer {
    fn style(&self) -> Style {
        Style::Abstract
    }

    fn sample_params(&self, zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams {
        let blend_threshold = sampler.tune(BLEND_THRESHOLD_RANGE.0, BLEND_THRESHOLD_RANGE.1);
        let density = sampler.tune(6.0, 10.0);
        let opacity = sampler.tune(90.0, 150.0);
        let mut shapes = Vec::new();
        for zone in zones {
            if zone.percent() < MIN_ZONE_PERCENT {
                continue;
            }
            let count = (zone.strength * density).round().max(1.0) as usize;
            let size = 0.08 + 0.3 * zone.strength;
            for _ in 0..count {
                let rx = size * sampler.layout(0.6, 1.2);
                shapes.push(AbstractShape {
                    emotion: zone.emotion,
                    color: zone.color,
                    alpha: (opacity * sampler.layout(0.6, 1.0)).round().clamp(0.0, 255.0) as u8,
                    kind: if sampler.layout_chance(0.5) {
                        ShapeKind::Ellipse
                    } else {
                        ShapeKind::Rect
                    },
                    center: (sampler.layout(0.0, 1.0), sampler.layout(0.0, 1.0)),
                    radii: (rx, rx * sampler.layout(0.6, 1.4)),
                    rotation: sampler.layout(0.0, std::f64::consts::PI),
                });
            }
        }
        StyleParams::Abstract(AbstractParams {
            blend_threshold,
            shapes,
            blur_radius: sampler.tune(40.0, 70.0),
        })
    }

    fn render(
        &self,
        zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas> {
        let StyleParams::Abstract(p) = params else {
            return Err(mismatched(Style::Abstract, params));
        };
        let mut canvas = shade(resolution, exec, |_, y| {
            color_at(zones, unit_coord(y, resolution.height) * 100.0, p.blend_threshold)
        })?;

        exec.check()?;
        let mut layer = VectorLayer::new(resolution)?;
        for shape in &p.shapes {
            layer.fill_path(&Self::shape_path(shape, resolution), shape.color, shape.alpha);
        }
        composite_over(&mut canvas, &layer.finish())?;

        gaussian_blur(&mut canvas, scale_px(p.blur_radius, resolution), exec)?;
        Ok(canvas)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/abstract_shapes.rs"]
mod tests;
