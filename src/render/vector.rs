use kurbo::{BezPath, PathEl, Point};

use crate::foundation::core::{Canvas, Resolution, Rgb};
use crate::foundation::error::{EmocanvasError, EmocanvasResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8};

/// Single-threaded vector surface for translucent shapes and strokes.
///
/// Drawing happens in `vello_cpu`; [`VectorLayer::finish`] reads the result back as
/// premultiplied RGBA8.
pub(crate) struct VectorLayer {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl VectorLayer {
    pub(crate) fn new(resolution: Resolution) -> EmocanvasResult<Self> {
        let width: u16 = resolution
            .width
            .try_into()
            .map_err(|_| EmocanvasError::invalid_input("vector surface width exceeds u16"))?;
        let height: u16 = resolution
            .height
            .try_into()
            .map_err(|_| EmocanvasError::invalid_input("vector surface height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self { ctx, width, height })
    }

    /// Paint the whole surface with an opaque color.
    pub(crate) fn fill_background(&mut self, color: Rgb) {
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, 255));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Fill a closed path with straight-alpha `color`/`alpha`.
    pub(crate) fn fill_path(&mut self, path: &BezPath, color: Rgb, alpha: u8) {
        if alpha == 0 {
            return;
        }
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, alpha));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Stroke an open polyline with round caps and joins.
    ///
    /// The stroke outline is expanded with `kurbo` and filled (non-zero), so self-overlapping
    /// parts of one stroke are painted once.
    pub(crate) fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgb, alpha: u8) {
        if points.len() < 2 || width <= 0.0 {
            return;
        }
        let mut line = BezPath::new();
        line.move_to(points[0]);
        for p in &points[1..] {
            line.line_to(*p);
        }
        let style = kurbo::Stroke::new(width)
            .with_caps(kurbo::Cap::Round)
            .with_join(kurbo::Join::Round);
        let outline = kurbo::stroke(
            line.elements().iter().copied(),
            &style,
            &kurbo::StrokeOpts::default(),
            0.25,
        );
        self.fill_path(&outline, color, alpha);
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8 bytes.
    pub(crate) fn finish(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        pixmap.data_as_u8_slice().to_vec()
    }
}

/// Source-over composite of premultiplied RGBA8 onto the opaque canvas.
pub(crate) fn composite_over(canvas: &mut Canvas, premul_rgba: &[u8]) -> EmocanvasResult<()> {
    if premul_rgba.len() != canvas.resolution().pixel_count() * 4 {
        return Err(EmocanvasError::invalid_input(
            "composite_over expects an rgba8 layer matching the canvas size",
        ));
    }
    for (d, s) in canvas
        .as_raw_mut()
        .chunks_exact_mut(Canvas::CHANNELS)
        .zip(premul_rgba.chunks_exact(4))
    {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        for c in 0..3 {
            let dc = mul_div255_u8(u16::from(d[c]), inv);
            d[c] = add_sat_u8(s[c], dc);
        }
    }
    Ok(())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/vector.rs"]
mod tests;
