//! Procedural styles.
//!
//! A style turns the color zones into a canvas. Every style draws its parameters once per call
//! ([`StyleRenderer::sample_params`]) and then renders deterministically from them, so the same
//! zones and [`StyleConfig`] always produce the same pixels.

pub mod config;

mod abstract_shapes;
mod aurora;
mod dynamic;
mod marble;
mod wave;

use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Canvas, Resolution, Rgb};
use crate::foundation::error::{EmocanvasError, EmocanvasResult};
use crate::render::exec::RenderExec;
use crate::zones::builder::ColorZone;

pub use config::{ParamSource, PostParams, StyleConfig, StyleParams};

use config::{ParamSampler, REFERENCE_HEIGHT};

/// Procedural style selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Warped direction gradient with weighted blending and brightness jitter.
    Dynamic,
    /// Horizontal gradient with decaying sine layers.
    Waves,
    /// Translucent strokes over a near-black background.
    Aurora,
    /// Vertical gradient under translucent shapes.
    Abstract,
    /// Octave noise with darkened veins.
    Marble,
}

impl Style {
    /// Every style, in listing order.
    pub const ALL: [Style; 5] = [
        Style::Dynamic,
        Style::Waves,
        Style::Aurora,
        Style::Abstract,
        Style::Marble,
    ];

    /// Selector string accepted by [`Style::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Style::Dynamic => "dynamic",
            Style::Waves => "waves",
            Style::Aurora => "aurora",
            Style::Abstract => "abstract",
            Style::Marble => "marble",
        }
    }

    pub(crate) fn renderer(self) -> &'static dyn StyleRenderer {
        match self {
            Style::Dynamic => &dynamic::DynamicRenderer,
            Style::Waves => &wave::WaveRenderer,
            Style::Aurora => &aurora::AuroraRenderer,
            Style::Abstract => &abstract_shapes::AbstractRenderer,
            Style::Marble => &marble::MarbleRenderer,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = EmocanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EmocanvasError::unsupported_style(wanted))
    }
}

/// Uniform contract of the style implementations.
pub(crate) trait StyleRenderer: Send + Sync {
    fn style(&self) -> Style;

    /// Draw this style's parameters for one call.
    fn sample_params(&self, zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleParams;

    /// Render zones into a fresh canvas, finishing blur included.
    fn render(
        &self,
        zones: &[ColorZone],
        params: &StyleParams,
        resolution: Resolution,
        exec: &RenderExec,
    ) -> EmocanvasResult<Canvas>;
}

/// Draw a complete [`StyleConfig`]: style parameters first, then post multipliers.
pub(crate) fn sample_config(style: Style, zones: &[ColorZone], sampler: &mut ParamSampler) -> StyleConfig {
    let params = style.renderer().sample_params(zones, sampler);
    let post = PostParams::sample(sampler);
    StyleConfig { params, post }
}

fn mismatched(expected: Style, params: &StyleParams) -> EmocanvasError {
    EmocanvasError::invalid_input(format!(
        "{expected} renderer received parameters for another style: {params:?}"
    ))
}

/// Pixel quantity specified at [`REFERENCE_HEIGHT`] rows, scaled to `resolution`.
pub(crate) fn scale_px(value: f64, resolution: Resolution) -> f64 {
    value * f64::from(resolution.height) / REFERENCE_HEIGHT
}

/// Fill a fresh canvas by evaluating `shader(x, y)` for every pixel, in parallel row bands.
pub(crate) fn shade<F>(resolution: Resolution, exec: &RenderExec, shader: F) -> EmocanvasResult<Canvas>
where
    F: Fn(u32, u32) -> Rgb + Sync,
{
    let mut canvas = Canvas::new(resolution, Rgb::BLACK)?;
    let stride = canvas.row_stride();
    exec.for_each_row(canvas.as_raw_mut(), stride, |y, row| {
        for (x, px) in row.chunks_exact_mut(Canvas::CHANNELS).enumerate() {
            px.copy_from_slice(&shader(x as u32, y).to_array());
        }
    })?;
    Ok(canvas)
}

/// Normalized pixel coordinate along an axis of `len` pixels.
pub(crate) fn unit_coord(i: u32, len: u32) -> f64 {
    f64::from(i) / f64::from(len)
}

#[cfg(test)]
#[path = "../../tests/unit/style/mod.rs"]
mod tests;
