use std::path::Path;

use crate::effects::post::apply_post;
use crate::emotion::distribution::{EmotionDistribution, SUM_TOLERANCE};
use crate::encode::save_canvas;
use crate::foundation::core::{Canvas, Resolution};
use crate::foundation::error::{EmocanvasError, EmocanvasResult};
use crate::foundation::rng::Rng64;
use crate::render::exec::{CancelToken, RenderExec, build_thread_pool};
use crate::style::config::{ParamSampler, ParamSource, StyleConfig};
use crate::style::{Style, sample_config};
use crate::zones::builder::{ColorZone, build_zones};

/// What to do with distributions whose percents do not sum to 100.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizePolicy {
    /// Rescale by `100 / total` when the sum is off by more than [`SUM_TOLERANCE`].
    #[default]
    Rescale,
    /// Reject sums that are off by more than [`SUM_TOLERANCE`].
    Strict,
    /// Build zones from the raw percents; they tile `[0, total)`.
    Raw,
}

impl NormalizePolicy {
    /// Distribution that zones get built from.
    pub fn apply(self, distribution: &EmotionDistribution) -> EmocanvasResult<EmotionDistribution> {
        distribution.validate()?;
        if distribution.is_normalized(SUM_TOLERANCE) {
            return Ok(*distribution);
        }
        match self {
            NormalizePolicy::Rescale => {
                tracing::warn!(
                    total = distribution.total(),
                    "emotion percents do not sum to 100; rescaling"
                );
                distribution.normalized()
            }
            NormalizePolicy::Strict => Err(EmocanvasError::invalid_input(format!(
                "emotion percents sum to {:.3}, expected 100 (±{SUM_TOLERANCE})",
                distribution.total()
            ))),
            NormalizePolicy::Raw => Ok(*distribution),
        }
    }
}

/// Options for one render call.
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Output size. Defaults to 1920×1080.
    pub resolution: Resolution,
    /// Seed of the per-call generator. `None` draws one from entropy and records it in the output.
    pub seed: Option<u64>,
    /// Random or fixed-midpoint parameters.
    pub params: ParamSource,
    /// Handling of sums other than 100.
    pub normalize: NormalizePolicy,
    /// Dedicated worker count. `None` uses the global rayon pool.
    pub threads: Option<usize>,
    /// Cooperative cancellation; a fresh token is used when unset.
    pub cancel: Option<CancelToken>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            resolution: Resolution::FULL_HD,
            seed: None,
            params: ParamSource::Random,
            normalize: NormalizePolicy::Rescale,
            threads: None,
            cancel: None,
        }
    }
}

/// A finished render plus everything needed to reproduce it.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// Final pixels.
    pub canvas: Canvas,
    /// Style that produced them.
    pub style: Style,
    /// Zones the style consumed.
    pub zones: Vec<ColorZone>,
    /// Parameters drawn for this call.
    pub config: StyleConfig,
    /// Seed of the per-call generator.
    pub seed: u64,
}

impl RenderOutput {
    /// `emotion_<dominant>.png`.
    pub fn default_file_name(&self) -> String {
        let dominant = self
            .zones
            .first()
            .map(|z| z.emotion.name())
            .unwrap_or("unknown");
        format!("emotion_{dominant}.png")
    }

    /// Persist the canvas; the format follows the extension. The canvas stays usable on error.
    pub fn save(&self, path: impl AsRef<Path>) -> EmocanvasResult<()> {
        save_canvas(&self.canvas, path.as_ref())
    }
}

/// Reusable renderer; owns the worker pool when `threads` is pinned.
pub struct EmotionRenderer {
    opts: RenderOpts,
    pool: Option<rayon::ThreadPool>,
}

impl EmotionRenderer {
    /// Validate options and build the worker pool up front.
    pub fn new(opts: RenderOpts) -> EmocanvasResult<Self> {
        opts.resolution.validate()?;
        let pool = build_thread_pool(opts.threads)?;
        Ok(Self { opts, pool })
    }

    /// Options this renderer was built with.
    pub fn opts(&self) -> &RenderOpts {
        &self.opts
    }

    /// Render with a style selector string (case-insensitive, surrounding whitespace ignored).
    pub fn render_named(&self, distribution: &EmotionDistribution, style: &str) -> EmocanvasResult<RenderOutput> {
        distribution.validate()?;
        let style: Style = style.parse()?;
        self.render(distribution, style)
    }

    /// Validate, build zones, draw parameters, render and post-process.
    #[tracing::instrument(level = "info", skip(self, distribution), fields(seed))]
    pub fn render(&self, distribution: &EmotionDistribution, style: Style) -> EmocanvasResult<RenderOutput> {
        let distribution = self.opts.normalize.apply(distribution)?;
        let resolution = self.opts.resolution;
        resolution.validate()?;

        let zones = build_zones(&distribution)?;
        tracing::debug!(?zones, "built color zones");

        let seed = self.opts.seed.unwrap_or_else(Rng64::entropy_seed);
        tracing::Span::current().record("seed", seed);
        let mut rng = Rng64::new(seed);
        let mut sampler = ParamSampler::new(self.opts.params, &mut rng);
        let config = sample_config(style, &zones, &mut sampler);
        tracing::debug!(
            config = %serde_json::to_string(&config).unwrap_or_default(),
            "sampled style config"
        );

        let cancel = self.opts.cancel.clone().unwrap_or_default();
        let exec = RenderExec::new(self.pool.as_ref(), cancel);
        let renderer = style.renderer();
        let mut canvas = renderer.render(&zones, &config.params, resolution, &exec)?;
        apply_post(&mut canvas, &config.post, &exec)?;
        tracing::debug!(style = %renderer.style(), w = resolution.width, h = resolution.height, "render finished");

        Ok(RenderOutput {
            canvas,
            style,
            zones,
            config,
            seed,
        })
    }
}

/// One-shot render with default pool handling.
pub fn render(distribution: &EmotionDistribution, style: Style, opts: &RenderOpts) -> EmocanvasResult<RenderOutput> {
    distribution.validate()?;
    EmotionRenderer::new(opts.clone())?.render(distribution, style)
}

/// One-shot render with a style selector string.
///
/// The distribution is validated before the style name, so malformed input is reported first.
pub fn render_named(
    distribution: &EmotionDistribution,
    style: &str,
    opts: &RenderOpts,
) -> EmocanvasResult<RenderOutput> {
    distribution.validate()?;
    let style: Style = style.parse()?;
    render(distribution, style, opts)
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
