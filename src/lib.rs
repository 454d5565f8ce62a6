//! Emocanvas turns an emotion distribution into a procedural image.
//!
//! The pipeline is fixed:
//!
//! - Parse and validate an [`EmotionDistribution`]
//! - Build contiguous [`ColorZone`]s on a `0..100` axis, largest emotion first
//! - Draw a [`StyleConfig`] from a seeded generator and render one of the [`Style`]s
//! - Post-process (saturation, contrast, sharpness) and optionally [`save`](RenderOutput::save)
//!
//! A fixed seed reproduces a render byte for byte, regardless of the worker count.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod effects;
/// Emotion labels, palette and distributions.
pub mod emotion;
/// PNG/JPEG persistence.
pub mod encode;
pub(crate) mod render;
/// Render entry points.
pub mod session;
/// Procedural styles and their parameters.
pub mod style;
/// Zone layout and color blending.
pub mod zones;

pub use crate::foundation::core::{Canvas, Resolution, Rgb};
pub use crate::foundation::error::{EmocanvasError, EmocanvasResult};
pub use crate::foundation::rng::Rng64;

pub use crate::emotion::distribution::{EmotionDistribution, EmotionScore, SUM_TOLERANCE};
pub use crate::emotion::palette::Emotion;
pub use crate::encode::{OutputFormat, save_canvas};
pub use crate::render::exec::CancelToken;
pub use crate::session::orchestrator::{
    EmotionRenderer, NormalizePolicy, RenderOpts, RenderOutput, render, render_named,
};
pub use crate::style::{ParamSource, PostParams, Style, StyleConfig, StyleParams};
pub use crate::zones::blend::{color_at, weighted_color_at};
pub use crate::zones::builder::{ColorZone, build_zones};
