use crate::foundation::core::Canvas;
use crate::foundation::error::EmocanvasResult;
use crate::render::exec::RenderExec;
use crate::style::config::PostParams;

use super::adjust;

/// Fixed chain run after every style: saturation, then contrast, then sharpness.
#[tracing::instrument(level = "debug", skip(canvas, exec), fields(w = canvas.width(), h = canvas.height()))]
pub(crate) fn apply_post(canvas: &mut Canvas, post: &PostParams, exec: &RenderExec) -> EmocanvasResult<()> {
    adjust::saturation(canvas, post.saturation, exec)?;
    adjust::contrast(canvas, post.contrast, exec)?;
    adjust::sharpness(canvas, post.sharpness, exec)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/post.rs"]
mod tests;
