use crate::emotion::distribution::EmotionDistribution;
use crate::emotion::palette::Emotion;
use crate::foundation::core::Rgb;
use crate::foundation::error::{EmocanvasError, EmocanvasResult};

/// A contiguous slice `[start, end)` of the position axis painted with one emotion's color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ColorZone {
    /// Emotion owning the slice.
    pub emotion: Emotion,
    /// Base color of the emotion.
    pub color: Rgb,
    /// Inclusive start position.
    pub start: f64,
    /// Exclusive end position.
    pub end: f64,
    /// `percent / 100`.
    pub strength: f64,
}

impl ColorZone {
    /// Width of the slice (the emotion's percent).
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Center of the slice.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) * 0.5
    }

    /// Percent the zone was built from.
    pub fn percent(&self) -> f64 {
        self.strength * 100.0
    }
}

/// Tile the position axis with one zone per positive-percent emotion, highest percent first.
///
/// Percents are used as-is: a distribution summing to 80 yields zones tiling `[0, 80)`. Callers
/// that want a full `[0, 100)` tiling rescale first (see [`EmotionDistribution::normalized`]).
pub fn build_zones(distribution: &EmotionDistribution) -> EmocanvasResult<Vec<ColorZone>> {
    distribution.validate()?;

    let mut zones = Vec::with_capacity(Emotion::ALL.len());
    let mut cumulative = 0.0f64;
    for score in distribution.sorted_desc() {
        if score.percent <= 0.0 {
            continue;
        }
        let start = cumulative;
        let end = cumulative + score.percent;
        zones.push(ColorZone {
            emotion: score.emotion,
            color: score.emotion.base_color(),
            start,
            end,
            strength: score.percent / 100.0,
        });
        cumulative = end;
    }

    if zones.is_empty() {
        return Err(EmocanvasError::invalid_input(
            "distribution needs at least one positive percent",
        ));
    }
    Ok(zones)
}

#[cfg(test)]
#[path = "../../tests/unit/zones/builder.rs"]
mod tests;
