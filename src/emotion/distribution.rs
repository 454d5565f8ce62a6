use serde::ser::SerializeMap as _;

use crate::emotion::palette::Emotion;
use crate::foundation::error::{EmocanvasError, EmocanvasResult};

/// Default tolerance (in percentage points) for "sums to 100".
pub const SUM_TOLERANCE: f64 = 0.01;

/// One label and its intensity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct EmotionScore {
    /// Label.
    pub emotion: Emotion,
    /// Intensity in percent.
    pub percent: f64,
}

/// Intensity per emotion label, exactly one value per label.
///
/// Labels missing from parsed input count as 0. Values are expected to sum to 100; see
/// [`EmotionDistribution::normalized`] for the rescaling rule.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EmotionDistribution {
    percents: [f64; 6],
}

impl EmotionDistribution {
    /// Distribution with every label at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(emotion, percent)` pairs; a label given twice is an error.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Emotion, f64)>,
    ) -> EmocanvasResult<Self> {
        let mut out = Self::new();
        let mut seen = [false; 6];
        for (emotion, percent) in pairs {
            if std::mem::replace(&mut seen[emotion.index()], true) {
                return Err(EmocanvasError::invalid_input(format!(
                    "emotion \"{emotion}\" given more than once"
                )));
            }
            out.percents[emotion.index()] = percent;
        }
        Ok(out)
    }

    /// Build from textual labels (English or native).
    pub fn from_labels<'a>(
        pairs: impl IntoIterator<Item = (&'a str, f64)>,
    ) -> EmocanvasResult<Self> {
        let resolved = pairs
            .into_iter()
            .map(|(label, percent)| {
                Emotion::from_label(label)
                    .map(|e| (e, percent))
                    .ok_or_else(|| {
                        EmocanvasError::invalid_input(format!("unknown emotion label \"{label}\""))
                    })
            })
            .collect::<EmocanvasResult<Vec<_>>>()?;
        Self::from_pairs(resolved)
    }

    /// Builder-style setter.
    pub fn with(mut self, emotion: Emotion, percent: f64) -> Self {
        self.percents[emotion.index()] = percent;
        self
    }

    /// Intensity of one label.
    pub fn percent(&self, emotion: Emotion) -> f64 {
        self.percents[emotion.index()]
    }

    /// All scores in canonical label order.
    pub fn scores(&self) -> [EmotionScore; 6] {
        Emotion::ALL.map(|emotion| EmotionScore {
            emotion,
            percent: self.percent(emotion),
        })
    }

    /// Scores sorted by percent, highest first. Ties keep canonical label order.
    pub fn sorted_desc(&self) -> Vec<EmotionScore> {
        let mut scores = self.scores().to_vec();
        scores.sort_by(|a, b| b.percent.total_cmp(&a.percent));
        scores
    }

    /// Sum of all percents.
    pub fn total(&self) -> f64 {
        self.percents.iter().sum()
    }

    /// Reject NaN, infinite or negative values and all-zero distributions.
    pub fn validate(&self) -> EmocanvasResult<()> {
        for score in self.scores() {
            if !score.percent.is_finite() {
                return Err(EmocanvasError::invalid_input(format!(
                    "percent for \"{}\" must be finite, got {}",
                    score.emotion, score.percent
                )));
            }
            if score.percent < 0.0 {
                return Err(EmocanvasError::invalid_input(format!(
                    "percent for \"{}\" must be >= 0, got {}",
                    score.emotion, score.percent
                )));
            }
        }
        if !self.percents.iter().any(|p| *p > 0.0) {
            return Err(EmocanvasError::invalid_input(
                "distribution needs at least one positive percent",
            ));
        }
        Ok(())
    }

    /// Whether the percents sum to 100 within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total() - 100.0).abs() <= tolerance
    }

    /// Rescale every percent so the total is 100.
    ///
    /// Percents are divided by the largest one before summing, so neither a subnormal nor an
    /// overflowing total can turn a valid distribution into NaN or all zeros.
    pub fn normalized(&self) -> EmocanvasResult<Self> {
        self.validate()?;
        let max = self.percents.iter().copied().fold(0.0, f64::max);
        let relative = self.percents.map(|p| p / max);
        let total: f64 = relative.iter().sum();
        Ok(Self {
            percents: relative.map(|r| r / total * 100.0),
        })
    }

    /// Human-readable breakdown, highest first, one `█` per 5 %.
    pub fn summary_lines(&self) -> Vec<String> {
        self.sorted_desc()
            .into_iter()
            .map(|s| {
                let bar = "█".repeat((s.percent.max(0.0) / 5.0) as usize);
                format!(
                    "{:<13} {:<4} {:5.1}% {bar}",
                    s.emotion.name(),
                    s.emotion.native_name(),
                    s.percent
                )
            })
            .collect()
    }
}

/// Parses `label=percent` pairs separated by commas, e.g. `joy=60,sadness=40`.
impl std::str::FromStr for EmotionDistribution {
    type Err = EmocanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (label, value) = part.split_once('=').ok_or_else(|| {
                EmocanvasError::invalid_input(format!("expected label=percent, got \"{part}\""))
            })?;
            let value: f64 = value.trim().parse().map_err(|_| {
                EmocanvasError::invalid_input(format!("invalid percent in \"{part}\""))
            })?;
            pairs.push((label.trim(), value));
        }
        if pairs.is_empty() {
            return Err(EmocanvasError::invalid_input("empty emotion list"));
        }
        Self::from_labels(pairs)
    }
}

impl serde::Serialize for EmotionDistribution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(6))?;
        for score in self.scores() {
            map.serialize_entry(score.emotion.name(), &score.percent)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for EmotionDistribution {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Keeps every entry in input order so repeated keys reach the duplicate check.
struct DistributionVisitor;

impl<'de> serde::de::Visitor<'de> for DistributionVisitor {
    type Value = EmotionDistribution;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of emotion label to percent")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Vec::<(String, f64)>::new();
        while let Some(entry) = map.next_entry::<String, f64>()? {
            entries.push(entry);
        }
        EmotionDistribution::from_labels(entries.iter().map(|(k, v)| (k.as_str(), *v)))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emotion/distribution.rs"]
mod tests;
