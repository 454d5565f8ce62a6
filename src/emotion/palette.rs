use crate::foundation::core::Rgb;

/// The six emotion labels a classifier reports, in canonical order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    /// 분노
    Anger,
    /// 슬픔
    Sadness,
    /// 불안
    Anxiety,
    /// 상처
    Hurt,
    /// 당황
    Embarrassment,
    /// 기쁨
    Joy,
}

impl Emotion {
    /// All labels in canonical order.
    pub const ALL: [Emotion; 6] = [
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Anxiety,
        Emotion::Hurt,
        Emotion::Embarrassment,
        Emotion::Joy,
    ];

    /// Position in [`Emotion::ALL`].
    pub fn index(self) -> usize {
        match self {
            Emotion::Anger => 0,
            Emotion::Sadness => 1,
            Emotion::Anxiety => 2,
            Emotion::Hurt => 3,
            Emotion::Embarrassment => 4,
            Emotion::Joy => 5,
        }
    }

    /// English label.
    pub fn name(self) -> &'static str {
        match self {
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Anxiety => "anxiety",
            Emotion::Hurt => "hurt",
            Emotion::Embarrassment => "embarrassment",
            Emotion::Joy => "joy",
        }
    }

    /// Label used by the upstream (Korean) classifier.
    pub fn native_name(self) -> &'static str {
        match self {
            Emotion::Anger => "분노",
            Emotion::Sadness => "슬픔",
            Emotion::Anxiety => "불안",
            Emotion::Hurt => "상처",
            Emotion::Embarrassment => "당황",
            Emotion::Joy => "기쁨",
        }
    }

    /// Base color the renderers paint this emotion with.
    pub fn base_color(self) -> Rgb {
        match self {
            Emotion::Anger => Rgb::new(220, 20, 60),          // crimson
            Emotion::Sadness => Rgb::new(70, 130, 180),       // steel blue
            Emotion::Anxiety => Rgb::new(138, 43, 226),       // blue violet
            Emotion::Hurt => Rgb::new(186, 85, 211),          // medium orchid
            Emotion::Embarrassment => Rgb::new(255, 165, 0),  // orange
            Emotion::Joy => Rgb::new(255, 215, 0),            // gold
        }
    }

    /// Resolve an English (case-insensitive) or native label.
    pub fn from_label(label: &str) -> Option<Emotion> {
        let label = label.trim();
        Emotion::ALL.into_iter().find(|e| {
            e.name().eq_ignore_ascii_case(label) || e.native_name() == label
        })
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/emotion/palette.rs"]
mod tests;
