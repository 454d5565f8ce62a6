//! Emotion labels, their palette and the per-request intensity distribution.

/// Label → percent map supplied by the classifier.
pub mod distribution;
/// Fixed label set and base colors.
pub mod palette;
