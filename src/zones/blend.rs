use crate::foundation::core::Rgb;
use crate::zones::builder::ColorZone;

/// Accepted range for the boundary-blend threshold.
pub const BLEND_THRESHOLD_RANGE: (f64, f64) = (0.5, 0.7);
/// Accepted range for the weighted-blend capture margin.
pub const CAPTURE_MARGIN_RANGE: (f64, f64) = (15.0, 25.0);

/// Nearest-zone color, blended into the next zone over the last `1 - threshold` of each zone.
///
/// `position` is clamped into `[0, last.end]`; the last zone also owns `position == last.end`.
/// A zero-width zone resolves to its own base color. `zones` must be non-empty and contiguous
/// (as produced by [`crate::build_zones`]); an empty slice yields black.
pub fn color_at(zones: &[ColorZone], position: f64, threshold: f64) -> Rgb {
    let Some(last) = zones.last() else {
        return Rgb::BLACK;
    };
    let p = if position.is_nan() {
        0.0
    } else {
        position.clamp(zones[0].start, last.end)
    };

    let idx = zones
        .iter()
        .position(|z| z.start <= p && p < z.end)
        .unwrap_or(zones.len() - 1);
    let zone = &zones[idx];

    let local = local_ratio(zone, p);
    match zones.get(idx + 1) {
        Some(next) if local > threshold && threshold < 1.0 => {
            let t = (local - threshold) / (1.0 - threshold);
            zone.color.lerp(next.color, t)
        }
        _ => zone.color,
    }
}

fn local_ratio(zone: &ColorZone, p: f64) -> f64 {
    let width = zone.width();
    if width <= 0.0 {
        return 0.0;
    }
    ((p - zone.start) / width).clamp(0.0, 1.0)
}

/// Distance-weighted mix of every zone whose capture radius (`width / 2 + margin`) covers
/// `position`; each contribution is `(1 - d / radius) * strength`.
///
/// When no zone captures `position` (only possible outside the tiled range) the color of the zone
/// with the nearest midpoint is returned.
pub fn weighted_color_at(zones: &[ColorZone], position: f64, margin: f64) -> Rgb {
    let mut acc = [0.0f64; 3];
    let mut total = 0.0f64;
    for zone in zones {
        let radius = zone.width() * 0.5 + margin;
        if radius <= 0.0 {
            continue;
        }
        let d = (position - zone.midpoint()).abs();
        if d >= radius {
            continue;
        }
        let w = (1.0 - d / radius) * zone.strength;
        let [r, g, b] = zone.color.to_f64();
        acc[0] += r * w;
        acc[1] += g * w;
        acc[2] += b * w;
        total += w;
    }

    if total > 0.0 {
        return Rgb::from_f64(acc[0] / total, acc[1] / total, acc[2] / total);
    }

    zones
        .iter()
        .min_by(|a, b| {
            (position - a.midpoint())
                .abs()
                .total_cmp(&(position - b.midpoint()).abs())
        })
        .map(|z| z.color)
        .unwrap_or(Rgb::BLACK)
}

#[cfg(test)]
#[path = "../../tests/unit/zones/blend.rs"]
mod tests;
