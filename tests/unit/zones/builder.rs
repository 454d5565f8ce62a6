use super::*;

fn scenario_b() -> EmotionDistribution {
    EmotionDistribution::new()
        .with(Emotion::Anger, 50.0)
        .with(Emotion::Embarrassment, 25.0)
        .with(Emotion::Joy, 15.0)
        .with(Emotion::Sadness, 10.0)
}

#[test]
fn scenario_b_zones() {
    let zones = build_zones(&scenario_b()).unwrap();
    let got: Vec<(Emotion, f64, f64)> = zones.iter().map(|z| (z.emotion, z.start, z.end)).collect();
    assert_eq!(
        got,
        vec![
            (Emotion::Anger, 0.0, 50.0),
            (Emotion::Embarrassment, 50.0, 75.0),
            (Emotion::Joy, 75.0, 90.0),
            (Emotion::Sadness, 90.0, 100.0),
        ]
    );
    assert_eq!(zones[0].color, Emotion::Anger.base_color());
    assert!((zones[1].strength - 0.25).abs() < 1e-12);
}

#[test]
fn single_label_is_one_full_zone() {
    let d = EmotionDistribution::new().with(Emotion::Joy, 100.0);
    let zones = build_zones(&d).unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].start, 0.0);
    assert_eq!(zones[0].end, 100.0);
    assert_eq!(zones[0].midpoint(), 50.0);
}

#[test]
fn zones_tile_contiguously_and_sort_descending() {
    let d = EmotionDistribution::new()
        .with(Emotion::Joy, 60.5)
        .with(Emotion::Sadness, 20.3)
        .with(Emotion::Anxiety, 10.2)
        .with(Emotion::Anger, 5.0)
        .with(Emotion::Hurt, 3.0)
        .with(Emotion::Embarrassment, 1.0);
    let zones = build_zones(&d).unwrap();
    assert_eq!(zones.len(), 6);
    assert_eq!(zones[0].start, 0.0);
    for pair in zones.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert!(pair[0].percent() >= pair[1].percent());
    }
    assert!((zones.last().unwrap().end - 100.0).abs() < 1e-9);
}

#[test]
fn raw_totals_tile_observed_range() {
    let d = EmotionDistribution::new()
        .with(Emotion::Joy, 50.0)
        .with(Emotion::Hurt, 30.0);
    let zones = build_zones(&d).unwrap();
    assert_eq!(zones.last().unwrap().end, 80.0);
}

#[test]
fn empty_or_invalid_distribution_fails() {
    assert!(matches!(
        build_zones(&EmotionDistribution::new()),
        Err(EmocanvasError::InvalidInput(_))
    ));
    assert!(build_zones(&EmotionDistribution::new().with(Emotion::Joy, -1.0)).is_err());
}
