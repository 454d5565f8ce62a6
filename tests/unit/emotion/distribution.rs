use super::*;

fn scenario_b() -> EmotionDistribution {
    EmotionDistribution::new()
        .with(Emotion::Anger, 50.0)
        .with(Emotion::Embarrassment, 25.0)
        .with(Emotion::Joy, 15.0)
        .with(Emotion::Sadness, 10.0)
}

#[test]
fn sorted_desc_keeps_label_order_on_ties() {
    let d = EmotionDistribution::new()
        .with(Emotion::Joy, 50.0)
        .with(Emotion::Anger, 50.0);
    let sorted = d.sorted_desc();
    assert_eq!(sorted[0].emotion, Emotion::Anger);
    assert_eq!(sorted[1].emotion, Emotion::Joy);
}

#[test]
fn validate_rejects_bad_values() {
    assert!(EmotionDistribution::new().validate().is_err());
    assert!(
        EmotionDistribution::new()
            .with(Emotion::Joy, f64::NAN)
            .validate()
            .is_err()
    );
    assert!(
        EmotionDistribution::new()
            .with(Emotion::Joy, 110.0)
            .with(Emotion::Hurt, -10.0)
            .validate()
            .is_err()
    );
    assert!(scenario_b().validate().is_ok());
}

#[test]
fn normalized_rescales_to_100() {
    let d = EmotionDistribution::new()
        .with(Emotion::Joy, 40.0)
        .with(Emotion::Sadness, 40.0);
    assert!(!d.is_normalized(SUM_TOLERANCE));
    let n = d.normalized().unwrap();
    assert!((n.total() - 100.0).abs() < 1e-9);
    assert!((n.percent(Emotion::Joy) - 50.0).abs() < 1e-9);
    assert!(scenario_b().is_normalized(SUM_TOLERANCE));
}

#[test]
fn normalized_handles_subnormal_total() {
    let n = EmotionDistribution::new()
        .with(Emotion::Joy, 5e-324)
        .normalized()
        .unwrap();
    assert_eq!(n.percent(Emotion::Joy), 100.0);
    assert_eq!(n.percent(Emotion::Anger), 0.0);
    assert!(n.validate().is_ok());
}

#[test]
fn normalized_handles_overflowing_total() {
    let d = EmotionDistribution::new()
        .with(Emotion::Joy, f64::MAX)
        .with(Emotion::Sadness, f64::MAX);
    assert!(d.total().is_infinite());
    let n = d.normalized().unwrap();
    assert!((n.percent(Emotion::Joy) - 50.0).abs() < 1e-9);
    assert!((n.percent(Emotion::Sadness) - 50.0).abs() < 1e-9);
    assert!(n.is_normalized(SUM_TOLERANCE));
}

#[test]
fn parses_pairs_in_both_languages() {
    let d: EmotionDistribution = "joy=60.5, 슬픔=39.5".parse().unwrap();
    assert_eq!(d.percent(Emotion::Joy), 60.5);
    assert_eq!(d.percent(Emotion::Sadness), 39.5);
    assert_eq!(d.percent(Emotion::Anger), 0.0);
}

#[test]
fn parse_rejects_unknown_duplicate_and_malformed() {
    assert!("boredom=10".parse::<EmotionDistribution>().is_err());
    assert!("joy=10,기쁨=20".parse::<EmotionDistribution>().is_err());
    assert!("joy".parse::<EmotionDistribution>().is_err());
    assert!("joy=abc".parse::<EmotionDistribution>().is_err());
    assert!("".parse::<EmotionDistribution>().is_err());
}

#[test]
fn json_roundtrip_uses_english_keys() {
    let json = r#"{"분노": 50, "당황": 25, "joy": 15, "sadness": 10}"#;
    let d: EmotionDistribution = serde_json::from_str(json).unwrap();
    assert_eq!(d, scenario_b());

    let out = serde_json::to_value(d).unwrap();
    assert_eq!(out["anger"], 50.0);
    assert_eq!(out["anxiety"], 0.0);
}

#[test]
fn json_rejects_repeated_labels() {
    assert!(serde_json::from_str::<EmotionDistribution>(r#"{"joy": 10, "joy": 90}"#).is_err());
    assert!(serde_json::from_str::<EmotionDistribution>(r#"{"joy": 10, "기쁨": 90}"#).is_err());
    assert!(serde_json::from_str::<EmotionDistribution>(r#"{"boredom": 10}"#).is_err());
    assert!(serde_json::from_str::<EmotionDistribution>("[1, 2]").is_err());
}

#[test]
fn summary_lines_draw_one_block_per_five_percent() {
    let lines = scenario_b().summary_lines();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("anger"));
    assert_eq!(lines[0].matches('█').count(), 10);
    assert_eq!(lines[3].matches('█').count(), 2);
}
