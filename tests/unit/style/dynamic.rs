use super::*;
use crate::emotion::distribution::EmotionDistribution;
use crate::emotion::palette::Emotion;
use crate::foundation::core::Rgb;
use crate::foundation::rng::Rng64;
use crate::render::exec::{CancelToken, build_thread_pool};
use crate::style::config::{Direction, ParamSource};
use crate::zones::builder::build_zones;

fn zones(pairs: &str) -> Vec<ColorZone> {
    build_zones(&pairs.parse::<EmotionDistribution>().unwrap()).unwrap()
}

fn sample(z: &[ColorZone], seed: u64) -> StyleParams {
    let mut rng = Rng64::new(seed);
    DynamicRenderer.sample_params(z, &mut ParamSampler::new(ParamSource::Random, &mut rng))
}

#[test]
fn sampled_parameters_stay_in_range() {
    let z = zones("joy=70,hurt=30");
    for seed in 0..32 {
        let StyleParams::Dynamic(p) = sample(&z, seed) else {
            panic!("dynamic renderer produced foreign params");
        };
        assert!((3..=6).contains(&p.waves.len()));
        for w in &p.waves {
            assert!((1.5..4.0).contains(&w.frequency));
            assert!((0.1..0.4).contains(&w.amplitude));
        }
        assert!((15.0..25.0).contains(&p.capture_margin));
        assert!((0.03..0.06).contains(&p.jitter));
    }
}

#[test]
fn positions_wrap_into_percent_range() {
    let p = DynamicParams {
        direction: Direction::Horizontal,
        waves: vec![SineWave {
            frequency: 2.0,
            amplitude: 0.4,
            phase: 0.3,
            angle: 1.0,
        }],
        capture_margin: 20.0,
        jitter: 0.05,
        jitter_seed: 1,
    };
    for i in 0..50 {
        let t = f64::from(i) / 50.0;
        let pos = DynamicRenderer::position(&p, t, 1.0 - t);
        assert!((0.0..100.0).contains(&pos));
    }
}

#[test]
fn single_emotion_only_varies_in_brightness() {
    let z = zones("joy=100");
    let res = Resolution::new(24, 18).unwrap();
    let exec = RenderExec::new(None, CancelToken::new());
    let canvas = DynamicRenderer.render(&z, &sample(&z, 9), res, &exec).unwrap();
    let base = Emotion::Joy.base_color();
    for px in canvas.pixels() {
        assert_eq!(px.b, 0);
        assert!(px.r >= 239);
        let ratio = f64::from(px.g) / f64::from(base.g);
        assert!((0.93..=1.07).contains(&ratio), "{px:?}");
    }
    assert!(canvas.pixels().any(|px| px != canvas.pixel(0, 0).unwrap_or(Rgb::BLACK)));
}

#[test]
fn output_is_identical_across_thread_counts() {
    let z = zones("anger=40,anxiety=35,joy=25");
    let params = sample(&z, 77);
    let res = Resolution::new(40, 50).unwrap();
    let single = DynamicRenderer
        .render(&z, &params, res, &RenderExec::new(None, CancelToken::new()))
        .unwrap();
    let pool = build_thread_pool(Some(3)).unwrap().unwrap();
    let pooled = DynamicRenderer
        .render(&z, &params, res, &RenderExec::new(Some(&pool), CancelToken::new()))
        .unwrap();
    assert_eq!(single, pooled);
}
