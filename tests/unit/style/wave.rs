use super::*;
use crate::emotion::distribution::EmotionDistribution;
use crate::emotion::palette::Emotion;
use crate::foundation::rng::Rng64;
use crate::render::exec::CancelToken;
use crate::style::config::ParamSource;
use crate::zones::builder::build_zones;

fn zones(pairs: &str) -> Vec<ColorZone> {
    build_zones(&pairs.parse::<EmotionDistribution>().unwrap()).unwrap()
}

fn exec() -> RenderExec<'static> {
    RenderExec::new(None, CancelToken::new())
}

#[test]
fn layer_amplitudes_decay_with_index() {
    let z = zones("sadness=100");
    for seed in 0..16 {
        let mut rng = Rng64::new(seed);
        let StyleParams::Waves(p) =
            WaveRenderer.sample_params(&z, &mut ParamSampler::new(ParamSource::Random, &mut rng))
        else {
            panic!("wave renderer produced foreign params");
        };
        assert!((3..=6).contains(&p.layers.len()));
        for (i, layer) in p.layers.iter().enumerate() {
            assert!(layer.amplitude < 0.2 / (i as f64 + 1.0) + 1e-12);
            assert!((1.5..4.5).contains(&layer.frequency));
        }
        assert!((10.0..25.0).contains(&p.blur_radius));
        assert!((0.5..0.7).contains(&p.blend_threshold));
    }
}

#[test]
fn flat_layers_give_a_left_to_right_gradient() {
    let z = zones("anger=50,sadness=50");
    let params = StyleParams::Waves(WaveParams {
        layers: vec![],
        blend_threshold: 0.6,
        blur_radius: 0.0,
    });
    let res = Resolution::new(20, 4).unwrap();
    let canvas = WaveRenderer.render(&z, &params, res, &exec()).unwrap();
    assert_eq!(canvas.pixel(0, 2), Some(Emotion::Anger.base_color()));
    assert_eq!(canvas.pixel(19, 2), Some(Emotion::Sadness.base_color()));
    // blending only starts past the threshold of the first zone
    assert_eq!(canvas.pixel(5, 0), Some(Emotion::Anger.base_color()));
}

#[test]
fn single_emotion_survives_blur_unchanged() {
    let z = zones("joy=100");
    let mut rng = Rng64::new(3);
    let params = WaveRenderer.sample_params(&z, &mut ParamSampler::new(ParamSource::Random, &mut rng));
    let res = Resolution::new(16, 27).unwrap();
    let canvas = WaveRenderer.render(&z, &params, res, &exec()).unwrap();
    assert!(canvas.pixels().all(|px| px == Emotion::Joy.base_color()));
}

#[test]
fn positions_are_clamped() {
    let p = WaveParams {
        layers: vec![SineWave {
            frequency: 1.0,
            amplitude: 0.5,
            phase: std::f64::consts::FRAC_PI_2,
            angle: std::f64::consts::FRAC_PI_2,
        }],
        blend_threshold: 0.5,
        blur_radius: 0.0,
    };
    assert_eq!(WaveRenderer::position(&p, 0.9, 0.0), 100.0);
    assert_eq!(WaveRenderer::position(&p, 0.1, 0.5), 0.0);
}
